pub mod format;
pub mod reconcile;
pub mod types;

pub use reconcile::{
    amount_from_percentage, distribute_by_percentages, percentage_from_amount, validate_amount,
    validate_percentage_input,
};
pub use types::{AmountValidation, MonetarySplit, PercentageValidation};
