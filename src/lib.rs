//! Derivation core for the project-billing dashboard.
//!
//! HTTP handlers fetch project and bill records from the store and hand them
//! to this crate as plain data; everything here is a pure, synchronous
//! function over those records:
//!
//! - `domains::project::status` - effective project status derivation
//! - `domains::reporting::fiscal` - year selector tokens and fiscal-period
//!   date math
//! - `domains::reporting::revenue` - month-bucketed revenue aggregation
//! - `domains::billing::reconcile` - percentage/amount reconciliation with
//!   amount as the source of truth
//! - `domains::billing::format` - display formatting (BDT currency, trimmed
//!   decimals)
//!
//! No state is shared between invocations; every function is safe to call
//! concurrently from request handlers.

// Public modules
pub mod domains;
pub mod errors;
pub mod types;
pub mod validation;

pub use domains::billing::{
    amount_from_percentage, distribute_by_percentages, percentage_from_amount, validate_amount,
    validate_percentage_input, AmountValidation, MonetarySplit, PercentageValidation,
};
pub use domains::project::status::{
    effective_status, effective_status_on, filter_by_effective_status, with_effective_status,
};
pub use domains::project::{Bill, NewBill, NewProject, Project, ProjectWithStatus};
pub use domains::reporting::{
    monthly_revenue, parse_year_token, year_date_range, DateRange, MonthlyRevenue,
    ParsedYearToken, YearKind,
};
pub use errors::{DomainError, DomainResult, ValidationError};
pub use types::{BillStatus, EffectiveStatus, ProjectStatus};
