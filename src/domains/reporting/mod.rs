pub mod fiscal;
pub mod revenue;

pub use fiscal::{parse_year_token, year_date_range, DateRange, ParsedYearToken, YearKind};
pub use revenue::{monthly_revenue, MonthlyRevenue};
