//! Month-bucketed revenue aggregation for the dashboard chart.
//!
//! Callers fetch the bills for the selected period (see `fiscal`) and this
//! module folds them into the 12 month slots of the chosen year convention.
//! Only PAID bills with a received date contribute.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::domains::project::types::Bill;
use crate::domains::reporting::fiscal::{
    calendar_year_months, fiscal_month_index, fiscal_year_months, YearKind,
};

/// One chart bucket: a month label and the amount received in that month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    pub month: String,
    pub received: f64,
}

/// Buckets received amounts by month in the ordering of the given year
/// convention (calendar: Jan..Dec, fiscal: Jul..Jun).
pub fn monthly_revenue(bills: &[Bill], kind: YearKind) -> Vec<MonthlyRevenue> {
    let months = match kind {
        YearKind::Calendar => calendar_year_months(),
        YearKind::Fiscal => fiscal_year_months(),
    };

    let mut totals = [0.0f64; 12];
    for bill in bills {
        if !bill.is_paid() {
            continue;
        }
        let received_date = match bill.received_date {
            Some(date) => date,
            None => continue,
        };
        let index = match kind {
            YearKind::Calendar => received_date.month0() as usize,
            YearKind::Fiscal => fiscal_month_index(&received_date),
        };
        totals[index] += bill.received_amount.unwrap_or(0.0);
    }

    months
        .iter()
        .zip(totals)
        .map(|(month, received)| MonthlyRevenue {
            month: (*month).to_string(),
            received,
        })
        .collect()
}
