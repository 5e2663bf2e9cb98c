//! Percentage/amount reconciliation for bill and deposit entry forms.
//!
//! The convention throughout the dashboard is that absolute amounts are the
//! source of truth: a percentage typed by a user is converted to an amount
//! first, corrections are applied to the amount, and the percentage shown
//! back is re-derived from the corrected amount.

use log::debug;

use crate::domains::billing::types::{AmountValidation, PercentageValidation};

/// Tolerance for floating-point comparisons, in percentage units.
pub const EPSILON: f64 = 0.0001;

/// Rounds a value to the given number of decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Amount implied by a percentage of a total, rounded to the nearest whole
/// currency unit (ties away from zero).
pub fn amount_from_percentage(percentage: f64, total: f64) -> f64 {
    (percentage / 100.0 * total).round()
}

/// Percentage an amount represents of a total, rounded to two decimals.
/// A zero total yields zero rather than a division error.
pub fn percentage_from_amount(amount: f64, total: f64) -> f64 {
    percentage_from_amount_with(amount, total, 2)
}

/// Same as `percentage_from_amount` with an explicit decimal precision.
pub fn percentage_from_amount_with(amount: f64, total: f64, decimals: u32) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    round_to(amount / total * 100.0, decimals)
}

/// Checks if two numbers are approximately equal within epsilon tolerance.
pub fn is_approximately_equal(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON
}

/// Checks if value is less than or approximately equal to max, absorbing
/// floating-point drift right at the boundary.
pub fn is_less_or_approximately_equal(value: f64, max: f64) -> bool {
    value <= max || (value - max).abs() <= EPSILON
}

/// Validates a user-entered amount against its allowed maximum.
///
/// Never fails: a negative entry corrects to zero, an entry above the
/// maximum corrects to the maximum.
pub fn validate_amount(entered: f64, max: f64) -> AmountValidation {
    if entered < 0.0 {
        debug!("amount {} corrected to 0 (negative)", entered);
        return AmountValidation::corrected(0.0, "Amount cannot be negative");
    }

    if entered > max {
        debug!("amount {} corrected to maximum {}", entered, max);
        return AmountValidation::corrected(max, &format!("Amount cannot exceed {}", max));
    }

    AmountValidation::ok()
}

/// Validates a user-entered percentage of `total` against a maximum amount.
///
/// The percentage is converted to an amount first (the source of truth),
/// clamped to `[0, max_amount]`, and the returned percentage is re-derived
/// from the clamped amount. When clamping occurred, the message quotes the
/// corrected percentage the user will see.
pub fn validate_percentage_input(
    entered_percentage: f64,
    total: f64,
    max_amount: f64,
) -> PercentageValidation {
    let amount = amount_from_percentage(entered_percentage, total);

    if amount < 0.0 {
        debug!("percentage {} corrected to 0 (negative)", entered_percentage);
        return PercentageValidation {
            valid: false,
            amount: 0.0,
            percentage: 0.0,
            message: Some("Percentage cannot be negative".to_string()),
        };
    }

    if amount > max_amount {
        let corrected = percentage_from_amount(max_amount, total);
        debug!(
            "percentage {} implies amount {} above maximum {}, corrected to {}%",
            entered_percentage, amount, max_amount, corrected
        );
        return PercentageValidation {
            valid: false,
            amount: max_amount,
            percentage: corrected,
            message: Some(format!("Exceeds maximum. Corrected to {:.2}%", corrected)),
        };
    }

    PercentageValidation {
        valid: true,
        amount,
        percentage: percentage_from_amount(amount, total),
        message: None,
    }
}

/// Distributes a total across shares given as percentages, guaranteeing the
/// results sum exactly to `round(total)`.
///
/// Each share is rounded independently; the rounding remainder is assigned
/// wholly to the largest share (first occurrence on ties).
pub fn distribute_by_percentages(total: f64, percentages: &[f64]) -> Vec<f64> {
    let mut amounts: Vec<f64> = percentages
        .iter()
        .map(|pct| amount_from_percentage(*pct, total))
        .collect();

    let sum: f64 = amounts.iter().sum();
    let remainder = total.round() - sum;

    if remainder != 0.0 && !amounts.is_empty() {
        let mut max_index = 0;
        for (i, amount) in amounts.iter().enumerate() {
            if *amount > amounts[max_index] {
                max_index = i;
            }
        }
        amounts[max_index] += remainder;
    }

    amounts
}
