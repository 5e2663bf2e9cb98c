use serde::{Deserialize, Serialize};

use crate::domains::billing::reconcile::{amount_from_percentage, percentage_from_amount};

/// A monetary split of some total, e.g. the guarantee deposit share of a
/// project budget.
///
/// The amount is authoritative: the percentage is always re-derived from the
/// amount, never the other way round. Both constructors uphold this, so a
/// split built from a percentage carries the percentage implied by the
/// rounded amount, which may differ slightly from the input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonetarySplit {
    pub amount: f64,
    pub percentage_of_total: f64,
    pub total: f64,
}

impl MonetarySplit {
    pub fn from_amount(amount: f64, total: f64) -> Self {
        Self {
            amount,
            percentage_of_total: percentage_from_amount(amount, total),
            total,
        }
    }

    pub fn from_percentage(percentage: f64, total: f64) -> Self {
        let amount = amount_from_percentage(percentage, total);
        Self::from_amount(amount, total)
    }

    /// Returns a new split with the amount replaced and the percentage
    /// re-derived. Splits are never adjusted in place.
    pub fn with_amount(&self, amount: f64) -> Self {
        Self::from_amount(amount, self.total)
    }
}

/// Outcome of checking a user-entered amount against its allowed maximum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmountValidation {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corrected_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AmountValidation {
    pub fn ok() -> Self {
        Self {
            valid: true,
            corrected_amount: None,
            message: None,
        }
    }

    pub fn corrected(amount: f64, message: &str) -> Self {
        Self {
            valid: false,
            corrected_amount: Some(amount),
            message: Some(message.to_string()),
        }
    }
}

/// Outcome of converting and checking a user-entered percentage.
///
/// The returned percentage is always re-derived from the (possibly clamped)
/// amount, so it can differ from what the user typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PercentageValidation {
    pub valid: bool,
    pub amount: f64,
    pub percentage: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
