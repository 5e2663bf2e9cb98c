use std::fmt;

use serde::{Deserialize, Serialize};

/// Raw project status flag as persisted by the dashboard's store.
///
/// This is the value a user last set on the project; the status shown in
/// listings is derived from it together with the project's bills and end
/// date (see `domains::project::status`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    Ongoing,
    Completed,
    PendingPayment,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Ongoing => "ONGOING",
            ProjectStatus::Completed => "COMPLETED",
            ProjectStatus::PendingPayment => "PENDING_PAYMENT",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "ONGOING" => Some(ProjectStatus::Ongoing),
            "COMPLETED" => Some(ProjectStatus::Completed),
            "PENDING_PAYMENT" => Some(ProjectStatus::PendingPayment),
            _ => None,
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payment status of a single bill line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillStatus {
    Pending,
    Partial,
    Paid,
}

impl BillStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillStatus::Pending => "PENDING",
            BillStatus::Partial => "PARTIAL",
            BillStatus::Paid => "PAID",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(BillStatus::Pending),
            "PARTIAL" => Some(BillStatus::Partial),
            "PAID" => Some(BillStatus::Paid),
            _ => None,
        }
    }
}

impl fmt::Display for BillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Computed lifecycle status of a project.
///
/// Never persisted; recomputed on every read so filtering and display stay
/// consistent with the current bill payment state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectiveStatus {
    Ongoing,
    Completed,
    PendingPayment,
}

impl EffectiveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EffectiveStatus::Ongoing => "ONGOING",
            EffectiveStatus::Completed => "COMPLETED",
            EffectiveStatus::PendingPayment => "PENDING_PAYMENT",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "ONGOING" => Some(EffectiveStatus::Ongoing),
            "COMPLETED" => Some(EffectiveStatus::Completed),
            "PENDING_PAYMENT" => Some(EffectiveStatus::PendingPayment),
            _ => None,
        }
    }
}

impl fmt::Display for EffectiveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
