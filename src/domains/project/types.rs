use crate::errors::DomainResult;
use crate::types::{BillStatus, EffectiveStatus, ProjectStatus};
use crate::validation::{Validate, ValidationBuilder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Project entity - a client engagement with its bill lines attached.
///
/// Records are fetched by external persistence collaborators and passed in
/// here read-only; nothing in this crate mutates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub client_name: String,
    pub total_budget: f64,
    pub status: Option<ProjectStatus>,
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub bills: Vec<Bill>,
}

impl Project {
    /// True when every bill is PAID and at least one bill exists.
    /// A project with no bills can never be considered fully paid.
    pub fn all_bills_paid(&self) -> bool {
        !self.bills.is_empty() && self.bills.iter().all(Bill::is_paid)
    }

    /// True when any bill is still PENDING or PARTIAL.
    pub fn has_unpaid_bills(&self) -> bool {
        self.bills.iter().any(Bill::is_unpaid)
    }
}

/// Bill entity - a single milestone/invoice line belonging to a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: Uuid,
    pub project_id: Uuid,
    pub status: Option<BillStatus>,
    pub bill_amount: f64,
    pub received_amount: Option<f64>,
    pub due_date: Option<DateTime<Utc>>,
    pub received_date: Option<DateTime<Utc>>,
}

impl Bill {
    pub fn is_paid(&self) -> bool {
        self.status == Some(BillStatus::Paid)
    }

    /// PENDING and PARTIAL both count as unpaid; a null status does not.
    pub fn is_unpaid(&self) -> bool {
        matches!(self.status, Some(BillStatus::Pending) | Some(BillStatus::Partial))
    }

    pub fn remaining_amount(&self) -> f64 {
        self.bill_amount - self.received_amount.unwrap_or(0.0)
    }
}

/// NewProject DTO - used when creating a new project
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub name: String,
    pub client_name: String,
    pub total_budget: f64,
    pub status: Option<ProjectStatus>,
    pub end_date: Option<DateTime<Utc>>,
}

impl Validate for NewProject {
    fn validate(&self) -> DomainResult<()> {
        ValidationBuilder::new("name", Some(self.name.clone()))
            .required()
            .min_length(2)
            .max_length(100)
            .validate()?;

        ValidationBuilder::new("client_name", Some(self.client_name.clone()))
            .required()
            .min_length(2)
            .max_length(100)
            .validate()?;

        ValidationBuilder::new("total_budget", Some(self.total_budget))
            .min(0.0)
            .validate()?;

        Ok(())
    }
}

/// NewBill DTO - used when adding a bill line to a project
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBill {
    pub project_id: Uuid,
    pub bill_amount: f64,
    pub received_amount: Option<f64>,
    pub status: Option<BillStatus>,
    pub due_date: Option<DateTime<Utc>>,
}

impl Validate for NewBill {
    fn validate(&self) -> DomainResult<()> {
        ValidationBuilder::new("bill_amount", Some(self.bill_amount))
            .min(0.0)
            .validate()?;

        if let Some(received) = self.received_amount {
            let bill_amount = self.bill_amount;
            ValidationBuilder::new("received_amount", Some(received))
                .min(0.0)
                .validate_with(|v: &f64| {
                    if *v > bill_amount {
                        Err(crate::errors::ValidationError::invalid_value(
                            "received_amount",
                            "cannot exceed the bill amount",
                        ))
                    } else {
                        Ok(())
                    }
                })
                .validate()?;
        }

        Ok(())
    }
}

/// Project annotated with its derived status, for API responses.
///
/// The flattened shape keeps the wire format identical to the raw project
/// record plus one extra `effectiveStatus` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectWithStatus {
    #[serde(flatten)]
    pub project: Project,
    pub effective_status: EffectiveStatus,
}
