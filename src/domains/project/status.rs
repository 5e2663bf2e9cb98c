//! Effective project status derivation.
//!
//! The status stored on a project is only what a user last set; listings and
//! filters need a status that also reflects the payment state of the
//! project's bills and whether its end date has passed. The rules below are
//! evaluated in order and the first match wins:
//!
//! 1. stored COMPLETED with no unpaid bill        -> COMPLETED
//! 2. every bill PAID (at least one bill)         -> COMPLETED
//! 3. stored PENDING_PAYMENT                      -> PENDING_PAYMENT
//! 4. stored COMPLETED with an unpaid bill        -> PENDING_PAYMENT
//! 5. end date passed with an unpaid bill         -> PENDING_PAYMENT
//! 6. anything else (stored ONGOING, null, ...)   -> ONGOING

use chrono::{NaiveDate, Utc};
use log::warn;

use crate::domains::project::types::{Project, ProjectWithStatus};
use crate::types::{EffectiveStatus, ProjectStatus};

/// Computes the effective status of a project against an explicit "today"
/// (UTC, time truncated). Total function; malformed input degrades to
/// `Ongoing` rather than failing.
pub fn effective_status_on(project: &Project, today: NaiveDate) -> EffectiveStatus {
    let unpaid = project.has_unpaid_bills();
    let end_date_passed = project
        .end_date
        .map(|end| end.date_naive() < today)
        .unwrap_or(false);

    if project.status == Some(ProjectStatus::Completed) && !unpaid {
        return EffectiveStatus::Completed;
    }
    if project.all_bills_paid() {
        return EffectiveStatus::Completed;
    }
    if project.status == Some(ProjectStatus::PendingPayment) {
        return EffectiveStatus::PendingPayment;
    }
    if project.status == Some(ProjectStatus::Completed) && unpaid {
        return EffectiveStatus::PendingPayment;
    }
    if end_date_passed && unpaid {
        return EffectiveStatus::PendingPayment;
    }

    EffectiveStatus::Ongoing
}

/// Computes the effective status of a project as of now.
pub fn effective_status(project: &Project) -> EffectiveStatus {
    effective_status_on(project, Utc::now().date_naive())
}

/// Filters projects by effective status.
///
/// An empty filter or `"all"` returns the input unchanged. Otherwise the
/// returned subsequence keeps the original order. An unrecognized filter
/// value matches nothing.
pub fn filter_by_effective_status(projects: Vec<Project>, status: &str) -> Vec<Project> {
    if status.is_empty() || status == "all" {
        return projects;
    }

    let wanted = match EffectiveStatus::from_str(status) {
        Some(wanted) => wanted,
        None => {
            warn!("unrecognized status filter {:?}, matching nothing", status);
            return Vec::new();
        }
    };

    // One "today" for the whole batch so every project in the response is
    // judged against the same day boundary.
    let today = Utc::now().date_naive();
    projects
        .into_iter()
        .filter(|project| effective_status_on(project, today) == wanted)
        .collect()
}

/// Annotates each project with its derived status without touching the
/// underlying record.
pub fn with_effective_status(projects: Vec<Project>) -> Vec<ProjectWithStatus> {
    let today = Utc::now().date_naive();
    projects
        .into_iter()
        .map(|project| {
            let effective_status = effective_status_on(&project, today);
            ProjectWithStatus {
                project,
                effective_status,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::project::types::Bill;
    use crate::types::BillStatus;
    use chrono::{DateTime, TimeZone};
    use uuid::Uuid;

    fn bill(status: Option<BillStatus>) -> Bill {
        Bill {
            id: Uuid::new_v4(),
            project_id: Uuid::new_v4(),
            status,
            bill_amount: 1000.0,
            received_amount: None,
            due_date: None,
            received_date: None,
        }
    }

    fn project(
        status: Option<ProjectStatus>,
        end_date: Option<DateTime<Utc>>,
        bills: Vec<Bill>,
    ) -> Project {
        Project {
            id: Uuid::new_v4(),
            name: "Metro rail feasibility".to_string(),
            client_name: "City Development Authority".to_string(),
            total_budget: 500_000.0,
            status,
            end_date,
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap(),
            bills,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    #[test]
    fn no_bills_and_no_status_is_ongoing() {
        let p = project(None, None, vec![]);
        assert_eq!(effective_status_on(&p, today()), EffectiveStatus::Ongoing);

        let p = project(Some(ProjectStatus::Ongoing), None, vec![]);
        assert_eq!(effective_status_on(&p, today()), EffectiveStatus::Ongoing);
    }

    #[test]
    fn zero_bills_never_completed_via_all_paid_rule() {
        // A project with no bills has nothing "fully paid" about it.
        let p = project(Some(ProjectStatus::Ongoing), None, vec![]);
        assert_ne!(effective_status_on(&p, today()), EffectiveStatus::Completed);
    }

    #[test]
    fn all_bills_paid_is_completed_regardless_of_raw_status() {
        let bills = vec![bill(Some(BillStatus::Paid)), bill(Some(BillStatus::Paid))];
        let past = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

        let p = project(Some(ProjectStatus::Ongoing), Some(past), bills.clone());
        assert_eq!(effective_status_on(&p, today()), EffectiveStatus::Completed);

        let p = project(None, Some(past), bills);
        assert_eq!(effective_status_on(&p, today()), EffectiveStatus::Completed);
    }

    #[test]
    fn completed_status_with_no_unpaid_bills_is_completed() {
        let p = project(Some(ProjectStatus::Completed), None, vec![]);
        assert_eq!(effective_status_on(&p, today()), EffectiveStatus::Completed);
    }

    #[test]
    fn completed_status_with_partial_bill_is_pending_payment() {
        let p = project(
            Some(ProjectStatus::Completed),
            None,
            vec![bill(Some(BillStatus::Paid)), bill(Some(BillStatus::Partial))],
        );
        assert_eq!(
            effective_status_on(&p, today()),
            EffectiveStatus::PendingPayment
        );
    }

    #[test]
    fn raw_pending_payment_sticks_when_bills_not_all_paid() {
        let p = project(
            Some(ProjectStatus::PendingPayment),
            None,
            vec![bill(Some(BillStatus::Pending))],
        );
        assert_eq!(
            effective_status_on(&p, today()),
            EffectiveStatus::PendingPayment
        );
    }

    #[test]
    fn past_end_date_with_pending_bill_is_pending_payment() {
        let today = today();
        let yesterday = Utc
            .from_utc_datetime(&today.pred_opt().unwrap().and_hms_opt(12, 0, 0).unwrap());
        let p = project(None, Some(yesterday), vec![bill(Some(BillStatus::Pending))]);
        assert_eq!(
            effective_status_on(&p, today),
            EffectiveStatus::PendingPayment
        );
    }

    #[test]
    fn future_end_date_with_pending_bill_is_ongoing() {
        let today = today();
        let tomorrow = Utc
            .from_utc_datetime(&today.succ_opt().unwrap().and_hms_opt(12, 0, 0).unwrap());
        let p = project(None, Some(tomorrow), vec![bill(Some(BillStatus::Pending))]);
        assert_eq!(effective_status_on(&p, today), EffectiveStatus::Ongoing);
    }

    #[test]
    fn end_date_today_is_not_passed() {
        let noon_today = Utc.from_utc_datetime(&today().and_hms_opt(12, 0, 0).unwrap());
        let p = project(None, Some(noon_today), vec![bill(Some(BillStatus::Pending))]);
        assert_eq!(effective_status_on(&p, today()), EffectiveStatus::Ongoing);
    }

    #[test]
    fn past_end_date_without_unpaid_bills_is_ongoing() {
        let long_past = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let p = project(None, Some(long_past), vec![]);
        assert_eq!(effective_status_on(&p, today()), EffectiveStatus::Ongoing);
    }

    #[test]
    fn null_bill_status_is_not_unpaid() {
        let long_past = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let p = project(None, Some(long_past), vec![bill(None)]);
        assert_eq!(effective_status_on(&p, today()), EffectiveStatus::Ongoing);
    }

    #[test]
    fn filter_all_is_identity() {
        let projects = vec![
            project(Some(ProjectStatus::Completed), None, vec![]),
            project(None, None, vec![bill(Some(BillStatus::Pending))]),
            project(Some(ProjectStatus::PendingPayment), None, vec![bill(Some(BillStatus::Partial))]),
        ];
        let ids: Vec<_> = projects.iter().map(|p| p.id).collect();

        let filtered = filter_by_effective_status(projects.clone(), "all");
        assert_eq!(filtered.iter().map(|p| p.id).collect::<Vec<_>>(), ids);

        let filtered = filter_by_effective_status(projects, "");
        assert_eq!(filtered.iter().map(|p| p.id).collect::<Vec<_>>(), ids);
    }

    #[test]
    fn filter_keeps_original_order() {
        let a = project(None, None, vec![]);
        let b = project(Some(ProjectStatus::Completed), None, vec![]);
        let c = project(None, None, vec![]);
        let (a_id, c_id) = (a.id, c.id);

        let filtered = filter_by_effective_status(vec![a, b, c], "ONGOING");
        assert_eq!(filtered.iter().map(|p| p.id).collect::<Vec<_>>(), vec![a_id, c_id]);
    }

    #[test]
    fn filter_unknown_status_matches_nothing() {
        let _ = env_logger::builder().is_test(true).try_init();
        let projects = vec![project(None, None, vec![])];
        assert!(filter_by_effective_status(projects, "ARCHIVED").is_empty());
    }

    #[test]
    fn annotation_adds_effective_status_field() {
        let projects = vec![project(Some(ProjectStatus::Completed), None, vec![])];
        let annotated = with_effective_status(projects);
        assert_eq!(annotated.len(), 1);
        assert_eq!(annotated[0].effective_status, EffectiveStatus::Completed);

        let json = serde_json::to_value(&annotated[0]).unwrap();
        assert_eq!(json["effectiveStatus"], "COMPLETED");
        assert_eq!(json["clientName"], "City Development Authority");
    }
}
