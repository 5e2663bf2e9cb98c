pub mod billing;
pub mod project;
pub mod reporting;

pub use project::status::{effective_status, filter_by_effective_status, with_effective_status};
pub use project::{Bill, Project};
