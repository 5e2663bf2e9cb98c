pub mod status;
pub mod types;

pub use types::{Bill, NewBill, NewProject, Project, ProjectWithStatus};
