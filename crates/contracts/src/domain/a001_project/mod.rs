pub mod aggregate;
pub mod query;

pub use aggregate::{Project, ProjectId};
pub use query::{filter_projects, parse_date_floor, sort_by_created, ProjectCriteria};
