pub mod archived_mode;
pub mod project_status;
pub mod project_type;
pub mod sort_direction;

pub use archived_mode::ArchivedMode;
pub use project_status::ProjectStatus;
pub use project_type::ProjectType;
pub use sort_direction::SortDirection;
