pub mod list;

pub use list::ProjectList;
