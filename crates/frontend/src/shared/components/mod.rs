pub mod date_input;
pub mod filter_panel;

pub use date_input::DateInput;
pub use filter_panel::FilterPanel;
