pub mod date_input;
pub mod searchable_select;

pub use date_input::DateInput;
pub use searchable_select::SearchableSelect;
