pub mod date_input;
pub mod number_format;
pub mod pagination_controls;

pub use date_input::DateInput;
pub use pagination_controls::PaginationControls;
