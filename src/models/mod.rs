pub mod duration_format;
pub mod field_context;
pub mod field_value;
pub mod file_ref;
pub mod linked_row;
pub mod select_option;

pub use duration_format::DurationFormat;
pub use field_context::FieldContext;
pub use field_value::{DateValue, FieldValue};
pub use file_ref::FileRef;
pub use linked_row::LinkedRow;
pub use select_option::SelectOption;
