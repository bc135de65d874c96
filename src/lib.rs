//! rowfilter library root.
//! Pure view-filter evaluation: given a row's field value, a filter value
//! string and the field's configuration, each filter type decides whether the
//! row matches. No I/O, no hidden state; "today" comes from an injected clock.

pub mod clock;
pub mod errors;
pub mod filters;
pub mod models;
pub mod utils;

pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{FilterError, FilterResult};
pub use filters::{FilterKind, evaluate, get_evaluator};
pub use models::{
    DateValue, DurationFormat, FieldContext, FieldValue, FileRef, LinkedRow, SelectOption,
};
