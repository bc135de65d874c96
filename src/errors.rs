//! Unified crate error type.
//! Per-row evaluation never errors (bad filter input resolves to a documented
//! default match decision); only catalog misuse surfaces as FilterError.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    // ---------------------------
    // Catalog errors
    // ---------------------------
    #[error("Unknown filter type: {0}")]
    UnknownFilterType(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid duration format: {0}")]
    InvalidDurationFormat(String),
}

pub type FilterResult<T> = Result<T, FilterError>;
