use serde::{Deserialize, Serialize};

use super::duration_format::DurationFormat;

/// Field-type configuration an evaluator needs to interpret the row value.
///
/// `date_include_time` decides whether date comparisons run at instant or
/// calendar-day granularity; `duration_format` fixes the rounding unit of
/// duration comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldContext {
    pub date_include_time: bool,
    pub duration_format: DurationFormat,
}

impl FieldContext {
    pub fn new(date_include_time: bool, duration_format: DurationFormat) -> Self {
        Self {
            date_include_time,
            duration_format,
        }
    }

    /// Context for a date field.
    pub fn date(include_time: bool) -> Self {
        Self {
            date_include_time: include_time,
            ..Self::default()
        }
    }

    /// Context for a duration field.
    pub fn duration(format: DurationFormat) -> Self {
        Self {
            duration_format: format,
            ..Self::default()
        }
    }
}

impl Default for FieldContext {
    fn default() -> Self {
        Self {
            date_include_time: false,
            duration_format: DurationFormat::default(),
        }
    }
}
