use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::file_ref::FileRef;
use super::linked_row::LinkedRow;
use super::select_option::SelectOption;

/// A date field value.
///
/// A bare calendar date stays a calendar date: it covers the whole day in any
/// timezone, independent of the field's `date_include_time` flag. A timestamp
/// is an exact instant with sub-second precision preserved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DateValue {
    Day(NaiveDate),
    Timestamp(DateTime<Utc>),
}

impl DateValue {
    /// Parse a stored date value. Accepts `YYYY-MM-DD`, RFC 3339, and naive
    /// `YYYY-MM-DD[T ]HH:MM[:SS[.frac]]` timestamps (read as UTC).
    /// Returns None on anything else; never errors.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();

        if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(DateValue::Day(d));
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(DateValue::Timestamp(dt.with_timezone(&Utc)));
        }

        for fmt in [
            "%Y-%m-%dT%H:%M:%S%.f",
            "%Y-%m-%d %H:%M:%S%.f",
            "%Y-%m-%dT%H:%M",
            "%Y-%m-%d %H:%M",
        ] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
                return Some(DateValue::Timestamp(dt.and_utc()));
            }
        }

        None
    }
}

/// A row's stored value for one field.
///
/// `Empty` stands for null/absent data of any field kind. Evaluators apply
/// their own null policy to it; by default a missing value never matches a
/// positive predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Empty,
    Date(DateValue),
    /// Whole seconds.
    Duration(i64),
    Text(String),
    Options(Vec<SelectOption>),
    Files(Vec<FileRef>),
    LinkedRows(Vec<LinkedRow>),
    Number(f64),
}

impl FieldValue {
    /// Parse a stored date string into a date value, `Empty` when unparseable.
    pub fn date_from_str(raw: &str) -> Self {
        match DateValue::parse(raw) {
            Some(d) => FieldValue::Date(d),
            None => FieldValue::Empty,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Empty)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(d: NaiveDate) -> Self {
        FieldValue::Date(DateValue::Day(d))
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(t: DateTime<Utc>) -> Self {
        FieldValue::Date(DateValue::Timestamp(t))
    }
}
