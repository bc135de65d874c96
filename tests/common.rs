#![allow(dead_code)]
use chrono::{DateTime, Utc};
use rowfilter::{
    DurationFormat, FieldContext, FieldValue, FileRef, FilterKind, FixedClock, LinkedRow,
    SelectOption,
};

/// Clock pinned to an RFC 3339 instant.
pub fn clock_at(iso: &str) -> FixedClock {
    let instant: DateTime<Utc> = iso.parse().expect("valid RFC 3339 instant in test");
    FixedClock(instant)
}

/// Row date value parsed from a stored string (Empty when unparseable).
pub fn date_row(raw: &str) -> FieldValue {
    FieldValue::date_from_str(raw)
}

pub fn date_ctx(include_time: bool) -> FieldContext {
    FieldContext::date(include_time)
}

pub fn duration_ctx(format: DurationFormat) -> FieldContext {
    FieldContext::duration(format)
}

/// Shorthand evaluation with a fixed clock.
pub fn check(
    kind: FilterKind,
    row: &FieldValue,
    value: &str,
    ctx: &FieldContext,
    clock: &FixedClock,
) -> bool {
    kind.matches(row, value, ctx, clock)
}

pub fn options(ids: &[i64]) -> FieldValue {
    FieldValue::Options(
        ids.iter()
            .map(|id| SelectOption::new(*id, &format!("option {id}"), "blue"))
            .collect(),
    )
}

pub fn files(entries: &[(&str, bool)]) -> FieldValue {
    FieldValue::Files(
        entries
            .iter()
            .map(|(name, is_image)| FileRef::new(name, *is_image))
            .collect(),
    )
}

pub fn linked_rows(display_values: &[&str]) -> FieldValue {
    FieldValue::LinkedRows(display_values.iter().map(|v| LinkedRow::new(v)).collect())
}
