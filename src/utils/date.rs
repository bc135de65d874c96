//! Date/timezone resolution shared by the date filter family.
//!
//! Filter values carry an optional timezone prefix separated from the payload
//! by the first `?`. Bad zone names and bad payloads never fail: the zone
//! falls back to UTC and numeric payloads fall back to their documented
//! default, so a half-typed filter still yields a decision.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Resolve an IANA timezone name, defaulting to UTC for empty or unknown
/// names.
pub fn resolve_zone(name: &str) -> Tz {
    name.trim().parse::<Tz>().unwrap_or(Tz::UTC)
}

/// Split a `timezone?payload` filter value.
///
/// Without a `?` the whole value is the payload and the zone is UTC
/// (offset filters serialize a bare `N` that way).
pub fn split_timezone(value: &str) -> (Tz, &str) {
    match value.split_once('?') {
        Some((zone, payload)) => (resolve_zone(zone), payload.trim()),
        None => (Tz::UTC, value.trim()),
    }
}

/// Read a zone-only filter value (today / current-period filters), where a
/// value without `?` is the timezone itself.
pub fn parse_zone(value: &str) -> Tz {
    match value.split_once('?') {
        Some((zone, _)) => resolve_zone(zone),
        None => resolve_zone(value),
    }
}

/// Calendar date of an instant as seen in `tz`.
pub fn civil_date(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// First valid instant of `date` in `tz`.
///
/// When midnight does not exist (spring-forward gap at 00:00) the earliest
/// valid local time of that day is used instead.
pub fn start_of_day(date: NaiveDate, tz: Tz) -> DateTime<Utc> {
    let mut local = date.and_time(NaiveTime::MIN);
    for _ in 0..4 {
        if let Some(dt) = tz.from_local_datetime(&local).earliest() {
            return dt.with_timezone(&Utc);
        }
        local += Duration::minutes(30);
    }
    // No zone shifts more than two hours at once.
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

/// Non-negative integer payload; empty or non-numeric defaults to 0.
pub fn parse_offset(payload: &str) -> i64 {
    payload.trim().parse::<i64>().map(|n| n.max(0)).unwrap_or(0)
}

/// Strictly positive integer payload; anything else is None.
pub fn parse_positive(payload: &str) -> Option<i64> {
    payload.trim().parse::<i64>().ok().filter(|n| *n > 0)
}

pub fn shift_days(date: NaiveDate, n: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(n)).unwrap_or(date)
}

pub fn shift_months(date: NaiveDate, n: i64) -> NaiveDate {
    let months = Months::new(n.unsigned_abs().min(u32::MAX as u64) as u32);
    if n >= 0 {
        date.checked_add_months(months).unwrap_or(date)
    } else {
        date.checked_sub_months(months).unwrap_or(date)
    }
}

pub fn shift_years(date: NaiveDate, n: i64) -> NaiveDate {
    shift_months(date, n.saturating_mul(12))
}

/// ISO week of `date`: Monday through the following Monday, end exclusive.
pub fn current_week(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = shift_days(date, -(date.weekday().num_days_from_monday() as i64));
    (start, shift_days(start, 7))
}

/// Calendar month of `date`, end exclusive.
pub fn current_month(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = date.with_day(1).unwrap_or(date);
    (start, shift_months(start, 1))
}

/// Calendar year of `date`, end exclusive.
pub fn current_year(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date);
    (start, shift_years(start, 1))
}
