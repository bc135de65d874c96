//! Date filter family.
//!
//! Every evaluator resolves the filter value's timezone first, converts the
//! row value into that zone, then compares. When `date_include_time` is false
//! (or the row holds a bare calendar date) the comparison runs on civil dates;
//! otherwise on exact instants. A missing row value never matches, not even
//! `date_not_equal`: the negation applies to the comparison, not to presence.

use std::cmp::Ordering;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::clock::Clock;
use crate::models::{DateValue, FieldContext, FieldValue};
use crate::utils::date::{
    civil_date, current_month, current_week, current_year, parse_offset, parse_positive,
    parse_zone, shift_days, shift_months, shift_years, split_timezone, start_of_day,
};

#[derive(Debug, Clone, Copy)]
pub(crate) enum CompareOp {
    Before,
    BeforeOrEqual,
    Equal,
    NotEqual,
    After,
    AfterOrEqual,
}

impl CompareOp {
    fn holds(self, ord: Ordering) -> bool {
        match self {
            CompareOp::Before => ord == Ordering::Less,
            CompareOp::BeforeOrEqual => ord != Ordering::Greater,
            CompareOp::Equal => ord == Ordering::Equal,
            CompareOp::NotEqual => ord != Ordering::Equal,
            CompareOp::After => ord == Ordering::Greater,
            CompareOp::AfterOrEqual => ord != Ordering::Less,
        }
    }
}

/// Calendar unit of the relative-offset filters.
#[derive(Debug, Clone, Copy)]
pub(crate) enum OffsetUnit {
    Days,
    Weeks,
    Months,
}

/// Row value converted into the comparison zone, at the granularity the field
/// context allows.
enum RowDate {
    Day(NaiveDate),
    Instant(DateTime<Utc>),
}

fn as_date(row: &FieldValue) -> Option<DateValue> {
    match row {
        FieldValue::Date(d) => Some(*d),
        _ => None,
    }
}

fn row_in_zone(value: DateValue, tz: Tz, include_time: bool) -> RowDate {
    match value {
        // A bare date is a whole day no matter what the field says.
        DateValue::Day(d) => RowDate::Day(d),
        DateValue::Timestamp(t) if include_time => RowDate::Instant(t),
        DateValue::Timestamp(t) => RowDate::Day(civil_date(t, tz)),
    }
}

/// Row value truncated to its civil day in `tz`, for the day-granularity
/// filters (today / period / offset families).
fn row_civil_day(value: DateValue, tz: Tz) -> NaiveDate {
    match value {
        DateValue::Day(d) => d,
        DateValue::Timestamp(t) => civil_date(t, tz),
    }
}

/// Target of a comparison filter as a civil day. Empty payload means today.
fn target_day(payload: &str, tz: Tz, now: DateTime<Utc>) -> Option<NaiveDate> {
    if payload.is_empty() {
        return Some(civil_date(now, tz));
    }
    match DateValue::parse(payload)? {
        DateValue::Day(d) => Some(d),
        DateValue::Timestamp(t) => Some(civil_date(t, tz)),
    }
}

/// Target of a comparison filter as an instant. A date-only payload resolves
/// to that day's first instant in `tz`.
fn target_instant(payload: &str, tz: Tz, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    if payload.is_empty() {
        return Some(start_of_day(civil_date(now, tz), tz));
    }
    match DateValue::parse(payload)? {
        DateValue::Day(d) => Some(start_of_day(d, tz)),
        DateValue::Timestamp(t) => Some(t),
    }
}

pub(crate) fn compare(
    row: &FieldValue,
    value: &str,
    ctx: &FieldContext,
    clock: &dyn Clock,
    op: CompareOp,
) -> bool {
    let Some(date) = as_date(row) else {
        return false;
    };
    let (tz, payload) = split_timezone(value);
    let now = clock.now();

    match row_in_zone(date, tz, ctx.date_include_time) {
        RowDate::Day(day) => match target_day(payload, tz, now) {
            Some(target) => op.holds(day.cmp(&target)),
            None => false,
        },
        RowDate::Instant(instant) => match target_instant(payload, tz, now) {
            Some(target) => op.holds(instant.cmp(&target)),
            None => false,
        },
    }
}

/// today / before-today / after-today. The filter value is the timezone name;
/// both sides are truncated to civil days in that zone.
pub(crate) fn compare_today(
    row: &FieldValue,
    value: &str,
    clock: &dyn Clock,
    op: CompareOp,
) -> bool {
    let Some(date) = as_date(row) else {
        return false;
    };
    let tz = parse_zone(value);
    let today = civil_date(clock.now(), tz);
    op.holds(row_civil_day(date, tz).cmp(&today))
}

/// Period of the current-period filters.
#[derive(Debug, Clone, Copy)]
pub(crate) enum CurrentPeriod {
    Week,
    Month,
    Year,
}

/// within-current-week / month / year: row falls in `[start, end)` of the
/// period containing today. Weeks start on Monday.
pub(crate) fn within_current_period(
    row: &FieldValue,
    value: &str,
    ctx: &FieldContext,
    clock: &dyn Clock,
    period: CurrentPeriod,
) -> bool {
    let Some(date) = as_date(row) else {
        return false;
    };
    let tz = parse_zone(value);
    let today = civil_date(clock.now(), tz);
    let (start, end) = match period {
        CurrentPeriod::Week => current_week(today),
        CurrentPeriod::Month => current_month(today),
        CurrentPeriod::Year => current_year(today),
    };

    match row_in_zone(date, tz, ctx.date_include_time) {
        RowDate::Day(day) => start <= day && day < end,
        RowDate::Instant(instant) => {
            start_of_day(start, tz) <= instant && instant < start_of_day(end, tz)
        }
    }
}

/// within-next-N-days/weeks/months: civil day in `[today, today + N units]`,
/// both bounds inclusive. Empty or non-numeric N is 0 (today only).
pub(crate) fn within_next(
    row: &FieldValue,
    value: &str,
    clock: &dyn Clock,
    unit: OffsetUnit,
) -> bool {
    let Some(date) = as_date(row) else {
        return false;
    };
    let (tz, payload) = split_timezone(value);
    let n = parse_offset(payload);
    let today = civil_date(clock.now(), tz);
    let upper = match unit {
        OffsetUnit::Days => shift_days(today, n),
        OffsetUnit::Weeks => shift_days(today, n.saturating_mul(7)),
        OffsetUnit::Months => shift_months(today, n),
    };
    let day = row_civil_day(date, tz);
    today <= day && day <= upper
}

/// Unit of the exact-match "ago" filters.
#[derive(Debug, Clone, Copy)]
pub(crate) enum AgoUnit {
    Days,
    Months,
    Years,
}

/// N-units-ago: exact match at the unit's granularity. Days hit one civil
/// day, months one calendar month, years one calendar year.
pub(crate) fn equals_ago(row: &FieldValue, value: &str, clock: &dyn Clock, unit: AgoUnit) -> bool {
    let Some(date) = as_date(row) else {
        return false;
    };
    let (tz, payload) = split_timezone(value);
    let n = parse_offset(payload);
    let today = civil_date(clock.now(), tz);
    let day = row_civil_day(date, tz);

    match unit {
        AgoUnit::Days => day == shift_days(today, -n),
        AgoUnit::Months => {
            let target = shift_months(today, -n);
            day.year() == target.year() && day.month() == target.month()
        }
        AgoUnit::Years => day.year() == shift_years(today, -n).year(),
    }
}

/// after-days-ago: civil day in the inclusive window `[today - N, today]`.
/// N must be strictly positive; anything else is a non-match.
pub(crate) fn after_days_ago(row: &FieldValue, value: &str, clock: &dyn Clock) -> bool {
    let Some(date) = as_date(row) else {
        return false;
    };
    let (tz, payload) = split_timezone(value);
    let Some(n) = parse_positive(payload) else {
        return false;
    };
    let today = civil_date(clock.now(), tz);
    let day = row_civil_day(date, tz);
    shift_days(today, -n) <= day && day <= today
}
