//! Filter-type catalog.
//!
//! Every filter type is a variant of [`FilterKind`]; the catalog maps the
//! stable string key a view configuration stores to its variant and back.
//! Evaluation is uniform: `(row value, filter value, field context, clock)`
//! in, boolean out. Row data never makes evaluation fail; the only hard error
//! in the crate is looking up a key the catalog does not know.

pub mod collection;
pub mod date;
pub mod duration;
pub mod number;

use crate::clock::Clock;
use crate::errors::{FilterError, FilterResult};
use crate::models::{FieldContext, FieldValue};

use date::{AgoUnit, CompareOp, CurrentPeriod, OffsetUnit};
use duration::DurationOp;

/// Closed set of supported filter types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    DateEqual,
    DateNotEqual,
    DateBefore,
    DateBeforeOrEqual,
    DateAfter,
    DateAfterOrEqual,
    DateEqualsToday,
    DateBeforeToday,
    DateAfterToday,
    DateWithinCurrentWeek,
    DateWithinCurrentMonth,
    DateWithinCurrentYear,
    DateWithinDays,
    DateWithinWeeks,
    DateWithinMonths,
    DateEqualsDaysAgo,
    DateEqualsMonthsAgo,
    DateEqualsYearsAgo,
    DateAfterDaysAgo,
    HigherThan,
    LowerThan,
    MultipleSelectHas,
    MultipleSelectHasNot,
    LinkRowContains,
    LinkRowNotContains,
    HasFileType,
    FilesLowerThan,
    LengthIsLowerThan,
    EvenAndWhole,
}

impl FilterKind {
    pub const ALL: [FilterKind; 29] = [
        FilterKind::DateEqual,
        FilterKind::DateNotEqual,
        FilterKind::DateBefore,
        FilterKind::DateBeforeOrEqual,
        FilterKind::DateAfter,
        FilterKind::DateAfterOrEqual,
        FilterKind::DateEqualsToday,
        FilterKind::DateBeforeToday,
        FilterKind::DateAfterToday,
        FilterKind::DateWithinCurrentWeek,
        FilterKind::DateWithinCurrentMonth,
        FilterKind::DateWithinCurrentYear,
        FilterKind::DateWithinDays,
        FilterKind::DateWithinWeeks,
        FilterKind::DateWithinMonths,
        FilterKind::DateEqualsDaysAgo,
        FilterKind::DateEqualsMonthsAgo,
        FilterKind::DateEqualsYearsAgo,
        FilterKind::DateAfterDaysAgo,
        FilterKind::HigherThan,
        FilterKind::LowerThan,
        FilterKind::MultipleSelectHas,
        FilterKind::MultipleSelectHasNot,
        FilterKind::LinkRowContains,
        FilterKind::LinkRowNotContains,
        FilterKind::HasFileType,
        FilterKind::FilesLowerThan,
        FilterKind::LengthIsLowerThan,
        FilterKind::EvenAndWhole,
    ];

    /// Stable key stored in view configurations.
    pub fn key(&self) -> &'static str {
        match self {
            FilterKind::DateEqual => "date_equal",
            FilterKind::DateNotEqual => "date_not_equal",
            FilterKind::DateBefore => "date_before",
            FilterKind::DateBeforeOrEqual => "date_before_or_equal",
            FilterKind::DateAfter => "date_after",
            FilterKind::DateAfterOrEqual => "date_after_or_equal",
            FilterKind::DateEqualsToday => "date_equals_today",
            FilterKind::DateBeforeToday => "date_before_today",
            FilterKind::DateAfterToday => "date_after_today",
            FilterKind::DateWithinCurrentWeek => "date_within_current_week",
            FilterKind::DateWithinCurrentMonth => "date_within_current_month",
            FilterKind::DateWithinCurrentYear => "date_within_current_year",
            FilterKind::DateWithinDays => "date_within_days",
            FilterKind::DateWithinWeeks => "date_within_weeks",
            FilterKind::DateWithinMonths => "date_within_months",
            FilterKind::DateEqualsDaysAgo => "date_equals_days_ago",
            FilterKind::DateEqualsMonthsAgo => "date_equals_months_ago",
            FilterKind::DateEqualsYearsAgo => "date_equals_years_ago",
            FilterKind::DateAfterDaysAgo => "date_after_days_ago",
            FilterKind::HigherThan => "higher_than",
            FilterKind::LowerThan => "lower_than",
            FilterKind::MultipleSelectHas => "multiple_select_has",
            FilterKind::MultipleSelectHasNot => "multiple_select_has_not",
            FilterKind::LinkRowContains => "link_row_contains",
            FilterKind::LinkRowNotContains => "link_row_not_contains",
            FilterKind::HasFileType => "has_file_type",
            FilterKind::FilesLowerThan => "files_lower_than",
            FilterKind::LengthIsLowerThan => "length_is_lower_than",
            FilterKind::EvenAndWhole => "even_and_whole",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        FilterKind::ALL.iter().copied().find(|k| k.key() == key)
    }

    /// Evaluate this filter against one row value.
    pub fn matches(
        &self,
        row: &FieldValue,
        value: &str,
        ctx: &FieldContext,
        clock: &dyn Clock,
    ) -> bool {
        match self {
            FilterKind::DateEqual => date::compare(row, value, ctx, clock, CompareOp::Equal),
            FilterKind::DateNotEqual => date::compare(row, value, ctx, clock, CompareOp::NotEqual),
            FilterKind::DateBefore => date::compare(row, value, ctx, clock, CompareOp::Before),
            FilterKind::DateBeforeOrEqual => {
                date::compare(row, value, ctx, clock, CompareOp::BeforeOrEqual)
            }
            FilterKind::DateAfter => date::compare(row, value, ctx, clock, CompareOp::After),
            FilterKind::DateAfterOrEqual => {
                date::compare(row, value, ctx, clock, CompareOp::AfterOrEqual)
            }
            FilterKind::DateEqualsToday => {
                date::compare_today(row, value, clock, CompareOp::Equal)
            }
            FilterKind::DateBeforeToday => {
                date::compare_today(row, value, clock, CompareOp::Before)
            }
            FilterKind::DateAfterToday => date::compare_today(row, value, clock, CompareOp::After),
            FilterKind::DateWithinCurrentWeek => {
                date::within_current_period(row, value, ctx, clock, CurrentPeriod::Week)
            }
            FilterKind::DateWithinCurrentMonth => {
                date::within_current_period(row, value, ctx, clock, CurrentPeriod::Month)
            }
            FilterKind::DateWithinCurrentYear => {
                date::within_current_period(row, value, ctx, clock, CurrentPeriod::Year)
            }
            FilterKind::DateWithinDays => date::within_next(row, value, clock, OffsetUnit::Days),
            FilterKind::DateWithinWeeks => date::within_next(row, value, clock, OffsetUnit::Weeks),
            FilterKind::DateWithinMonths => {
                date::within_next(row, value, clock, OffsetUnit::Months)
            }
            FilterKind::DateEqualsDaysAgo => date::equals_ago(row, value, clock, AgoUnit::Days),
            FilterKind::DateEqualsMonthsAgo => {
                date::equals_ago(row, value, clock, AgoUnit::Months)
            }
            FilterKind::DateEqualsYearsAgo => date::equals_ago(row, value, clock, AgoUnit::Years),
            FilterKind::DateAfterDaysAgo => date::after_days_ago(row, value, clock),
            FilterKind::HigherThan => {
                duration::compare(row, value, ctx, DurationOp::HigherThan)
            }
            FilterKind::LowerThan => duration::compare(row, value, ctx, DurationOp::LowerThan),
            FilterKind::MultipleSelectHas => collection::multiple_select_has(row, value),
            FilterKind::MultipleSelectHasNot => collection::multiple_select_has_not(row, value),
            FilterKind::LinkRowContains => collection::link_row_contains(row, value),
            FilterKind::LinkRowNotContains => collection::link_row_not_contains(row, value),
            FilterKind::HasFileType => collection::has_file_type(row, value),
            FilterKind::FilesLowerThan => collection::files_lower_than(row, value),
            FilterKind::LengthIsLowerThan => collection::length_lower_than(row, value),
            FilterKind::EvenAndWhole => number::even_and_whole(row),
        }
    }
}

/// Catalog lookup. An unknown key is a caller error, not a silent non-match.
pub fn get_evaluator(key: &str) -> FilterResult<FilterKind> {
    FilterKind::from_key(key).ok_or_else(|| FilterError::UnknownFilterType(key.to_string()))
}

/// Look up a filter type by key and evaluate it in one call.
pub fn evaluate(
    key: &str,
    row: &FieldValue,
    value: &str,
    ctx: &FieldContext,
    clock: &dyn Clock,
) -> FilterResult<bool> {
    Ok(get_evaluator(key)?.matches(row, value, ctx, clock))
}
