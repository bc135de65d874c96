//! Duration comparison filters.
//!
//! Both sides are rounded to the duration format's unit before comparing, so
//! with `h:mm` a 61-second row rounds to one minute and is NOT higher than a
//! 60-second threshold. Strict inequality only; equality matches neither
//! filter.

use crate::models::{FieldContext, FieldValue};
use crate::utils::duration::{parse_duration, round_to_format};

#[derive(Debug, Clone, Copy)]
pub(crate) enum DurationOp {
    HigherThan,
    LowerThan,
}

pub(crate) fn compare(
    row: &FieldValue,
    value: &str,
    ctx: &FieldContext,
    op: DurationOp,
) -> bool {
    let FieldValue::Duration(row_secs) = row else {
        return false;
    };
    let Some(filter_secs) = parse_duration(value) else {
        return false;
    };

    let row_rounded = round_to_format(*row_secs as f64, ctx.duration_format);
    let filter_rounded = round_to_format(filter_secs, ctx.duration_format);

    match op {
        DurationOp::HigherThan => row_rounded > filter_rounded,
        DurationOp::LowerThan => row_rounded < filter_rounded,
    }
}
