//! Numeric filters.

use crate::models::FieldValue;

/// even-and-whole: the value is a whole number with an even integer part.
/// Null, fractional and odd values never match.
pub(crate) fn even_and_whole(row: &FieldValue) -> bool {
    let FieldValue::Number(n) = row else {
        return false;
    };
    if !n.is_finite() || n.fract() != 0.0 {
        return false;
    }
    (*n as i64) % 2 == 0
}
