//! Containment and length filters over option, file and link-row lists.
//!
//! The multi-select filters fail OPEN on a filter value that is not a valid
//! option id: both `has` and `has_not` answer true, so a half-typed filter in
//! an editor never hides rows. All other malformed values resolve to the
//! default documented on each evaluator.

use crate::models::FieldValue;

/// multiple-select has: some option carries the filter's id.
pub(crate) fn multiple_select_has(row: &FieldValue, value: &str) -> bool {
    let Ok(id) = value.trim().parse::<i64>() else {
        return true;
    };
    match row {
        FieldValue::Options(options) => options.iter().any(|o| o.id == id),
        _ => false,
    }
}

/// multiple-select has-not: negation of `has`, except the fail-open case.
pub(crate) fn multiple_select_has_not(row: &FieldValue, value: &str) -> bool {
    if value.trim().parse::<i64>().is_err() {
        return true;
    }
    !multiple_select_has(row, value)
}

/// link-row contains: some linked row's display value contains the filter
/// text, case-insensitively. An empty filter matches everything.
pub(crate) fn link_row_contains(row: &FieldValue, value: &str) -> bool {
    if value.is_empty() {
        return true;
    }
    let needle = value.to_lowercase();
    match row {
        FieldValue::LinkedRows(rows) => rows
            .iter()
            .any(|r| r.display_value.to_lowercase().contains(&needle)),
        _ => false,
    }
}

/// link-row not-contains: pure negation of `contains`, empty filter included.
pub(crate) fn link_row_not_contains(row: &FieldValue, value: &str) -> bool {
    !link_row_contains(row, value)
}

/// has-file-type: `image` or `document` selects by the attachment flag; an
/// empty or unrecognized category matches everything.
pub(crate) fn has_file_type(row: &FieldValue, value: &str) -> bool {
    let want_image = match value.trim() {
        "image" => true,
        "document" => false,
        _ => return true,
    };
    match row {
        FieldValue::Files(files) => files.iter().any(|f| f.is_image == want_image),
        _ => false,
    }
}

/// files-lower-than: attachment count strictly below the threshold. A
/// non-numeric threshold never matches; a null row never matches.
pub(crate) fn files_lower_than(row: &FieldValue, value: &str) -> bool {
    let Ok(threshold) = value.trim().parse::<i64>() else {
        return false;
    };
    match row {
        FieldValue::Files(files) => (files.len() as i64) < threshold,
        _ => false,
    }
}

/// length-lower-than: character count strictly below the threshold. A
/// non-numeric or zero threshold means no effective limit and matches
/// everything; a null row never matches.
pub(crate) fn length_lower_than(row: &FieldValue, value: &str) -> bool {
    let Ok(threshold) = value.trim().parse::<i64>() else {
        return true;
    };
    if threshold == 0 {
        return true;
    }
    match row {
        FieldValue::Text(text) => (text.chars().count() as i64) < threshold,
        _ => false,
    }
}
