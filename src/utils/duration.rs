//! Duration parsing, rounding and rendering.
//!
//! A duration filter value is either a bare number of seconds or a formatted
//! string such as `1:30` or `0:01:30.5`. Comparisons round both sides to the
//! unit of the field's duration format first, so the format's granularity is
//! the comparison unit.

use crate::models::DurationFormat;

/// Parse a duration value into seconds.
///
/// Accepts a bare integer or float (raw seconds) or a `H:MM[:SS[.frac]]`
/// string. Returns None for anything else; never errors.
pub fn parse_duration(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(n) = raw.parse::<i64>() {
        return Some(n as f64);
    }
    if let Ok(n) = raw.parse::<f64>() {
        return Some(n);
    }

    let parts: Vec<&str> = raw.split(':').collect();
    match parts[..] {
        [h, m] => {
            let hours = parse_field(h)?;
            let minutes = parse_last_field(m)?;
            Some(hours as f64 * 3600.0 + minutes * 60.0)
        }
        [h, m, s] => {
            let hours = parse_field(h)?;
            let minutes = parse_field(m)?;
            let seconds = parse_last_field(s)?;
            Some(hours as f64 * 3600.0 + minutes as f64 * 60.0 + seconds)
        }
        _ => None,
    }
}

/// Round seconds to the smallest step of `format`, half away from zero.
pub fn round_to_format(secs: f64, format: DurationFormat) -> f64 {
    let unit = format.unit_secs();
    (secs / unit).round() * unit
}

/// Render seconds in `format`, rounding to the format's unit first.
pub fn format_seconds(secs: f64, format: DurationFormat) -> String {
    let sign = if secs < 0.0 { "-" } else { "" };
    let total = round_to_format(secs.abs(), format);

    let hours = (total / 3600.0).floor();
    let rest = total - hours * 3600.0;

    if format == DurationFormat::HoursMinutes {
        let minutes = (rest / 60.0).round() as i64;
        return format!("{}{}:{:02}", sign, hours as i64, minutes);
    }

    let minutes = (rest / 60.0).floor();
    let seconds = rest - minutes * 60.0;
    let digits = format.fraction_digits();
    if digits == 0 {
        format!(
            "{}{}:{:02}:{:02}",
            sign,
            hours as i64,
            minutes as i64,
            seconds.round() as i64
        )
    } else {
        format!(
            "{}{}:{:02}:{:0width$.digits$}",
            sign,
            hours as i64,
            minutes as i64,
            seconds,
            width = digits + 3,
        )
    }
}

/// Whole non-negative field (hours or middle minutes).
fn parse_field(s: &str) -> Option<i64> {
    s.trim().parse::<i64>().ok().filter(|n| *n >= 0)
}

/// Last field may carry a fraction (`30.5`).
fn parse_last_field(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|n| n.is_finite() && *n >= 0.0)
}
