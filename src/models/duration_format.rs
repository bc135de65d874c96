use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::FilterError;

/// Display granularity of a duration field.
///
/// The format is not only cosmetic: it fixes the rounding unit used when two
/// durations are compared, so `h:mm` comparisons happen on whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DurationFormat {
    HoursMinutes,            // h:mm
    HoursMinutesSeconds,     // h:mm:ss
    HoursMinutesSecondsDeci, // h:mm:ss.s
    HoursMinutesSecondsCenti, // h:mm:ss.ss
    HoursMinutesSecondsMilli, // h:mm:ss.sss
}

impl DurationFormat {
    pub fn from_format_str(s: &str) -> Option<Self> {
        match s {
            "h:mm" => Some(Self::HoursMinutes),
            "h:mm:ss" => Some(Self::HoursMinutesSeconds),
            "h:mm:ss.s" => Some(Self::HoursMinutesSecondsDeci),
            "h:mm:ss.ss" => Some(Self::HoursMinutesSecondsCenti),
            "h:mm:ss.sss" => Some(Self::HoursMinutesSecondsMilli),
            _ => None,
        }
    }

    pub fn format_str(&self) -> &'static str {
        match self {
            DurationFormat::HoursMinutes => "h:mm",
            DurationFormat::HoursMinutesSeconds => "h:mm:ss",
            DurationFormat::HoursMinutesSecondsDeci => "h:mm:ss.s",
            DurationFormat::HoursMinutesSecondsCenti => "h:mm:ss.ss",
            DurationFormat::HoursMinutesSecondsMilli => "h:mm:ss.sss",
        }
    }

    /// Smallest representable step of the format, in seconds.
    pub fn unit_secs(&self) -> f64 {
        match self {
            DurationFormat::HoursMinutes => 60.0,
            DurationFormat::HoursMinutesSeconds => 1.0,
            DurationFormat::HoursMinutesSecondsDeci => 0.1,
            DurationFormat::HoursMinutesSecondsCenti => 0.01,
            DurationFormat::HoursMinutesSecondsMilli => 0.001,
        }
    }

    /// Number of fractional second digits shown by the format.
    pub fn fraction_digits(&self) -> usize {
        match self {
            DurationFormat::HoursMinutes | DurationFormat::HoursMinutesSeconds => 0,
            DurationFormat::HoursMinutesSecondsDeci => 1,
            DurationFormat::HoursMinutesSecondsCenti => 2,
            DurationFormat::HoursMinutesSecondsMilli => 3,
        }
    }
}

impl FromStr for DurationFormat {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_format_str(s).ok_or_else(|| FilterError::InvalidDurationFormat(s.to_string()))
    }
}

impl Default for DurationFormat {
    fn default() -> Self {
        DurationFormat::HoursMinutesSeconds
    }
}
