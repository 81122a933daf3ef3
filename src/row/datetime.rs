//! Splitting a combined ISO-8601 date-time string into display date and time.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};

/// Separator between the date and time components.
const DATE_TIME_SEPARATOR: char = 'T';

/// Naive layouts accepted when the input carries no zone marker or offset.
const NAIVE_LAYOUTS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// How the date component is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DateStyle {
    /// `2020-05-01`
    #[default]
    Iso,
    /// `May 01, 2020`
    Short,
}

impl DateStyle {
    /// Parse a settings value (`iso`, `short`).
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "iso" | "numeric" => Some(Self::Iso),
            "short" | "month" => Some(Self::Short),
            _ => None,
        }
    }

    /// `chrono` format string for this style.
    const fn pattern(self) -> &'static str {
        match self {
            Self::Iso => "%Y-%m-%d",
            Self::Short => "%b %d, %Y",
        }
    }
}

/// How the time component is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClockStyle {
    /// `14:30:00`
    #[default]
    TwentyFourHour,
    /// `2:30 PM`
    TwelveHour,
}

impl ClockStyle {
    /// Parse a settings value (`24h`, `12h`).
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "24h" | "24" => Some(Self::TwentyFourHour),
            "12h" | "12" | "am/pm" => Some(Self::TwelveHour),
            _ => None,
        }
    }

    /// `chrono` format string for this style.
    const fn pattern(self) -> &'static str {
        match self {
            Self::TwentyFourHour => "%H:%M:%S",
            Self::TwelveHour => "%-I:%M %p",
        }
    }
}

/// Date and clock styles applied to every row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisplayFormat {
    /// Date rendering.
    pub date: DateStyle,
    /// Time rendering.
    pub clock: ClockStyle,
}

/// Display strings produced from one combined date-time value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateTimeParts {
    /// Formatted date component.
    pub date: String,
    /// Formatted time component.
    pub time: String,
}

/// Reasons a date-time string cannot be split.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DateTimeError {
    /// The input has no date/time separator.
    MissingSeparator,
    /// The input has a separator but is not a valid ISO-8601 timestamp.
    Invalid {
        /// Offending input.
        input: String,
        /// Parser failure for the most specific layout tried.
        source: chrono::ParseError,
    },
}

impl fmt::Display for DateTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator => {
                write!(f, "date-time has no '{DATE_TIME_SEPARATOR}' separator")
            }
            Self::Invalid { input, source } => {
                write!(f, "invalid ISO-8601 date-time {input:?}: {source}")
            }
        }
    }
}

impl std::error::Error for DateTimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingSeparator => None,
            Self::Invalid { source, .. } => Some(source),
        }
    }
}

/// What: Parse a combined date-time string into a UTC timestamp.
///
/// Inputs:
/// - `raw`: Value such as `2020-05-01T14:30:00Z`, `2020-05-01T16:30:00+02:00`, or
///   `2020-05-01T14:30:00`.
///
/// Output:
/// - Naive UTC timestamp on success.
///
/// # Errors
/// - `DateTimeError::MissingSeparator` when `raw` contains no `T`.
/// - `DateTimeError::Invalid` when no accepted layout matches.
///
/// Details:
/// - RFC 3339 first (covers the trailing `Z` zone marker and numeric offsets, which are
///   normalized to UTC), then naive layouts with and without seconds, read as UTC.
pub fn parse_date_time(raw: &str) -> Result<NaiveDateTime, DateTimeError> {
    let trimmed = raw.trim();
    if !trimmed.contains(DATE_TIME_SEPARATOR) {
        return Err(DateTimeError::MissingSeparator);
    }
    let rfc_err = match DateTime::parse_from_rfc3339(trimmed) {
        Ok(dt) => return Ok(dt.with_timezone(&Utc).naive_utc()),
        Err(e) => e,
    };
    for layout in NAIVE_LAYOUTS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, layout) {
            return Ok(dt);
        }
    }
    Err(DateTimeError::Invalid {
        input: trimmed.to_string(),
        source: rfc_err,
    })
}

/// What: Split a combined date-time string into formatted date and time strings.
///
/// Inputs:
/// - `raw`: Combined date-time value from a news record.
/// - `format`: Date and clock styles to apply.
///
/// Output:
/// - `DateTimeParts` with both components formatted.
///
/// # Errors
/// - Propagates [`parse_date_time`] failures.
///
/// Details:
/// - With the default format, `2020-05-01T14:30:00Z` yields `2020-05-01` and `14:30:00`.
pub fn split_date_time(raw: &str, format: DisplayFormat) -> Result<DateTimeParts, DateTimeError> {
    let dt = parse_date_time(raw)?;
    Ok(DateTimeParts {
        date: dt.format(format.date.pattern()).to_string(),
        time: dt.format(format.clock.pattern()).to_string(),
    })
}
