use chrono::{NaiveDateTime, TimeDelta};
use std::fmt;

use crate::record::MetadataRecord;

pub const DATE_TIME_ORIGINAL: &str = "DateTimeOriginal";

/// EXIF date/time layout, e.g. `2023:01:01 12:00:00`.
pub const EXIF_DATE_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// Result of comparing the capture time with the reference time.
#[derive(Debug, Clone, PartialEq)]
pub enum TimestampAnalysis {
    /// `reference_time - capture_time`.
    Difference(TimeDelta),
    /// The record has no `DateTimeOriginal`.
    Missing,
    /// `DateTimeOriginal` is present but could not be parsed.
    Invalid(String),
}

impl fmt::Display for TimestampAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Difference(delta) => write!(f, "Time Difference: {}", format_duration(*delta)),
            Self::Missing => write!(f, "{DATE_TIME_ORIGINAL} not found in metadata."),
            Self::Invalid(reason) => write!(f, "Error: {reason}"),
        }
    }
}

/// Compare the record's `DateTimeOriginal` against `reference_time`.
pub fn analyze_timestamp(record: &MetadataRecord, reference_time: NaiveDateTime) -> TimestampAnalysis {
    let Some(value) = record.get(DATE_TIME_ORIGINAL) else {
        return TimestampAnalysis::Missing;
    };
    let Some(text) = value.as_text() else {
        return TimestampAnalysis::Invalid(format!(
            "{DATE_TIME_ORIGINAL} must be text, not {}",
            value.kind()
        ));
    };
    match NaiveDateTime::parse_from_str(text, EXIF_DATE_FORMAT) {
        Ok(captured) => TimestampAnalysis::Difference(reference_time - captured),
        Err(e) => {
            log::debug!("Unparseable {DATE_TIME_ORIGINAL} {text:?}: {e}");
            TimestampAnalysis::Invalid(format!(
                "time data '{text}' does not match format '{EXIF_DATE_FORMAT}'"
            ))
        }
    }
}

/// Render a duration as `[-]N day(s), H:MM:SS[.ffffff]`.
///
/// The day count is floored so the time-of-day part is never negative:
/// minus one second is `-1 day, 23:59:59`.
pub fn format_duration(delta: TimeDelta) -> String {
    let mut secs = delta.num_seconds();
    let mut micros = (delta - TimeDelta::seconds(secs))
        .num_microseconds()
        .unwrap_or(0);
    if micros < 0 {
        secs -= 1;
        micros += 1_000_000;
    }

    let days = secs.div_euclid(86_400);
    let rem = secs.rem_euclid(86_400);
    let (hours, minutes, seconds) = (rem / 3600, rem % 3600 / 60, rem % 60);

    let mut out = String::new();
    if days != 0 {
        let unit = if days.abs() == 1 { "day" } else { "days" };
        out.push_str(&format!("{days} {unit}, "));
    }
    out.push_str(&format!("{hours}:{minutes:02}:{seconds:02}"));
    if micros != 0 {
        out.push_str(&format!(".{micros:06}"));
    }
    out
}
