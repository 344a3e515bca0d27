use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rand::Rng;

use crate::error::{GanttError, GanttResult};

/// Earliest hour a bar may start at.
pub const START_HOUR_MIN: u32 = 10;
/// Latest hour a bar may start at.
pub const START_HOUR_MAX: u32 = 18;
/// Bars never end after this hour of the day.
pub const DAILY_CUTOFF_HOUR: u32 = 19;
/// Wire format of bar timestamps, e.g. `2026-10-16 14:30`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Hour/minute slot within a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
}

impl ClockTime {
    pub fn new(hour: u32, minute: u32) -> GanttResult<Self> {
        if hour > 23 || minute > 59 {
            return Err(GanttError::InvalidData(format!(
                "clock time out of range: {hour:02}:{minute:02}"
            )));
        }
        Ok(Self { hour, minute })
    }

    /// Draws a start slot: hour uniform in `[10, 18]`, minute `00` or `30`.
    pub fn random_start<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let hour = rng.random_range(START_HOUR_MIN..=START_HOUR_MAX);
        let minute = if rng.random_bool(0.5) { 0 } else { 30 };
        Self { hour, minute }
    }

    /// Slot `duration_hours` later with the same minute, clamped to the daily cutoff.
    #[must_use]
    pub fn end_after(self, duration_hours: u32) -> Self {
        Self {
            hour: self
                .hour
                .saturating_add(duration_hours)
                .min(DAILY_CUTOFF_HOUR),
            minute: self.minute,
        }
    }

    #[must_use]
    pub fn hour(self) -> u32 {
        self.hour
    }

    #[must_use]
    pub fn minute(self) -> u32 {
        self.minute
    }

    pub fn on(self, day: NaiveDate) -> GanttResult<NaiveDateTime> {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0)
            .map(|time| day.and_time(time))
            .ok_or_else(|| {
                GanttError::InvalidData(format!(
                    "clock time cannot be placed on {day}: {:02}:{:02}",
                    self.hour, self.minute
                ))
            })
    }
}

/// Serde adapter for `YYYY-MM-DD HH:MM` timestamps.
pub mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
