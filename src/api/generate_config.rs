use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::RowLabelPolicy;
use crate::error::{GanttError, GanttResult};

pub const DEFAULT_ROW_COUNT: usize = 100;
pub const DEFAULT_MIN_BARS: usize = 1;
pub const DEFAULT_MAX_BARS: usize = 20;

/// How long each generated bar lasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationPolicy {
    /// Every bar lasts one hour.
    Fixed,
    /// A bar lasts `long_hours` with probability `1 / chance_one_in` while the
    /// row holds fewer than `max_per_row` long bars; otherwise one hour.
    CappedLong {
        long_hours: u32,
        chance_one_in: u32,
        max_per_row: usize,
    },
}

impl Default for DurationPolicy {
    fn default() -> Self {
        Self::CappedLong {
            long_hours: 2,
            chance_one_in: 4,
            max_per_row: 2,
        }
    }
}

/// Generation request.
///
/// Serializable so hosts can keep generator setup next to their widget config.
/// `min_bars` and `max_bars` may arrive in either order; see [`Self::bar_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateConfig {
    #[serde(alias = "rowCount")]
    pub row_count: usize,
    #[serde(alias = "minBars")]
    pub min_bars: usize,
    #[serde(alias = "maxBars")]
    pub max_bars: usize,
    #[serde(default)]
    pub duration_policy: DurationPolicy,
    #[serde(default)]
    pub row_label_policy: RowLabelPolicy,
    /// Calendar day of every bar; today's UTC date when absent.
    #[serde(default)]
    pub day: Option<NaiveDate>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROW_COUNT, DEFAULT_MIN_BARS, DEFAULT_MAX_BARS)
    }
}

impl GenerateConfig {
    /// Creates a config with capped long tasks and script/episode row labels.
    #[must_use]
    pub fn new(row_count: usize, min_bars: usize, max_bars: usize) -> Self {
        Self {
            row_count,
            min_bars,
            max_bars,
            duration_policy: DurationPolicy::default(),
            row_label_policy: RowLabelPolicy::default(),
            day: None,
        }
    }

    /// Creates a config with one-hour bars and sequential row labels.
    #[must_use]
    pub fn basic(row_count: usize, min_bars: usize, max_bars: usize) -> Self {
        Self::new(row_count, min_bars, max_bars)
            .with_duration_policy(DurationPolicy::Fixed)
            .with_row_label_policy(RowLabelPolicy::Sequential)
    }

    /// Builds a config from signed counts, rejecting negatives.
    pub fn try_from_signed(row_count: i64, min_bars: i64, max_bars: i64) -> GanttResult<Self> {
        Ok(Self::new(
            non_negative("row_count", row_count)?,
            non_negative("min_bars", min_bars)?,
            non_negative("max_bars", max_bars)?,
        ))
    }

    pub fn from_json_str(input: &str) -> GanttResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            GanttError::InvalidConfig(format!("failed to parse generate config json: {e}"))
        })?;
        config.validate()
    }

    pub fn to_json_pretty(&self) -> GanttResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            GanttError::InvalidConfig(format!("failed to serialize generate config: {e}"))
        })
    }

    #[must_use]
    pub fn with_duration_policy(mut self, policy: DurationPolicy) -> Self {
        self.duration_policy = policy;
        self
    }

    #[must_use]
    pub fn with_row_label_policy(mut self, policy: RowLabelPolicy) -> Self {
        self.row_label_policy = policy;
        self
    }

    #[must_use]
    pub fn with_day(mut self, day: NaiveDate) -> Self {
        self.day = Some(day);
        self
    }

    /// Bar-count bounds ordered so that `min <= max`.
    #[must_use]
    pub fn bar_bounds(&self) -> (usize, usize) {
        if self.min_bars <= self.max_bars {
            (self.min_bars, self.max_bars)
        } else {
            (self.max_bars, self.min_bars)
        }
    }

    pub fn validate(self) -> GanttResult<Self> {
        match self.duration_policy {
            DurationPolicy::Fixed => {}
            DurationPolicy::CappedLong {
                long_hours,
                chance_one_in,
                ..
            } => {
                if long_hours == 0 {
                    return Err(GanttError::InvalidConfig(
                        "long bar duration must be >= 1 hour".to_owned(),
                    ));
                }
                if chance_one_in == 0 {
                    return Err(GanttError::InvalidConfig(
                        "long bar chance_one_in must be >= 1".to_owned(),
                    ));
                }
            }
        }
        Ok(self)
    }
}

fn non_negative(field_name: &str, value: i64) -> GanttResult<usize> {
    usize::try_from(value).map_err(|_| {
        GanttError::InvalidConfig(format!("{field_name} must be >= 0, got {value}"))
    })
}
