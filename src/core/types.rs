use chrono::{NaiveDateTime, Timelike};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::clock::{DAILY_CUTOFF_HOUR, timestamp_format};
use crate::error::{GanttError, GanttResult};

/// Style key carrying the bar background color.
pub const BACKGROUND_STYLE_KEY: &str = "background";

/// Per-bar settings consumed by the chart widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttBarConfig {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub immobile: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<IndexMap<String, String>>,
}

impl GanttBarConfig {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            immobile: None,
            style: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_immobile(mut self, immobile: bool) -> Self {
        self.immobile = Some(immobile);
        self
    }

    #[must_use]
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.style
            .get_or_insert_with(IndexMap::new)
            .insert(BACKGROUND_STYLE_KEY.to_owned(), color.into());
        self
    }
}

/// A single time-bounded task on a chart row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GanttBar {
    #[serde(with = "timestamp_format")]
    pub begin_date: NaiveDateTime,
    #[serde(with = "timestamp_format")]
    pub end_date: NaiveDateTime,
    pub gantt_bar_config: GanttBarConfig,
}

impl GanttBar {
    /// Builds a validated bar.
    ///
    /// Invariants:
    /// - `end_date > begin_date`
    /// - the end never passes the daily cutoff hour
    pub fn new(
        begin_date: NaiveDateTime,
        end_date: NaiveDateTime,
        config: GanttBarConfig,
    ) -> GanttResult<Self> {
        let bar = Self {
            begin_date,
            end_date,
            gantt_bar_config: config,
        };
        bar.validate()?;
        Ok(bar)
    }

    pub(crate) fn from_parts(
        begin_date: NaiveDateTime,
        end_date: NaiveDateTime,
        gantt_bar_config: GanttBarConfig,
    ) -> Self {
        Self {
            begin_date,
            end_date,
            gantt_bar_config,
        }
    }

    pub fn validate(&self) -> GanttResult<()> {
        if self.end_date <= self.begin_date {
            return Err(GanttError::InvalidData(format!(
                "bar `{}` must end after it begins",
                self.id()
            )));
        }
        if self.end_date.date() != self.begin_date.date() {
            return Err(GanttError::InvalidData(format!(
                "bar `{}` must begin and end on the same day",
                self.id()
            )));
        }
        if self.end_hour() > DAILY_CUTOFF_HOUR {
            return Err(GanttError::InvalidData(format!(
                "bar `{}` ends after the {DAILY_CUTOFF_HOUR}:00 cutoff hour",
                self.id()
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.gantt_bar_config.id
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.gantt_bar_config.label.as_deref()
    }

    /// Background color from the style mapping.
    #[must_use]
    pub fn color(&self) -> Option<&str> {
        self.gantt_bar_config
            .style
            .as_ref()
            .and_then(|style| style.get(BACKGROUND_STYLE_KEY))
            .map(String::as_str)
    }

    #[must_use]
    pub fn begin_hour(&self) -> u32 {
        self.begin_date.hour()
    }

    #[must_use]
    pub fn end_hour(&self) -> u32 {
        self.end_date.hour()
    }

    #[must_use]
    pub fn duration_minutes(&self) -> i64 {
        (self.end_date - self.begin_date).num_minutes()
    }
}

/// One labeled lane of bars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttRow {
    pub label: String,
    pub bars: Vec<GanttBar>,
}

impl GanttRow {
    #[must_use]
    pub fn new(label: impl Into<String>, bars: Vec<GanttBar>) -> Self {
        Self {
            label: label.into(),
            bars,
        }
    }

    /// Bars lasting at least `hours`.
    #[must_use]
    pub fn count_bars_lasting(&self, hours: u32) -> usize {
        let minutes = i64::from(hours) * 60;
        self.bars
            .iter()
            .filter(|bar| bar.duration_minutes() >= minutes)
            .count()
    }
}
