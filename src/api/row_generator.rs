use chrono::{NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace, warn};

use crate::core::labels::{bar_id, bar_label};
use crate::core::{
    ClockTime, GanttBar, GanttBarConfig, GanttRow, PALETTE_SIZE, RowLabeler, ShuffledPalette,
};
use crate::error::GanttResult;

use super::{DurationPolicy, GenerateConfig};

/// Randomized row/bar synthesizer.
///
/// The random source is injected so callers can seed it for reproducible
/// output; [`RowGenerator::from_os_rng`] gives the unseeded behavior.
#[derive(Debug, Clone)]
pub struct RowGenerator<R: Rng> {
    rng: R,
}

impl RowGenerator<StdRng> {
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RowGenerator<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates `config.row_count` fresh rows.
    ///
    /// Each row holds a bar count drawn uniformly from the normalized bounds.
    /// Bars start between 10:00 and 18:30 on half-hour slots, end no later
    /// than hour 19, take colors from a per-row shuffled palette and carry
    /// `row-{r}-bar-{b}` ids. Fails only when the config does not validate.
    pub fn generate(&mut self, config: &GenerateConfig) -> GanttResult<Vec<GanttRow>> {
        let config = config.validate()?;
        let day = config.day.unwrap_or_else(|| Utc::now().date_naive());
        let (min_bars, max_bars) = config.bar_bounds();
        let labeler = RowLabeler::draw(config.row_label_policy, &mut self.rng);

        let mut rows = Vec::with_capacity(config.row_count);
        for row_index in 0..config.row_count {
            let bar_count = self.rng.random_range(min_bars..=max_bars);
            let row = self.generate_row(
                row_index,
                bar_count,
                config.duration_policy,
                &labeler,
                day,
            )?;
            rows.push(row);
        }

        debug!(
            row_count = rows.len(),
            bar_count = rows.iter().map(|row| row.bars.len()).sum::<usize>(),
            min_bars,
            max_bars,
            %day,
            "generated gantt rows"
        );
        Ok(rows)
    }

    fn generate_row(
        &mut self,
        row_index: usize,
        bar_count: usize,
        duration_policy: DurationPolicy,
        labeler: &RowLabeler,
        day: NaiveDate,
    ) -> GanttResult<GanttRow> {
        let palette = ShuffledPalette::shuffled(&mut self.rng);
        if bar_count > PALETTE_SIZE {
            warn!(
                row_index,
                bar_count,
                palette_size = PALETTE_SIZE,
                "row exceeds palette size, bar colors will repeat"
            );
        }

        let mut long_bars = 0usize;
        let mut bars = Vec::with_capacity(bar_count);
        for bar_index in 0..bar_count {
            let start = ClockTime::random_start(&mut self.rng);
            let duration_hours = self.draw_duration_hours(duration_policy, &mut long_bars);
            let end = start.end_after(duration_hours);

            let config = GanttBarConfig::new(bar_id(row_index, bar_index))
                .with_label(bar_label(bar_index))
                .with_immobile(true)
                .with_background(palette.color_at(bar_index));
            bars.push(GanttBar::from_parts(start.on(day)?, end.on(day)?, config));
        }

        trace!(row_index, bar_count, long_bars, "generated gantt row");
        Ok(GanttRow::new(labeler.row_label(row_index), bars))
    }

    fn draw_duration_hours(&mut self, policy: DurationPolicy, long_bars: &mut usize) -> u32 {
        match policy {
            DurationPolicy::Fixed => 1,
            DurationPolicy::CappedLong {
                long_hours,
                chance_one_in,
                max_per_row,
            } => {
                // Past the cap no draw is taken.
                if *long_bars < max_per_row && self.rng.random_ratio(1, chance_one_in) {
                    *long_bars += 1;
                    long_hours
                } else {
                    1
                }
            }
        }
    }

    /// Hands back the random source, e.g. to continue a seeded sequence elsewhere.
    pub fn into_rng(self) -> R {
        self.rng
    }
}

/// Generates rows with an OS-seeded random source.
pub fn generate_rows(config: &GenerateConfig) -> GanttResult<Vec<GanttRow>> {
    RowGenerator::from_os_rng().generate(config)
}
