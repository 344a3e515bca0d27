use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::GanttRow;
use crate::error::{GanttError, GanttResult};

use super::{GenerateConfig, RowGenerator};

/// Aggregate counts over a stored row set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RowSetSummary {
    pub row_count: usize,
    pub bar_count: usize,
    pub max_bars_in_row: usize,
    /// Bars lasting two hours or more.
    pub long_bar_count: usize,
}

/// Owned holder of the current row set.
///
/// Consumers receive the store explicitly; each regeneration swaps the whole
/// set and bumps [`RowStore::generation`]. Rows are never edited in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowStore {
    rows: Vec<GanttRow>,
    generation: u64,
}

impl RowStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with one generation.
    pub fn generated<R: Rng>(
        generator: &mut RowGenerator<R>,
        config: &GenerateConfig,
    ) -> GanttResult<Self> {
        let mut store = Self::new();
        store.regenerate(generator, config)?;
        Ok(store)
    }

    /// Replaces the stored rows wholesale and returns the previous set.
    pub fn replace(&mut self, rows: Vec<GanttRow>) -> Vec<GanttRow> {
        let previous = std::mem::replace(&mut self.rows, rows);
        self.generation += 1;
        debug!(
            generation = self.generation,
            previous_rows = previous.len(),
            rows = self.rows.len(),
            "replaced gantt rows"
        );
        previous
    }

    /// Generates a fresh row set and swaps it in.
    ///
    /// On error the stored rows and generation stay untouched.
    pub fn regenerate<R: Rng>(
        &mut self,
        generator: &mut RowGenerator<R>,
        config: &GenerateConfig,
    ) -> GanttResult<&[GanttRow]> {
        let rows = generator.generate(config)?;
        self.replace(rows);
        Ok(&self.rows)
    }

    #[must_use]
    pub fn rows(&self) -> &[GanttRow] {
        &self.rows
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn row(&self, index: usize) -> Option<&GanttRow> {
        self.rows.get(index)
    }

    /// Rows `[first, first + count)` clamped to the stored set, for virtualized lists.
    pub fn window(&self, first: usize, count: usize) -> GanttResult<&[GanttRow]> {
        if first > self.rows.len() {
            return Err(GanttError::InvalidData(format!(
                "window start {first} is past the row count {}",
                self.rows.len()
            )));
        }
        let end = first.saturating_add(count).min(self.rows.len());
        Ok(&self.rows[first..end])
    }

    /// Takes the rows out, leaving an empty set.
    pub fn take(&mut self) -> Vec<GanttRow> {
        self.replace(Vec::new())
    }

    #[must_use]
    pub fn summary(&self) -> RowSetSummary {
        self.rows
            .iter()
            .fold(RowSetSummary::default(), |mut summary, row| {
                summary.row_count += 1;
                summary.bar_count += row.bars.len();
                summary.max_bars_in_row = summary.max_bars_in_row.max(row.bars.len());
                summary.long_bar_count += row.count_bars_lasting(2);
                summary
            })
    }
}
