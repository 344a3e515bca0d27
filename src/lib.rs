//! gantt-rows: randomized Gantt row synthesis.
//!
//! Produces labeled rows of time-bounded bars shaped for a Gantt chart widget
//! and a virtualized row list. Each row draws its bar count from normalized
//! bounds, colors bars from a per-row shuffled palette and clamps every bar to
//! a fixed daily cutoff.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{GenerateConfig, RowGenerator, RowStore, generate_rows};
pub use error::{GanttError, GanttResult};
