pub mod clock;
pub mod labels;
pub mod palette;
pub mod types;

pub use clock::{ClockTime, DAILY_CUTOFF_HOUR, TIMESTAMP_FORMAT};
pub use labels::{RowLabelPolicy, RowLabeler, SCRIPT_NAMES};
pub use palette::{BAR_COLORS, PALETTE_SIZE, ShuffledPalette};
pub use types::{BACKGROUND_STYLE_KEY, GanttBar, GanttBarConfig, GanttRow};
