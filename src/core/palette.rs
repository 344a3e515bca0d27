use rand::Rng;
use rand::seq::SliceRandom;

/// Number of predefined bar colors.
pub const PALETTE_SIZE: usize = 40;

/// Predefined bar background colors, grouped by hue family.
#[rustfmt::skip]
pub const BAR_COLORS: [&str; PALETTE_SIZE] = [
    // greens
    "#42b883", "#27ae60", "#2ecc71", "#1abc9c", "#16a085",
    // blues
    "#3498db", "#2980b9", "#5dade2", "#1e90ff", "#6495ed",
    // reds
    "#e74c3c", "#c0392b", "#ff6b6b", "#ee5a52", "#cd5c5c",
    // purples
    "#9b59b6", "#8e44ad", "#a569bd", "#bb8fce", "#7d3c98",
    // oranges and yellows
    "#f39c12", "#e67e22", "#d35400", "#f1c40f", "#f4d03f",
    // cyans
    "#00bcd4", "#00acc1", "#26c6da", "#4dd0e1", "#80deea",
    // pinks
    "#e91e63", "#ec407a", "#f48fb1", "#ff80ab", "#ff4081",
    // blue greys
    "#607d8b", "#78909c", "#546e7a", "#455a64", "#90a4ae",
];

/// Per-row permutation of [`BAR_COLORS`].
///
/// Indices below [`PALETTE_SIZE`] never repeat a color; larger indices cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShuffledPalette {
    colors: [&'static str; PALETTE_SIZE],
}

impl ShuffledPalette {
    /// Uniform random permutation of the palette (Fisher-Yates).
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut colors = BAR_COLORS;
        colors.shuffle(rng);
        Self { colors }
    }

    #[must_use]
    pub fn color_at(&self, index: usize) -> &'static str {
        self.colors[index % PALETTE_SIZE]
    }

    #[must_use]
    pub fn colors(&self) -> &[&'static str] {
        &self.colors
    }
}
