use rand::Rng;
use serde::{Deserialize, Serialize};

/// Script titles used by [`RowLabelPolicy::ScriptEpisode`].
pub const SCRIPT_NAMES: [&str; 15] = [
    "Star River Voyage",
    "Deep Sea Trace",
    "Wind over Chang'an",
    "Night Pursuit",
    "Above the Clouds",
    "Flying Against the Light",
    "City of Dawn",
    "Wandering Earth",
    "Dream Encounter",
    "Beacon Fires",
    "Snowfield Skies",
    "Tide of the Blue Sea",
    "Flowers under the Moon",
    "Iron Heart",
    "Nine Realms Adrift",
];

pub const EPISODE_MIN: u32 = 1;
pub const EPISODE_MAX: u32 = 20;

/// How rows are labeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowLabelPolicy {
    /// `Row {n}`.
    Sequential,
    /// `{script} Ep.{episode} Shot {n}`, script and episode shared per call.
    #[default]
    ScriptEpisode,
}

/// Label inputs drawn once per generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLabeler {
    policy: RowLabelPolicy,
    script: &'static str,
    episode: u32,
}

impl RowLabeler {
    pub fn draw<R: Rng + ?Sized>(policy: RowLabelPolicy, rng: &mut R) -> Self {
        match policy {
            RowLabelPolicy::Sequential => Self {
                policy,
                script: "",
                episode: 0,
            },
            RowLabelPolicy::ScriptEpisode => Self {
                policy,
                script: SCRIPT_NAMES[rng.random_range(0..SCRIPT_NAMES.len())],
                episode: rng.random_range(EPISODE_MIN..=EPISODE_MAX),
            },
        }
    }

    #[must_use]
    pub fn row_label(&self, row_index: usize) -> String {
        let ordinal = row_index + 1;
        match self.policy {
            RowLabelPolicy::Sequential => format!("Row {ordinal}"),
            RowLabelPolicy::ScriptEpisode => {
                format!("{} Ep.{} Shot {ordinal}", self.script, self.episode)
            }
        }
    }

    #[must_use]
    pub fn script(&self) -> Option<&'static str> {
        match self.policy {
            RowLabelPolicy::Sequential => None,
            RowLabelPolicy::ScriptEpisode => Some(self.script),
        }
    }

    #[must_use]
    pub fn episode(&self) -> Option<u32> {
        match self.policy {
            RowLabelPolicy::Sequential => None,
            RowLabelPolicy::ScriptEpisode => Some(self.episode),
        }
    }
}

#[must_use]
pub fn bar_label(bar_index: usize) -> String {
    format!("Task {}", bar_index + 1)
}

#[must_use]
pub fn bar_id(row_index: usize, bar_index: usize) -> String {
    format!("row-{row_index}-bar-{bar_index}")
}
