use std::env;

use serde::{Deserialize, Serialize};

fn default_game() -> String {
    env::var("COORDSCAN_SAMPLE_GAME").unwrap_or_else(|_| "starrail".to_string())
}

fn default_characters_dir() -> String {
    "characters".to_string()
}

/// Character color sampling. Rewrites portrait images in place, so it stays
/// off unless explicitly enabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    #[serde(default)]
    pub enabled: bool,
    /// Sample colors but leave the images untouched
    #[serde(default)]
    pub dry_run: bool,
    /// Only combinations of this game are sampled
    #[serde(default = "default_game")]
    pub game: String,
    /// Subdirectory of the resolution directory holding portraits
    #[serde(default = "default_characters_dir")]
    pub characters_dir: String,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            dry_run: false,
            game: default_game(),
            characters_dir: default_characters_dir(),
        }
    }
}

impl SamplerConfig {
    pub fn applies_to(&self, game: &str) -> bool {
        self.enabled && self.game == game
    }

    /// Element id whose `Pos` gives the sampled pixel
    pub fn reference_element(&self) -> String {
        format!("{}_relic_equipper_pos", self.game)
    }
}
