use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::output::OutputConfig;
use self::paths::PathsConfig;
use self::sampler::SamplerConfig;

pub mod output;
pub mod paths;
pub mod sampler;

pub use output::{DocumentProfile, RectConvention};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Run configuration. Missing fields fall back to `COORDSCAN_*` env vars,
/// then to built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub output: OutputConfig,
    pub sampler: SamplerConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            paths: PathsConfig::default(),
            output: OutputConfig::default(),
            sampler: SamplerConfig::default(),
        }
    }

    /// Load a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        tracing::info!("Loading config from {}", path.display());
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coordscan.json");
        let mut file = File::create(&path).unwrap();
        write!(
            file,
            r#"{{"output": {{"profile": "family"}}, "sampler": {{"game": "g1"}}}}"#
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.output.profile, DocumentProfile::Family);
        assert_eq!(config.sampler.game, "g1");
        assert!(!config.sampler.enabled);
        assert_eq!(config.sampler.characters_dir, "characters");
        assert_eq!(config.sampler.reference_element(), "g1_relic_equipper_pos");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
