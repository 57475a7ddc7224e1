use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_catalog() -> PathBuf {
    env::var("COORDSCAN_CATALOG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("rog.json"))
}

fn default_assets() -> PathBuf {
    env::var("COORDSCAN_ASSETS")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("assets"))
}

fn default_target() -> PathBuf {
    env::var("COORDSCAN_TARGET")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("target"))
}

/// Where the catalog, source masks and generated documents live
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Catalog JSON listing games, operating systems and resolutions
    #[serde(default = "default_catalog")]
    pub catalog: PathBuf,
    /// Root of `<game>/<os>/<resolution>/*.png`
    #[serde(default = "default_assets")]
    pub assets: PathBuf,
    /// Root of `<game>/<os>/<os><resolution>.json`
    #[serde(default = "default_target")]
    pub target: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            assets: default_assets(),
            target: default_target(),
        }
    }
}

impl PathsConfig {
    pub fn source_dir(&self, game: &str, os: &str, resolution: &str) -> PathBuf {
        self.assets.join(game).join(os).join(resolution)
    }

    pub fn output_path(&self, game: &str, os: &str, resolution: &str) -> PathBuf {
        self.target
            .join(game)
            .join(os)
            .join(format!("{os}{resolution}.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_concatenates_os_and_resolution() {
        let paths = PathsConfig {
            catalog: PathBuf::from("rog.json"),
            assets: PathBuf::from("assets"),
            target: PathBuf::from("out"),
        };
        assert_eq!(
            paths.output_path("g1", "windows", "800x600"),
            PathBuf::from("out/g1/windows/windows800x600.json")
        );
        assert_eq!(
            paths.source_dir("g1", "windows", "800x600"),
            PathBuf::from("assets/g1/windows/800x600")
        );
    }
}
