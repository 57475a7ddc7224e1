use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use coordscan_types::Combination;
use serde::{Deserialize, Serialize};

use crate::error::ScanResult;

/// Games, operating systems and resolutions to generate documents for
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub game: Vec<String>,
    pub os: Vec<String>,
    pub resolutions: Vec<String>,
}

impl Catalog {
    pub fn load(path: &Path) -> ScanResult<Self> {
        tracing::info!("Loading catalog from {}", path.display());
        let reader = BufReader::new(File::open(path)?);
        let catalog: Catalog = serde_json::from_reader(reader)?;
        tracing::info!(
            "Catalog: {} games, {} os, {} resolutions",
            catalog.game.len(),
            catalog.os.len(),
            catalog.resolutions.len()
        );
        Ok(catalog)
    }

    /// Cross product, game outermost and resolution innermost
    pub fn combinations(&self) -> Vec<Combination> {
        let mut combos =
            Vec::with_capacity(self.game.len() * self.os.len() * self.resolutions.len());
        for game in &self.game {
            for os in &self.os {
                for resolution in &self.resolutions {
                    combos.push(Combination::new(game, os, resolution));
                }
            }
        }
        combos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combinations_follow_catalog_order() {
        let catalog = Catalog {
            game: vec!["a".into(), "b".into()],
            os: vec!["windows".into(), "macos".into()],
            resolutions: vec!["800x600".into(), "1920x1080".into()],
        };
        let combos = catalog.combinations();
        assert_eq!(combos.len(), 8);
        assert_eq!(combos[0], Combination::new("a", "windows", "800x600"));
        assert_eq!(combos[1], Combination::new("a", "windows", "1920x1080"));
        assert_eq!(combos[2], Combination::new("a", "macos", "800x600"));
        assert_eq!(combos[7], Combination::new("b", "macos", "1920x1080"));
    }

    #[test]
    fn empty_list_yields_nothing() {
        let catalog = Catalog {
            game: vec!["a".into()],
            os: vec![],
            resolutions: vec!["800x600".into()],
        };
        assert!(catalog.combinations().is_empty());
    }

    #[test]
    fn load_parses_catalog_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rog.json");
        std::fs::write(
            &path,
            r#"{"game": ["g1"], "os": ["windows"], "resolutions": ["800x600"]}"#,
        )
        .unwrap();
        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.combinations(), vec![Combination::new("g1", "windows", "800x600")]);
    }
}
