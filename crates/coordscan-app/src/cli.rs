use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use coordscan_config::{Config, DocumentProfile, RectConvention};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ProfileArg {
    Ui,
    Family,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ConventionArg {
    Inclusive,
    Exclusive,
}

/// Extract UI element coordinates from mask screenshots into per-resolution layout JSON
#[derive(Debug, Parser)]
#[command(name = "coordscan", version)]
pub struct Cli {
    /// JSON config file; missing fields fall back to COORDSCAN_* env vars
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Catalog of games, operating systems and resolutions
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Root of assets/<game>/<os>/<resolution>
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Output root
    #[arg(long)]
    pub target: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub profile: Option<ProfileArg>,

    /// Width/height convention for `_rect` and `_size` masks
    #[arg(long, value_enum)]
    pub convention: Option<ConventionArg>,

    /// Sample character colors and blacken the portraits in place. Irreversible.
    #[arg(long)]
    pub sample_colors: bool,

    /// With --sample-colors: report colors without rewriting any image
    #[arg(long, requires = "sample_colors")]
    pub dry_run: bool,
}

impl Cli {
    /// Flags take precedence over whatever the config already holds
    pub fn apply(&self, config: &mut Config) {
        if let Some(catalog) = &self.catalog {
            config.paths.catalog = catalog.clone();
        }
        if let Some(assets) = &self.assets {
            config.paths.assets = assets.clone();
        }
        if let Some(target) = &self.target {
            config.paths.target = target.clone();
        }
        if let Some(profile) = self.profile {
            config.output.profile = match profile {
                ProfileArg::Ui => DocumentProfile::Ui,
                ProfileArg::Family => DocumentProfile::Family,
            };
        }
        if let Some(convention) = self.convention {
            config.output.convention = match convention {
                ConventionArg::Inclusive => RectConvention::Inclusive,
                ConventionArg::Exclusive => RectConvention::Exclusive,
            };
        }
        if self.sample_colors {
            config.sampler.enabled = true;
        }
        if self.dry_run {
            config.sampler.dry_run = true;
        }
    }
}
