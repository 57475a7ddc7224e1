use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use coordscan_config::DocumentProfile;
use coordscan_config::output::OutputConfig;
use coordscan_types::{Combination, Resolution};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ScanError, ScanResult};
use crate::extract::extract_rectangle;
use crate::platform::{platform_label, ui_label};
use crate::resolution::{parse_resolution, resolution_family};
use crate::shape::{IMAGE_EXTENSION, ImageName, shape_value};

/// Per-resolution layout document consumed by the game client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputDocument {
    pub current_resolution: Resolution,
    pub platform: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution_family: Option<String>,
    /// Sorted by element id
    pub data: BTreeMap<String, Value>,
}

/// An image that contributed nothing to its document
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedImage {
    pub file: String,
    pub reason: String,
}

#[derive(Debug)]
pub struct Assembly {
    pub document: OutputDocument,
    pub skipped: Vec<SkippedImage>,
}

pub fn override_file_name(game: &str) -> String {
    format!("{game}_repository_layout.json")
}

/// Shape every `.png` directly inside `dir`. Images that cannot be shaped
/// are returned as skipped instead of failing the directory.
pub fn collect_images(
    dir: &Path,
    config: &OutputConfig,
) -> ScanResult<(BTreeMap<String, Value>, Vec<SkippedImage>)> {
    let mut names = Vec::new();
    let mut skipped = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let file_name = entry.file_name();
        match file_name.to_str() {
            Some(name) => names.push(name.to_string()),
            None => {
                let lossy = file_name.to_string_lossy().into_owned();
                if lossy.ends_with(IMAGE_EXTENSION) {
                    tracing::warn!(
                        "Skipping {}: file name is not valid UTF-8",
                        entry.path().display()
                    );
                    skipped.push(SkippedImage {
                        file: lossy,
                        reason: "file name is not valid UTF-8".to_string(),
                    });
                }
            }
        }
    }
    names.sort();
    skipped.sort_by(|a, b| a.file.cmp(&b.file));

    let mut values = BTreeMap::new();

    for file in names {
        let Some(name) = ImageName::parse(&file) else {
            continue;
        };

        let shaped = extract_rectangle(&dir.join(&file))
            .and_then(|rect| shape_value(&name.suffix, rect, config.convention));

        match shaped {
            Ok(value) => {
                tracing::debug!("{file}: {value:?}");
                values.insert(name.identifier, serde_json::to_value(value)?);
            }
            Err(e) => {
                tracing::warn!("Skipping {}: {e}", dir.join(&file).display());
                skipped.push(SkippedImage {
                    file,
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok((values, skipped))
}

/// Read the hand-authored layout file, if there is one
pub fn load_overrides(path: &Path) -> ScanResult<Option<serde_json::Map<String, Value>>> {
    if !path.exists() {
        return Ok(None);
    }

    tracing::info!("Applying overrides from {}", path.display());
    let data = fs::read_to_string(path)?;
    match serde_json::from_str(&data)? {
        Value::Object(map) => Ok(Some(map)),
        _ => Err(ScanError::InvalidOverride(path.to_path_buf())),
    }
}

/// Build the document for one combination from its source directory
pub fn assemble(
    combo: &Combination,
    source_dir: &Path,
    config: &OutputConfig,
) -> ScanResult<Assembly> {
    let resolution = parse_resolution(&combo.resolution)?;

    let (mut data, skipped) = collect_images(source_dir, config)?;
    if let Some(overrides) = load_overrides(&source_dir.join(override_file_name(&combo.game)))? {
        data.extend(overrides);
    }

    let (ui, family) = match config.profile {
        DocumentProfile::Ui => (Some(ui_label(&combo.os).to_string()), None),
        DocumentProfile::Family => (None, Some(resolution_family(resolution))),
    };

    Ok(Assembly {
        document: OutputDocument {
            current_resolution: resolution,
            platform: platform_label(&combo.os),
            ui,
            resolution_family: family,
            data,
        },
        skipped,
    })
}

/// Write compact JSON, replacing whatever is at `path`
pub fn write_document(document: &OutputDocument, path: &Path) -> ScanResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_vec(document)?)?;
    Ok(())
}
