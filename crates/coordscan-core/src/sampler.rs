use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use coordscan_types::{Rgb, ShapedValue};
use image::{Rgb as RgbPixel, RgbImage};
use serde_json::Value;

use crate::document::OutputDocument;
use crate::error::{ScanError, ScanResult};
use crate::shape::ImageName;

/// Pixel to sample, read from the `Pos` entry named `element`.
/// Accepts both the tagged form and a bare `{x, y}` override.
pub fn reference_position(document: &OutputDocument, element: &str) -> ScanResult<(u32, u32)> {
    let missing = || ScanError::MissingReferenceElement(element.to_string());
    let value = document.data.get(element).ok_or_else(missing)?;

    if let Ok(ShapedValue::Pos { x, y }) = serde_json::from_value::<ShapedValue>(value.clone()) {
        return Ok((x, y));
    }

    let coord = |key: &str| {
        value
            .get(key)
            .and_then(Value::as_u64)
            .and_then(|v| u32::try_from(v).ok())
    };
    match (coord("x"), coord("y")) {
        (Some(x), Some(y)) => Ok((x, y)),
        _ => Err(missing()),
    }
}

struct Sample {
    path: PathBuf,
    identifier: String,
    width: u32,
    height: u32,
    color: Rgb,
}

fn sample_image(path: &Path, identifier: String, (x, y): (u32, u32)) -> ScanResult<Sample> {
    let img = image::open(path)?.to_rgb8();
    if x >= img.width() || y >= img.height() {
        return Err(ScanError::ReferenceOutOfBounds {
            path: path.to_path_buf(),
            x,
            y,
        });
    }
    let [r, g, b] = img.get_pixel(x, y).0;

    Ok(Sample {
        path: path.to_path_buf(),
        identifier,
        width: img.width(),
        height: img.height(),
        color: Rgb { r, g, b },
    })
}

/// Record each portrait's color at the reference position, then blacken
/// every other pixel and save the portrait over itself.
///
/// All portraits are sampled before any is rewritten, so a failure leaves
/// the directory untouched. With `dry_run` nothing is written.
pub fn sample_characters(
    characters_dir: &Path,
    position: (u32, u32),
    dry_run: bool,
) -> ScanResult<BTreeMap<String, Rgb>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(characters_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str().and_then(ImageName::parse) {
            files.push((entry.path(), name.identifier));
        }
    }
    files.sort();

    let samples = files
        .into_iter()
        .map(|(path, identifier)| sample_image(&path, identifier, position))
        .collect::<ScanResult<Vec<_>>>()?;

    let (x, y) = position;
    let mut colors = BTreeMap::new();
    for sample in samples {
        if dry_run {
            tracing::info!("[dry-run] would blacken {}", sample.path.display());
        } else {
            let mut blank = RgbImage::new(sample.width, sample.height);
            let Rgb { r, g, b } = sample.color;
            blank.put_pixel(x, y, RgbPixel([r, g, b]));
            blank.save(&sample.path)?;
            tracing::debug!("Blackened {}", sample.path.display());
        }
        colors.insert(sample.identifier, sample.color);
    }

    Ok(colors)
}
