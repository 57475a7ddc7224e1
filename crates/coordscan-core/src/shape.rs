use coordscan_config::RectConvention;
use coordscan_types::{Rectangle, ShapedValue};

use crate::error::{ScanError, ScanResult};

pub const IMAGE_EXTENSION: &str = ".png";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suffix {
    Rect,
    Pos,
    Size,
}

impl Suffix {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "_rect" => Some(Self::Rect),
            "_pos" => Some(Self::Pos),
            "_size" => Some(Self::Size),
            _ => None,
        }
    }
}

/// Element id and typed suffix encoded in a mask's file name,
/// e.g. `menu_button_rect.png` → (`menu_button_rect`, `_rect`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageName {
    pub identifier: String,
    pub suffix: String,
}

impl ImageName {
    /// `None` when the file is not a `.png`
    pub fn parse(file_name: &str) -> Option<Self> {
        let stem = file_name.strip_suffix(IMAGE_EXTENSION)?;
        let suffix = stem.rfind('_').map(|i| &stem[i..]).unwrap_or_default();
        Some(Self {
            identifier: stem.to_string(),
            suffix: suffix.to_string(),
        })
    }
}

/// Turn mask bounds into the record selected by `suffix`
pub fn shape_value(
    suffix: &str,
    rect: Rectangle,
    convention: RectConvention,
) -> ScanResult<ShapedValue> {
    let Some(kind) = Suffix::parse(suffix) else {
        return Err(ScanError::UnsupportedSuffix(suffix.to_string()));
    };

    let width = convention.span(rect.left, rect.right);
    let height = convention.span(rect.top, rect.bottom);

    Ok(match kind {
        Suffix::Rect => ShapedValue::Rect {
            top: rect.top,
            left: rect.left,
            width,
            height,
        },
        Suffix::Pos => ShapedValue::Pos {
            x: rect.left,
            y: rect.top,
        },
        Suffix::Size => ShapedValue::Size { width, height },
    })
}
