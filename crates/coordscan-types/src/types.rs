use std::fmt;

use serde::{Deserialize, Serialize};

/// Inclusive pixel bounds of a mask: `bottom`/`right` are the last marked row/column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    pub top: u32,
    pub left: u32,
    pub bottom: u32,
    pub right: u32,
}

/// Coordinate record emitted for one element id.
///
/// Externally tagged on the wire: `{"Pos": {"x": 20, "y": 10}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapedValue {
    Rect {
        top: u32,
        left: u32,
        width: u32,
        height: u32,
    },
    Pos {
        x: u32,
        y: u32,
    },
    Size {
        width: u32,
        height: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// One (game, os, resolution) triple from the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    pub game: String,
    pub os: String,
    pub resolution: String,
}

impl Combination {
    pub fn new(
        game: impl Into<String>,
        os: impl Into<String>,
        resolution: impl Into<String>,
    ) -> Self {
        Self {
            game: game.into(),
            os: os.into(),
            resolution: resolution.into(),
        }
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.game, self.os, self.resolution)
    }
}
