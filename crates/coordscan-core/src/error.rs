use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("No foreground pixel in {}", .0.display())]
    EmptyMask(PathBuf),

    #[error("Unsupported suffix '{0}'")]
    UnsupportedSuffix(String),

    #[error("Malformed resolution: {0}")]
    MalformedResolution(String),

    #[error("Missing reference element: {0}")]
    MissingReferenceElement(String),

    #[error("Reference position ({x}, {y}) outside {}", path.display())]
    ReferenceOutOfBounds { path: PathBuf, x: u32, y: u32 },

    #[error("Override file {} is not a JSON object", .0.display())]
    InvalidOverride(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ScanResult<T> = Result<T, ScanError>;
