use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Which optional metadata field the output document carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentProfile {
    /// `ui: "Desktop" | "Mobile"`, no `resolution_family`
    #[default]
    Ui,
    /// `resolution_family: "16x9"`, no `ui`
    Family,
}

impl FromStr for DocumentProfile {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ui" => Ok(Self::Ui),
            "family" => Ok(Self::Family),
            other => Err(ConfigError::InvalidValue {
                field: "profile",
                value: other.to_string(),
            }),
        }
    }
}

/// How width/height are derived from inclusive pixel bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RectConvention {
    /// `right - left + 1`: a single marked pixel is 1x1
    #[default]
    Inclusive,
    /// `right - left`: a single marked pixel is 0x0
    Exclusive,
}

impl RectConvention {
    pub fn span(self, start: u32, end: u32) -> u32 {
        match self {
            Self::Inclusive => end - start + 1,
            Self::Exclusive => end - start,
        }
    }
}

impl FromStr for RectConvention {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "inclusive" => Ok(Self::Inclusive),
            "exclusive" => Ok(Self::Exclusive),
            other => Err(ConfigError::InvalidValue {
                field: "convention",
                value: other.to_string(),
            }),
        }
    }
}

fn env_or_default<T: FromStr + Default>(key: &str) -> T {
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring unrecognised {key}={raw}");
            T::default()
        }),
        Err(_) => T::default(),
    }
}

fn default_profile() -> DocumentProfile {
    env_or_default("COORDSCAN_PROFILE")
}

fn default_convention() -> RectConvention {
    env_or_default("COORDSCAN_CONVENTION")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    #[serde(default = "default_profile")]
    pub profile: DocumentProfile,
    #[serde(default = "default_convention")]
    pub convention: RectConvention,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            profile: default_profile(),
            convention: default_convention(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_pixel_span_per_convention() {
        assert_eq!(RectConvention::Inclusive.span(7, 7), 1);
        assert_eq!(RectConvention::Exclusive.span(7, 7), 0);
        assert_eq!(RectConvention::Inclusive.span(10, 19), 10);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Family".parse::<DocumentProfile>().unwrap(), DocumentProfile::Family);
        assert_eq!(
            "EXCLUSIVE".parse::<RectConvention>().unwrap(),
            RectConvention::Exclusive
        );
        assert!("wide".parse::<DocumentProfile>().is_err());
    }
}
