use coordscan_types::Resolution;

use crate::error::{ScanError, ScanResult};

/// Parse `"<width>x<height>"`
pub fn parse_resolution(raw: &str) -> ScanResult<Resolution> {
    let malformed = || ScanError::MalformedResolution(raw.to_string());

    let (width, height) = raw.split_once('x').ok_or_else(malformed)?;
    let width: u32 = width.parse().map_err(|_| malformed())?;
    let height: u32 = height.parse().map_err(|_| malformed())?;
    if width == 0 || height == 0 {
        return Err(malformed());
    }

    Ok(Resolution { width, height })
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Aspect ratio label, fully reduced: 2560x1440 → `16x9`
pub fn resolution_family(resolution: Resolution) -> String {
    let divisor = gcd(resolution.width, resolution.height);
    format!(
        "{}x{}",
        resolution.width / divisor,
        resolution.height / divisor
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_width_and_height() {
        assert_eq!(
            parse_resolution("800x600").unwrap(),
            Resolution {
                width: 800,
                height: 600
            }
        );
    }

    #[test]
    fn rejects_malformed_strings() {
        for raw in ["800", "800x", "x600", "800X600", "800x600x2", "wide", "0x600", "-800x600"] {
            assert!(
                matches!(parse_resolution(raw), Err(ScanError::MalformedResolution(_))),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn family_is_fully_reduced() {
        let family = |w, h| resolution_family(Resolution { width: w, height: h });
        assert_eq!(family(1920, 1080), "16x9");
        assert_eq!(family(2560, 1440), "16x9");
        assert_eq!(family(1280, 800), "8x5");
        assert_eq!(family(2532, 1170), "422x195");
        assert_eq!(family(800, 600), "4x3");
    }
}
