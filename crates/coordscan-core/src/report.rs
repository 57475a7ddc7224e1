use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use coordscan_types::{Combination, Rgb};

use crate::document::SkippedImage;

#[derive(Debug, Clone)]
pub struct Failure {
    pub combination: Combination,
    pub reason: String,
}

/// What happened to every combination of a run
#[derive(Debug, Default)]
pub struct RunReport {
    pub written: Vec<PathBuf>,
    /// Combinations without a source directory
    pub missing: Vec<Combination>,
    pub skipped_images: Vec<(Combination, SkippedImage)>,
    /// Combinations whose document was not written
    pub failed: Vec<Failure>,
    pub sampling_failed: Vec<Failure>,
    pub colors: Vec<(Combination, BTreeMap<String, Rgb>)>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty() && self.sampling_failed.is_empty()
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} written, {} without sources, {} failed, {} images skipped",
            self.written.len(),
            self.missing.len(),
            self.failed.len(),
            self.skipped_images.len()
        )?;
        for combo in &self.missing {
            writeln!(f, "  no sources for {combo}")?;
        }
        for (combo, image) in &self.skipped_images {
            writeln!(f, "  skipped {combo}/{}: {}", image.file, image.reason)?;
        }
        for failure in &self.failed {
            writeln!(f, "  failed {}: {}", failure.combination, failure.reason)?;
        }
        for failure in &self.sampling_failed {
            writeln!(
                f,
                "  color sampling failed {}: {}",
                failure.combination, failure.reason
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampling_failure_marks_run_failed() {
        let mut report = RunReport::default();
        assert!(report.is_success());

        report.sampling_failed.push(Failure {
            combination: Combination::new("starrail", "windows", "800x600"),
            reason: "Missing reference element: starrail_relic_equipper_pos".into(),
        });
        assert!(!report.is_success());
        assert!(report.to_string().contains("color sampling failed starrail/windows/800x600"));
    }
}
