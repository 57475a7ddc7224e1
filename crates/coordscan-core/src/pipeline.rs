use coordscan_config::Config;
use coordscan_types::Combination;

use crate::catalog::Catalog;
use crate::document::{assemble, write_document};
use crate::report::{Failure, RunReport};
use crate::sampler::{reference_position, sample_characters};

/// Process every catalog combination in order. Failures stay scoped to the
/// combination they happen in.
pub fn run(config: &Config, catalog: &Catalog) -> RunReport {
    let mut report = RunReport::default();

    for combo in catalog.combinations() {
        process_combination(config, &combo, &mut report);
    }

    tracing::info!(
        "Run finished: {} written, {} failed",
        report.written.len(),
        report.failed.len()
    );
    report
}

fn process_combination(config: &Config, combo: &Combination, report: &mut RunReport) {
    let source_dir = config
        .paths
        .source_dir(&combo.game, &combo.os, &combo.resolution);
    if !source_dir.is_dir() {
        tracing::debug!("No sources for {combo}");
        report.missing.push(combo.clone());
        return;
    }

    let assembly = match assemble(combo, &source_dir, &config.output) {
        Ok(assembly) => assembly,
        Err(e) => {
            tracing::error!("{combo}: {e}");
            report.failed.push(Failure {
                combination: combo.clone(),
                reason: e.to_string(),
            });
            return;
        }
    };
    report.skipped_images.extend(
        assembly
            .skipped
            .into_iter()
            .map(|image| (combo.clone(), image)),
    );

    let output_path = config
        .paths
        .output_path(&combo.game, &combo.os, &combo.resolution);
    if let Err(e) = write_document(&assembly.document, &output_path) {
        tracing::error!("{combo}: failed to write {}: {e}", output_path.display());
        report.failed.push(Failure {
            combination: combo.clone(),
            reason: e.to_string(),
        });
        return;
    }
    tracing::info!("Wrote {}", output_path.display());
    report.written.push(output_path);

    let sampler = &config.sampler;
    if !sampler.applies_to(&combo.game) {
        return;
    }

    let sampled = reference_position(&assembly.document, &sampler.reference_element())
        .and_then(|position| {
            sample_characters(
                &source_dir.join(&sampler.characters_dir),
                position,
                sampler.dry_run,
            )
        });
    match sampled {
        Ok(colors) => {
            tracing::info!("{combo}: sampled {} character colors", colors.len());
            report.colors.push((combo.clone(), colors));
        }
        Err(e) => {
            tracing::error!("{combo}: color sampling failed: {e}");
            report.sampling_failed.push(Failure {
                combination: combo.clone(),
                reason: e.to_string(),
            });
        }
    }
}
