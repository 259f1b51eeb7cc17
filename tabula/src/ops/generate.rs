//! Generate operation - model files from a schema document.

use eyre::{Context, Result};
use tabula_codegen::{Generator, GeneratorOptions, NamingPolicy};
use tabula_manifest::SchemaDocument;
use tracing::info;

use crate::reports::GenerateSummary;

/// Execute the generate operation.
///
/// Renders every model and the index file, then writes or previews each one.
/// Per-file failures are collected in the summary rather than returned.
pub fn generate(
    schema: &SchemaDocument,
    policy: NamingPolicy,
    options: GeneratorOptions,
) -> Result<GenerateSummary> {
    let output_dir = options.output_dir.clone();
    let dry_run = options.dry_run;

    let generator = Generator::new(schema, policy, options);
    let report = generator.run().wrap_err("Failed to generate models")?;
    info!(
        written = report.written.len(),
        previewed = report.previewed.len(),
        failed = report.failed.len(),
        "generation finished"
    );

    Ok(GenerateSummary {
        output_dir,
        dry_run,
        model_count: schema.tables.len(),
        report,
    })
}
