//! Check operation - configuration and naming validation.

use eyre::{Context, Result};
use tabula_codegen::{Generator, GeneratorOptions, NamingPolicy};
use tabula_manifest::{SchemaDocument, TabulaToml};

use crate::reports::{CheckReport, ResolvedModel};

/// Execute the check operation.
///
/// Resolves every table name and renders every file in memory, so naming
/// collisions surface without touching the output directory.
pub fn check(
    tabula_toml: &TabulaToml,
    schema: &SchemaDocument,
    policy: NamingPolicy,
) -> Result<CheckReport> {
    let manifest = tabula_toml.manifest();
    let options = GeneratorOptions::new(tabula_toml.output_dir())
        .extension(&manifest.generator.extension)
        .dry_run(true);
    let extension = options.extension.clone();

    let generator = Generator::new(schema, policy, options);
    let files = generator.artifacts().wrap_err("Validation failed")?;

    let models = schema
        .tables
        .iter()
        .map(|table| ResolvedModel {
            table: table.name.clone(),
            model: policy.resolve_model_name(&table.name),
            file: format!("{}.{extension}", policy.resolve_file_name(&table.name)),
            columns: table.columns.len(),
        })
        .collect();

    Ok(CheckReport {
        config_path: tabula_toml.path().to_path_buf(),
        schema_path: tabula_toml.schema_path(),
        output_dir: tabula_toml.output_dir(),
        dry_run: manifest.dry_run,
        file_count: files.len(),
        models,
    })
}
