use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use tabula_codegen::{GeneratorOptions, NamingPolicy};
use tabula_manifest::{SchemaDocument, TabulaToml};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to tabula.toml (defaults to ./tabula.toml)
    #[arg(short, long, default_value = "tabula.toml")]
    pub config: PathBuf,

    /// Schema document (overrides the [generator] setting)
    #[arg(long)]
    pub schema: Option<PathBuf>,

    /// Output directory (overrides the [generator] setting)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview changes as a diff without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let tabula_toml = TabulaToml::open(&self.config).unwrap_or_exit();
        let manifest = tabula_toml.manifest();

        let schema_path = self
            .schema
            .clone()
            .unwrap_or_else(|| tabula_toml.schema_path());
        let schema = SchemaDocument::from_file(&schema_path).unwrap_or_exit();
        let policy = NamingPolicy::from_manifest(manifest).unwrap_or_exit();

        let options = GeneratorOptions::new(
            self.output
                .clone()
                .unwrap_or_else(|| tabula_toml.output_dir()),
        )
        .extension(&manifest.generator.extension)
        .dry_run(self.dry_run || manifest.dry_run);

        let report = ops::generate(&schema, policy, options)?;
        report.render(&mut TerminalOutput::new());

        if !report.is_success() {
            std::process::exit(1);
        }
        Ok(())
    }
}
