use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use tabula_codegen::NamingPolicy;
use tabula_manifest::{SchemaDocument, TabulaToml};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to tabula.toml (defaults to ./tabula.toml)
    #[arg(short, long, default_value = "tabula.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let tabula_toml = TabulaToml::open(&self.config).unwrap_or_exit();
        let schema = SchemaDocument::from_file(tabula_toml.schema_path()).unwrap_or_exit();
        let policy = NamingPolicy::from_manifest(tabula_toml.manifest()).unwrap_or_exit();

        let report = ops::check(&tabula_toml, &schema, policy)?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
