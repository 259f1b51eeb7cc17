//! Manifest types and parsing for tabula.toml files.

mod file;
mod parse;
mod validate;

use std::path::PathBuf;

use serde::Deserialize;
use tabula_core::{CaseStyle, SingularizationMode};

pub use file::TabulaToml;
pub use parse::parse_manifest;
pub use validate::ParseContext;

/// Root manifest for tabula.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Preview every generated file as a diff instead of writing it
    #[serde(default)]
    pub dry_run: bool,

    /// Input and output locations
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Identifier naming rules. Required to generate, but kept optional here
    /// so the generator can report its absence as a configuration error.
    pub naming: Option<NamingConfig>,
}

/// `[generator]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Schema document produced by the database connector
    pub schema: PathBuf,
    /// Directory generated files are written to
    pub output: PathBuf,
    /// Extension of generated files, without the dot
    pub extension: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            schema: PathBuf::from("schema.json"),
            output: PathBuf::from("src/models"),
            extension: "ts".to_string(),
        }
    }
}

/// `[naming]` section: per-target case rules.
///
/// An absent case style leaves names unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamingConfig {
    /// Case of generated model identifiers
    pub model: Option<CaseStyle>,
    /// Case of generated file names
    pub file: Option<CaseStyle>,
    /// Case of generated property identifiers
    pub property: Option<CaseStyle>,
    /// Singular/plural normalization of model and file names
    pub singularize_model: SingularizationMode,
}
