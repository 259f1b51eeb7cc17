use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for tabula-codegen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort generation before any file is materialized.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("missing [naming] section in configuration")]
    #[diagnostic(
        code(tabula::config::missing_naming),
        help("add a [naming] table to tabula.toml, e.g. model = \"pascal\" and file = \"kebab\"")
    )]
    MissingNamingConfig,

    #[error("template '{template}' references unknown variable '{name}'")]
    #[diagnostic(code(tabula::template::unknown_placeholder))]
    UnknownPlaceholder { template: String, name: String },

    #[error("table '{table}' resolves to an empty {kind} name")]
    #[diagnostic(
        code(tabula::naming::empty_name),
        help("rename the table so it contains at least one letter or digit")
    )]
    EmptyName { table: String, kind: &'static str },

    #[error("'{first}' and '{second}' both generate '{path}'")]
    #[diagnostic(
        code(tabula::config::duplicate_output),
        help("choose [naming] rules that keep generated file names distinct")
    )]
    DuplicateOutput {
        path: PathBuf,
        first: String,
        second: String,
    },
}
