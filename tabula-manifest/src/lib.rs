//! Configuration and input loading for the Tabula model generator.
//!
//! - [`Manifest`] / [`TabulaToml`] - the `tabula.toml` configuration
//! - [`SchemaDocument`] - tables and columns emitted by the database connector

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
mod schema;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    GeneratorConfig, Manifest, NamingConfig, ParseContext, TabulaToml, parse_manifest,
};
pub use schema::{Column, SchemaDocument, Table, parse_schema};
