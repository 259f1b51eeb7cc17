//! Model-file generation for Tabula.
//!
//! This crate turns a [`SchemaDocument`](tabula_manifest::SchemaDocument)
//! into generated source files:
//!
//! - [`NamingPolicy`] resolves table and column names under a naming configuration
//! - [`model_template_vars`] / [`init_template_vars`] build fully-populated template records
//! - [`TemplateRenderer`] expands a [`Template`] with those records
//! - [`Generator`] ties them together and materializes every file as a
//!   [`CodeFile`](tabula_core::CodeFile)

mod error;
mod generator;
mod imports;
mod naming;
mod template;
mod type_mapper;
mod vars;

pub use error::{Error, Result};
pub use generator::{FailedFile, GenerateReport, Generator, GeneratorOptions};
pub use imports::ImportCollector;
pub use naming::NamingPolicy;
pub use template::{PlaceholderRenderer, Template, TemplateRenderer, interpolate};
pub use type_mapper::{SequelizeTypeMapper, SqlType, TypeMapper};
pub use vars::{
    InitTemplateVars, ModelTemplateVars, PartialInitTemplateVars, PartialModelTemplateVars,
    TemplateVars, init_template_vars, model_template_vars,
};
