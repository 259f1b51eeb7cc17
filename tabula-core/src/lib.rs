//! Core primitives for the Tabula model generator.
//!
//! This crate provides the naming transforms applied to raw schema
//! identifiers and the [`CodeFile`] artifact that either writes generated
//! content or previews it as a character-level diff.

mod casing;
mod console;
mod diff;
mod file;
mod inflect;

// Naming
pub use casing::{
    CaseStyle, SingularizationMode, format_name, get_mode_singularize, normalize,
    normalize_singular, omit_id, table_to_model, to_camel_case, to_configurable_enum_name,
    to_kebab_case, to_pascal_case, to_property_name, to_snake_case, to_upper_snake_case,
};
pub use inflect::{pluralize, singularize};
// File materialization
pub use console::boxed;
pub use diff::{DiffSpan, SpanKind, char_diff, has_changes, render_spans};
pub use file::{CodeFile, FileError, SaveOutcome};
