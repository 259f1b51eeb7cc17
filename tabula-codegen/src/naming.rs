//! Naming policy applied to schema identifiers.

use tabula_core::{format_name, get_mode_singularize, to_configurable_enum_name};
use tabula_manifest::{Manifest, NamingConfig};

use crate::{Error, Result};

/// Resolves table and column names into code identifiers under one
/// [`NamingConfig`].
///
/// The policy is immutable; the same input always resolves to the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamingPolicy {
    config: NamingConfig,
}

impl NamingPolicy {
    /// Bind a naming configuration.
    pub fn new(config: NamingConfig) -> Self {
        Self { config }
    }

    /// Bind the `[naming]` section of a manifest.
    ///
    /// A missing section is an error rather than a silent default, so a run
    /// never mixes naming rules.
    pub fn from_manifest(manifest: &Manifest) -> Result<Self> {
        manifest
            .naming
            .map(Self::new)
            .ok_or(Error::MissingNamingConfig)
    }

    /// Get the bound configuration.
    pub fn config(&self) -> &NamingConfig {
        &self.config
    }

    /// Model identifier for a table: singularized first, then re-cased.
    pub fn resolve_model_name(&self, table: &str) -> String {
        let name = get_mode_singularize(table, self.config.singularize_model);
        format_name(&name, self.config.model)
    }

    /// File name (without extension) for a table's model.
    pub fn resolve_file_name(&self, table: &str) -> String {
        let name = get_mode_singularize(table, self.config.singularize_model);
        format_name(&name, self.config.file)
    }

    /// Property identifier for a column. Never singularized or pluralized.
    pub fn resolve_property_name(&self, column: &str) -> String {
        format_name(column, self.config.property)
    }

    /// Enum type name for an enum-valued column.
    pub fn resolve_enum_name(&self, table: &str, column: &str) -> String {
        to_configurable_enum_name(table, column)
    }
}
