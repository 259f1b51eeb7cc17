//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Names resolved for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedModel {
    pub table: String,
    pub model: String,
    /// File name including the extension.
    pub file: String,
    pub columns: usize,
}

/// Report data from configuration validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Resolved schema document path.
    pub schema_path: PathBuf,
    /// Resolved output directory.
    pub output_dir: PathBuf,
    /// Whether the config selects preview mode.
    pub dry_run: bool,
    /// Number of files a run would produce, index included.
    pub file_count: usize,
    /// Resolved names, in schema order.
    pub models: Vec<ResolvedModel>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();

        out.key_value("Schema", &self.schema_path.display().to_string());
        out.key_value("Output", &self.output_dir.display().to_string());
        if self.dry_run {
            out.key_value("Mode", "dry run");
        }
        out.newline();

        let count = self.models.len();
        out.section(&format!(
            "{} model{}",
            count,
            if count == 1 { "" } else { "s" }
        ));
        for model in &self.models {
            out.list_item(&format!(
                "{} -> {} ({}, {} column{})",
                model.table,
                model.model,
                model.file,
                model.columns,
                if model.columns == 1 { "" } else { "s" }
            ));
        }
        out.newline();
        out.preformatted(&format!("{} files would be generated", self.file_count));
    }
}
