//! Validation context and utilities for manifest parsing.

use std::{path::Path, sync::Arc};

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
#[derive(Debug, Clone)]
pub struct ParseContext {
    /// Source context for error reporting
    source: Arc<SourceContext>,
}

impl ParseContext {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        self.source.src()
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    /// Find the span of `key = ...` in the source.
    pub fn find_span(&self, key: &str) -> Option<SourceSpan> {
        find_key_span(self.src(), key)
    }

    /// Validate the generated file extension.
    pub fn validate_extension(&self, extension: &str) -> Result<()> {
        if let Some(reason) = validate_extension(extension) {
            let message = format!("invalid extension '{extension}': {reason}");
            return Err(match self.find_span("extension") {
                Some(span) => self.source.validation_error_at(message, span),
                None => self.source.validation_error(message),
            });
        }
        Ok(())
    }

    /// Validate that a configured path is not empty.
    pub fn validate_path(&self, path: &Path, key: &str) -> Result<()> {
        if path.as_os_str().is_empty() {
            let message = format!("'{key}' must not be empty");
            return Err(match self.find_span(key) {
                Some(span) => self.source.validation_error_at(message, span),
                None => self.source.validation_error(message),
            });
        }
        Ok(())
    }
}

/// Find the span of a `key = value` assignment's key.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();
        if let Some(rest) = trimmed.strip_prefix(key) {
            if rest.trim_start().starts_with('=') {
                return Some(SourceSpan::from((offset + indent, key.len())));
            }
        }
        offset += line.len();
    }
    None
}

/// Check an extension, returning the reason it is invalid.
pub(crate) fn validate_extension(extension: &str) -> Option<&'static str> {
    if extension.is_empty() {
        return Some("extension cannot be empty");
    }
    if extension.contains('.') {
        return Some("extension must not contain a dot");
    }
    if extension.contains(['/', '\\']) {
        return Some("extension must not contain path separators");
    }
    None
}
