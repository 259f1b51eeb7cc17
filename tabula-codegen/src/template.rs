//! Template rendering.

use crate::{Error, Result, vars::TemplateVars};

/// A built-in template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    /// One model class per table.
    Model,
    /// The index module that initializes and exports every model.
    Init,
}

impl Template {
    pub fn name(&self) -> &'static str {
        match self {
            Template::Model => "model",
            Template::Init => "init",
        }
    }

    /// Raw template text.
    pub fn source(&self) -> &'static str {
        match self {
            Template::Model => include_str!("../templates/model.ts.tmpl"),
            Template::Init => include_str!("../templates/index.ts.tmpl"),
        }
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Expands a named template with a variable record into text.
pub trait TemplateRenderer {
    fn render(&self, template: Template, vars: &dyn TemplateVars) -> Result<String>;
}

/// Renders the built-in templates by substituting `{{ slot }}` placeholders.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderRenderer;

impl PlaceholderRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for PlaceholderRenderer {
    fn render(&self, template: Template, vars: &dyn TemplateVars) -> Result<String> {
        interpolate(template.name(), template.source(), vars)
    }
}

/// Replace every `{{ name }}` in `source` with the matching slot value.
///
/// Slot values are inserted as-is and never rescanned. An unterminated `{{`
/// is copied through unchanged.
pub fn interpolate(template: &str, source: &str, vars: &dyn TemplateVars) -> Result<String> {
    let slots = vars.slots();
    let mut out = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];

        let Some(end) = after_open.find("}}") else {
            out.push_str(&rest[start..]);
            return Ok(out);
        };

        let name = after_open[..end].trim();
        let value = slots
            .get(name)
            .ok_or_else(|| Error::UnknownPlaceholder {
                template: template.to_string(),
                name: name.to_string(),
            })?;
        out.push_str(value);
        rest = &after_open[end + 2..];
    }

    out.push_str(rest);
    Ok(out)
}
