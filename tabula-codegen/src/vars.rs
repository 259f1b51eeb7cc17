//! Template variable records.
//!
//! Templates are interpolated naively, so every slot must always hold a
//! string. The factories here overlay a partial override onto an all-empty
//! default, built fresh for each call.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A fixed-shape record of named text slots.
pub trait TemplateVars {
    /// Every slot in declaration order, keyed by its template name.
    fn slots(&self) -> IndexMap<&'static str, &str>;
}

/// Variables for a generated model file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelTemplateVars {
    pub schema_name: String,
    pub imports: String,
    pub cross_model_imports: String,
    pub model_name: String,
    pub enums: String,
    pub interfaces: String,
    pub table_name: String,
    pub fields: String,
    pub associations: String,
    pub attributes: String,
    pub options: String,
    pub types_import: String,
}

/// Overrides for [`ModelTemplateVars`]; `None` keeps the default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialModelTemplateVars {
    pub schema_name: Option<String>,
    pub imports: Option<String>,
    pub cross_model_imports: Option<String>,
    pub model_name: Option<String>,
    pub enums: Option<String>,
    pub interfaces: Option<String>,
    pub table_name: Option<String>,
    pub fields: Option<String>,
    pub associations: Option<String>,
    pub attributes: Option<String>,
    pub options: Option<String>,
    pub types_import: Option<String>,
}

impl TemplateVars for ModelTemplateVars {
    fn slots(&self) -> IndexMap<&'static str, &str> {
        IndexMap::from([
            ("schemaName", self.schema_name.as_str()),
            ("imports", &self.imports),
            ("crossModelImports", &self.cross_model_imports),
            ("modelName", &self.model_name),
            ("enums", &self.enums),
            ("interfaces", &self.interfaces),
            ("tableName", &self.table_name),
            ("fields", &self.fields),
            ("associations", &self.associations),
            ("attributes", &self.attributes),
            ("options", &self.options),
            ("typesImport", &self.types_import),
        ])
    }
}

/// Variables for the aggregating index file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitTemplateVars {
    pub import_classes: String,
    pub import_types: String,
    pub associations: String,
    pub export_classes: String,
}

/// Overrides for [`InitTemplateVars`]; `None` keeps the default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialInitTemplateVars {
    pub import_classes: Option<String>,
    pub import_types: Option<String>,
    pub associations: Option<String>,
    pub export_classes: Option<String>,
}

impl TemplateVars for InitTemplateVars {
    fn slots(&self) -> IndexMap<&'static str, &str> {
        IndexMap::from([
            ("importClasses", self.import_classes.as_str()),
            ("importTypes", &self.import_types),
            ("associations", &self.associations),
            ("exportClasses", &self.export_classes),
        ])
    }
}

/// Build a complete model record, overlaying `partial` slot by slot.
pub fn model_template_vars(partial: Option<PartialModelTemplateVars>) -> ModelTemplateVars {
    let defaults = ModelTemplateVars::default();
    let Some(p) = partial else {
        return defaults;
    };

    ModelTemplateVars {
        schema_name: p.schema_name.unwrap_or(defaults.schema_name),
        imports: p.imports.unwrap_or(defaults.imports),
        cross_model_imports: p.cross_model_imports.unwrap_or(defaults.cross_model_imports),
        model_name: p.model_name.unwrap_or(defaults.model_name),
        enums: p.enums.unwrap_or(defaults.enums),
        interfaces: p.interfaces.unwrap_or(defaults.interfaces),
        table_name: p.table_name.unwrap_or(defaults.table_name),
        fields: p.fields.unwrap_or(defaults.fields),
        associations: p.associations.unwrap_or(defaults.associations),
        attributes: p.attributes.unwrap_or(defaults.attributes),
        options: p.options.unwrap_or(defaults.options),
        types_import: p.types_import.unwrap_or(defaults.types_import),
    }
}

/// Build a complete index record, overlaying `partial` slot by slot.
pub fn init_template_vars(partial: Option<PartialInitTemplateVars>) -> InitTemplateVars {
    let defaults = InitTemplateVars::default();
    let Some(p) = partial else {
        return defaults;
    };

    InitTemplateVars {
        import_classes: p.import_classes.unwrap_or(defaults.import_classes),
        import_types: p.import_types.unwrap_or(defaults.import_types),
        associations: p.associations.unwrap_or(defaults.associations),
        export_classes: p.export_classes.unwrap_or(defaults.export_classes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_vars_overlay_keeps_other_slots_empty() {
        let vars = model_template_vars(Some(PartialModelTemplateVars {
            model_name: Some("User".to_string()),
            ..Default::default()
        }));

        let slots = vars.slots();
        assert_eq!(slots.len(), 12);
        assert_eq!(slots["modelName"], "User");
        for (name, value) in &slots {
            if *name != "modelName" {
                assert_eq!(*value, "", "slot {name} should default to empty");
            }
        }
    }

    #[test]
    fn test_model_vars_without_partial() {
        assert_eq!(model_template_vars(None), ModelTemplateVars::default());
        assert!(model_template_vars(None).slots().values().all(|v| v.is_empty()));
    }

    #[test]
    fn test_explicit_empty_override_is_kept() {
        let vars = model_template_vars(Some(PartialModelTemplateVars {
            table_name: Some(String::new()),
            options: Some("timestamps: false,".to_string()),
            ..Default::default()
        }));

        assert_eq!(vars.table_name, "");
        assert_eq!(vars.options, "timestamps: false,");
    }

    #[test]
    fn test_init_vars_overlay() {
        let vars = init_template_vars(Some(PartialInitTemplateVars {
            export_classes: Some("  User,\n".to_string()),
            ..Default::default()
        }));

        let slots = vars.slots();
        assert_eq!(
            slots.keys().copied().collect::<Vec<_>>(),
            vec!["importClasses", "importTypes", "associations", "exportClasses"]
        );
        assert_eq!(slots["exportClasses"], "  User,\n");
        assert_eq!(slots["importClasses"], "");
        assert_eq!(init_template_vars(None), InitTemplateVars::default());
    }

    #[test]
    fn test_partial_deserializes_from_camel_case() {
        let partial: PartialModelTemplateVars =
            serde_json::from_str(r#"{ "modelName": "User", "typesImport": "" }"#).unwrap();
        let vars = model_template_vars(Some(partial));

        assert_eq!(vars.model_name, "User");
        assert_eq!(vars.types_import, "");
        assert_eq!(vars.schema_name, "");
    }

    #[test]
    fn test_serialized_names_match_slot_names() {
        let vars = model_template_vars(None);
        let json = serde_json::to_value(&vars).unwrap();
        let object = json.as_object().unwrap();

        for name in vars.slots().keys() {
            assert!(object.contains_key(*name), "missing {name}");
        }
        assert_eq!(object.len(), vars.slots().len());
    }
}
