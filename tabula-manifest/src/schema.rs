//! Schema document produced by the database connector.
//!
//! The document is a JSON description of tables and their columns. Only the
//! names are required; everything else is optional metadata.

use std::{path::Path, str::FromStr};

use serde::Deserialize;

use crate::{Error, Result, error::SourceContext};

/// Root of a schema document
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SchemaDocument {
    /// Database schema name (e.g., "public")
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tables: Vec<Table>,
}

/// A table and its columns, in declaration order
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Table {
    pub name: String,
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub comment: Option<String>,
}

/// A column and its type metadata
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Column {
    pub name: String,
    /// SQL type as reported by the database (e.g., "varchar(255)")
    #[serde(default, rename = "type")]
    pub sql_type: Option<String>,
    #[serde(default = "default_nullable")]
    pub nullable: bool,
    #[serde(default)]
    pub primary_key: bool,
    #[serde(default)]
    pub auto_increment: bool,
    /// Column default, verbatim from the database
    #[serde(default)]
    pub default: Option<serde_json::Value>,
    /// Allowed values for enum-typed columns
    #[serde(default)]
    pub enum_values: Vec<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

fn default_nullable() -> bool {
    true
}

impl Column {
    /// Whether the column holds one of a fixed set of values.
    pub fn is_enum(&self) -> bool {
        !self.enum_values.is_empty()
    }
}

impl Table {
    /// Look up a column by its raw name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Columns that form the primary key.
    pub fn primary_keys(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.primary_key)
    }
}

impl FromStr for SchemaDocument {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_schema(s, "schema.json")
    }
}

impl SchemaDocument {
    /// Read and parse a schema document from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        parse_schema(&content, &path.display().to_string())
    }

    /// Look up a table by its raw name.
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }
}

/// Parse a schema document with the given filename for error reporting.
pub fn parse_schema(content: &str, filename: &str) -> Result<SchemaDocument> {
    let source_ctx = SourceContext::new(content, filename);
    serde_json::from_str(content).map_err(|e| source_ctx.schema_error(e))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const BLOG: &str = r#"{
        "name": "public",
        "tables": [
            {
                "name": "users",
                "columns": [
                    { "name": "id", "type": "integer", "nullable": false, "primary_key": true, "auto_increment": true },
                    { "name": "email", "type": "varchar(255)", "nullable": false },
                    { "name": "role", "type": "enum", "enum_values": ["admin", "member"], "default": "member" }
                ]
            },
            { "name": "blog_posts" }
        ]
    }"#;

    #[test]
    fn test_parse_schema() {
        let schema: SchemaDocument = BLOG.parse().unwrap();

        assert_eq!(schema.name.as_deref(), Some("public"));
        assert_eq!(schema.tables.len(), 2);

        let users = schema.table("users").unwrap();
        assert_eq!(users.primary_keys().count(), 1);

        let role = users.column("role").unwrap();
        assert!(role.is_enum());
        assert!(role.nullable);
        assert_eq!(role.default, Some(serde_json::json!("member")));

        let email = users.column("email").unwrap();
        assert_eq!(email.sql_type.as_deref(), Some("varchar(255)"));
        assert!(!email.nullable);

        assert!(schema.table("blog_posts").unwrap().columns.is_empty());
    }

    #[test]
    fn test_table_order_is_preserved() {
        let schema: SchemaDocument = BLOG.parse().unwrap();
        let names: Vec<_> = schema.tables.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["users", "blog_posts"]);
    }

    #[test]
    fn test_missing_column_name_is_schema_error() {
        let err = r#"{ "tables": [ { "name": "users", "columns": [ { "type": "int" } ] } ] }"#
            .parse::<SchemaDocument>()
            .unwrap_err();
        assert!(matches!(*err, Error::Schema { span: Some(_), .. }));
    }

    #[test]
    fn test_invalid_json_is_schema_error() {
        let err = "{ not json".parse::<SchemaDocument>().unwrap_err();
        assert!(matches!(*err, Error::Schema { .. }));
    }

    #[test]
    fn test_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("schema.json");
        fs::write(&path, BLOG).unwrap();

        let schema = SchemaDocument::from_file(&path).unwrap();
        assert_eq!(schema.tables.len(), 2);

        let err = SchemaDocument::from_file(temp.path().join("missing.json")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
