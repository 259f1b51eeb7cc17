//! Schema to model-file generation.

use std::{
    fmt::Write as _,
    io::{self, Write},
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use tabula_core::{CodeFile, FileError, SaveOutcome, to_pascal_case};
use tabula_manifest::{Column, SchemaDocument, Table};
use tracing::{debug, info, warn};

use crate::{
    Error, Result,
    imports::ImportCollector,
    naming::NamingPolicy,
    template::{PlaceholderRenderer, Template, TemplateRenderer},
    type_mapper::{SequelizeTypeMapper, SqlType, TypeMapper, quote},
    vars::{
        PartialInitTemplateVars, PartialModelTemplateVars, init_template_vars, model_template_vars,
    },
};

/// Where and how generated files are materialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Directory every generated file is placed in
    pub output_dir: PathBuf,
    /// File extension, without the dot
    pub extension: String,
    /// Preview diffs instead of writing
    pub dry_run: bool,
}

impl GeneratorOptions {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            extension: "ts".to_string(),
            dry_run: false,
        }
    }

    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    fn path_for(&self, stem: &str) -> PathBuf {
        self.output_dir.join(format!("{stem}.{}", self.extension))
    }
}

/// A file that could not be materialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedFile {
    pub path: PathBuf,
    /// Attempted operation, e.g. "write"
    pub operation: &'static str,
    pub message: String,
}

impl From<&FileError> for FailedFile {
    fn from(err: &FileError) -> Self {
        let message = std::error::Error::source(err)
            .map(ToString::to_string)
            .unwrap_or_else(|| err.to_string());
        Self {
            path: err.path().to_path_buf(),
            operation: err.operation(),
            message,
        }
    }
}

/// Outcome of a generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateReport {
    pub written: Vec<PathBuf>,
    pub previewed: Vec<PathBuf>,
    pub failed: Vec<FailedFile>,
}

impl GenerateReport {
    /// True when every file was written or previewed.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Total number of files attempted.
    pub fn total(&self) -> usize {
        self.written.len() + self.previewed.len() + self.failed.len()
    }
}

/// A resolved column, ready to render.
#[derive(Debug, Clone)]
struct Property<'a> {
    column: &'a Column,
    name: String,
    ty: String,
    /// `ty`, widened by the mapper when the column is nullable
    declared_type: String,
    data_type: String,
    /// Enum type name when the column is enum-valued
    enum_name: Option<String>,
    /// May be omitted on creation
    optional: bool,
}

/// A table with all names resolved.
#[derive(Debug, Clone)]
struct ModelPlan<'a> {
    table: &'a Table,
    model_name: String,
    file_name: String,
    properties: Vec<Property<'a>>,
}

/// Turns a schema document into model and index files.
pub struct Generator<'a> {
    schema: &'a SchemaDocument,
    policy: NamingPolicy,
    options: GeneratorOptions,
    renderer: Box<dyn TemplateRenderer + 'a>,
    mapper: Box<dyn TypeMapper + 'a>,
}

impl<'a> Generator<'a> {
    pub fn new(
        schema: &'a SchemaDocument,
        policy: NamingPolicy,
        options: GeneratorOptions,
    ) -> Self {
        Self {
            schema,
            policy,
            options,
            renderer: Box::new(PlaceholderRenderer::new()),
            mapper: Box::new(SequelizeTypeMapper),
        }
    }

    /// Replace the template renderer.
    pub fn with_renderer(mut self, renderer: impl TemplateRenderer + 'a) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    /// Replace the type mapper.
    pub fn with_mapper(mut self, mapper: impl TypeMapper + 'a) -> Self {
        self.mapper = Box::new(mapper);
        self
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Path of the index module.
    pub fn index_path(&self) -> PathBuf {
        self.options.path_for("index")
    }

    /// Render every file without materializing anything.
    ///
    /// Returns one model file per table, in schema order, followed by the
    /// index file. Fails if a table resolves to an empty name, two files
    /// would share a path (ignoring case), or a template cannot be rendered.
    pub fn artifacts(&self) -> Result<Vec<CodeFile>> {
        let plans: Vec<ModelPlan<'_>> = self
            .schema
            .tables
            .iter()
            .map(|table| self.plan(table))
            .collect();
        self.check_plans(&plans)?;

        let mut files = Vec::with_capacity(plans.len() + 1);
        for plan in &plans {
            let content = self.render_model(plan)?;
            files.push(
                CodeFile::new(self.options.path_for(&plan.file_name), content)
                    .dry_run(self.options.dry_run),
            );
        }
        files.push(
            CodeFile::new(self.index_path(), self.render_index(&plans)?)
                .dry_run(self.options.dry_run),
        );
        Ok(files)
    }

    /// Generate and save every file, printing previews to stdout.
    pub fn run(&self) -> Result<GenerateReport> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)
    }

    /// Generate and save every file, printing previews to `out`.
    ///
    /// A file that fails to save is recorded in the report and the remaining
    /// files are still attempted.
    pub fn run_to<W: Write>(&self, out: &mut W) -> Result<GenerateReport> {
        let files = self.artifacts()?;
        info!(
            files = files.len(),
            dry_run = self.options.dry_run,
            output = %self.options.output_dir.display(),
            "generating models"
        );

        let mut report = GenerateReport::default();
        for file in files {
            let path = file.path().to_path_buf();
            match file.save_to(out) {
                Ok(SaveOutcome::Written) => report.written.push(path),
                Ok(SaveOutcome::Previewed) => report.previewed.push(path),
                Err(err) => {
                    warn!(
                        path = %err.path().display(),
                        operation = err.operation(),
                        "failed to save generated file"
                    );
                    report.failed.push(FailedFile::from(&err));
                }
            }
        }
        Ok(report)
    }

    fn plan<'t>(&self, table: &'t Table) -> ModelPlan<'t> {
        let model_name = self.policy.resolve_model_name(&table.name);
        let file_name = self.policy.resolve_file_name(&table.name);
        debug!(
            table = %table.name,
            model = %model_name,
            file = %file_name,
            "resolved table names"
        );

        let properties = table
            .columns
            .iter()
            .map(|column| self.property(table, column))
            .collect();

        ModelPlan {
            table,
            model_name,
            file_name,
            properties,
        }
    }

    fn property<'t>(&self, table: &Table, column: &'t Column) -> Property<'t> {
        let name = self.policy.resolve_property_name(&column.name);
        let (ty, data_type, enum_name) = if column.is_enum() {
            let enum_name = self.policy.resolve_enum_name(&table.name, &column.name);
            let data_type = self.mapper.enum_data_type(&column.enum_values);
            (enum_name.clone(), data_type, Some(enum_name))
        } else {
            let sql_type = SqlType::parse(column.sql_type.as_deref().unwrap_or_default());
            (
                self.mapper.map_type(sql_type).to_string(),
                self.mapper.data_type(sql_type),
                None,
            )
        };

        let declared_type = if column.nullable {
            self.mapper.map_nullable_type(&ty)
        } else {
            ty.clone()
        };

        Property {
            column,
            name,
            ty,
            declared_type,
            data_type,
            enum_name,
            optional: column.nullable || column.auto_increment || has_default(column),
        }
    }

    fn check_plans(&self, plans: &[ModelPlan<'_>]) -> Result<()> {
        // Keyed by lowercased path; "User.ts" and "user.ts" are one file on
        // case-insensitive filesystems
        let mut seen: IndexMap<String, &str> = IndexMap::new();
        seen.insert(path_key(&self.index_path()), "index");

        for plan in plans {
            let table = &plan.table.name;
            for (kind, name) in [("model", &plan.model_name), ("file", &plan.file_name)] {
                if name.is_empty() {
                    return Err(Error::EmptyName {
                        table: table.clone(),
                        kind,
                    });
                }
            }

            let path = self.options.path_for(&plan.file_name);
            if let Some(first) = seen.get(&path_key(&path)) {
                return Err(Error::DuplicateOutput {
                    path,
                    first: first.to_string(),
                    second: table.clone(),
                });
            }
            seen.insert(path_key(&path), table);
        }
        Ok(())
    }

    fn render_model(&self, plan: &ModelPlan<'_>) -> Result<String> {
        let model = &plan.model_name;
        let optional: Vec<&Property<'_>> =
            plan.properties.iter().filter(|p| p.optional).collect();

        let mut imports = ImportCollector::new();
        for symbol in ["DataTypes", "Model", "Sequelize"] {
            imports.add("sequelize", symbol);
        }
        if !optional.is_empty() {
            imports.add("sequelize", "Optional");
        }

        let vars = model_template_vars(Some(PartialModelTemplateVars {
            schema_name: self.schema.name.clone(),
            imports: Some(imports.render()),
            model_name: Some(model.clone()),
            enums: Some(render_enums(&plan.properties)),
            interfaces: Some(render_interfaces(model, &plan.properties, &optional)),
            table_name: Some(plan.table.name.clone()),
            fields: Some(render_fields(&plan.properties)),
            attributes: Some(self.render_attributes(&plan.properties)),
            options: Some(self.render_options(plan.table)),
            ..Default::default()
        }));

        self.renderer.render(Template::Model, &vars)
    }

    fn render_attributes(&self, properties: &[Property<'_>]) -> String {
        let mut out = String::new();
        for p in properties {
            let column = p.column;
            let _ = writeln!(out, "      {}: {{", p.name);
            let _ = writeln!(out, "        type: {},", p.data_type);
            let _ = writeln!(out, "        allowNull: {},", column.nullable);
            if column.primary_key {
                out.push_str("        primaryKey: true,\n");
            }
            if column.auto_increment {
                out.push_str("        autoIncrement: true,\n");
            } else if let Some(default) = column.default.as_ref().filter(|d| !d.is_null()) {
                let literal = default_literal(default, &p.ty);
                let _ = writeln!(out, "        defaultValue: {literal},");
            }
            if let Some(comment) = &column.comment {
                let _ = writeln!(out, "        comment: {},", quote(comment));
            }
            if p.name != column.name {
                let _ = writeln!(out, "        field: {},", quote(&column.name));
            }
            out.push_str("      },\n");
        }
        out
    }

    fn render_options(&self, table: &Table) -> String {
        let mut out = String::new();
        if let Some(schema) = &self.schema.name {
            let _ = writeln!(out, "      schema: {},", quote(schema));
        }
        if let Some(comment) = &table.comment {
            let _ = writeln!(out, "      comment: {},", quote(comment));
        }
        out.push_str("      timestamps: false,\n");
        out
    }

    fn render_index(&self, plans: &[ModelPlan<'_>]) -> Result<String> {
        let mut imports = ImportCollector::new();
        let mut exports = String::new();
        let mut init = String::new();

        for plan in plans {
            let module = format!("./{}", plan.file_name);
            let model = &plan.model_name;
            imports.add(&module, model);
            imports.add_type(&module, &format!("{model}Attributes"));
            imports.add_type(&module, &format!("{model}CreationAttributes"));
            let _ = writeln!(exports, "  {model},");
            let _ = writeln!(init, "  {model}.initModel(sequelize);");
        }

        let vars = init_template_vars(Some(PartialInitTemplateVars {
            import_classes: Some(imports.render()),
            import_types: Some(imports.render_type_exports()),
            associations: Some(init),
            export_classes: Some(exports),
        }));

        self.renderer.render(Template::Init, &vars)
    }
}

fn has_default(column: &Column) -> bool {
    column.default.as_ref().is_some_and(|d| !d.is_null())
}

fn path_key(path: &Path) -> String {
    path.to_string_lossy().to_lowercase()
}

fn property_marker(p: &Property<'_>) -> &'static str {
    if p.column.nullable { "?" } else { "" }
}

fn render_enums(properties: &[Property<'_>]) -> String {
    let mut out = String::new();
    for p in properties {
        let Some(name) = &p.enum_name else {
            continue;
        };
        let _ = writeln!(out, "export enum {name} {{");
        for value in &p.column.enum_values {
            let _ = writeln!(out, "  {} = {},", enum_member(value), quote(value));
        }
        out.push_str("}\n\n");
    }
    out
}

fn enum_member(value: &str) -> String {
    let member = to_pascal_case(value);
    match member.chars().next() {
        None => "Empty".to_string(),
        Some(c) if c.is_ascii_digit() => format!("_{member}"),
        Some(_) => member,
    }
}

fn render_interfaces(
    model: &str,
    properties: &[Property<'_>],
    optional: &[&Property<'_>],
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "export interface {model}Attributes {{");
    for p in properties {
        let _ = writeln!(out, "  {}{}: {};", p.name, property_marker(p), p.declared_type);
    }
    out.push_str("}\n\n");

    if optional.is_empty() {
        let _ = writeln!(out, "export type {model}CreationAttributes = {model}Attributes;");
    } else {
        let names: Vec<String> = optional.iter().map(|p| quote(&p.name)).collect();
        let _ = writeln!(
            out,
            "export type {model}OptionalAttributes = {};",
            names.join(" | ")
        );
        let _ = writeln!(
            out,
            "export type {model}CreationAttributes = \
             Optional<{model}Attributes, {model}OptionalAttributes>;"
        );
    }
    out.push('\n');
    out
}

fn render_fields(properties: &[Property<'_>]) -> String {
    let mut out = String::new();
    for p in properties {
        let _ = writeln!(
            out,
            "  declare {}{}: {};",
            p.name,
            property_marker(p),
            p.declared_type
        );
    }
    out
}

/// TypeScript expression for a column default.
///
/// SQL expressions such as `CURRENT_TIMESTAMP` or `now()` become
/// `Sequelize.literal` calls; Postgres casts (`'draft'::status`) are stripped.
fn default_literal(value: &serde_json::Value, ty: &str) -> String {
    let serde_json::Value::String(raw) = value else {
        return value.to_string();
    };

    let uncast = raw.rsplit_once("::").map_or(raw.as_str(), |(head, _)| head);
    if let Some(inner) = uncast
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
    {
        return quote(inner);
    }

    if is_sql_expression(raw) {
        return format!("Sequelize.literal({})", quote(raw));
    }
    match ty {
        "number" if raw.parse::<f64>().is_ok() => raw.clone(),
        "boolean" if matches!(raw.as_str(), "true" | "false") => raw.clone(),
        _ => quote(raw),
    }
}

fn is_sql_expression(value: &str) -> bool {
    const KEYWORDS: [&str; 4] = [
        "CURRENT_TIMESTAMP",
        "CURRENT_DATE",
        "CURRENT_TIME",
        "LOCALTIMESTAMP",
    ];
    value.ends_with(')') || KEYWORDS.iter().any(|k| value.eq_ignore_ascii_case(k))
}
