//! Mapping of SQL column types to generated TypeScript types.

/// A SQL column type, reduced to what the generated code distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    Integer,
    BigInt,
    Decimal,
    Float,
    Boolean,
    /// Calendar date without a time component
    Date,
    DateTime,
    Time,
    /// `json`, or `jsonb` when `binary` is set
    Json { binary: bool },
    Uuid,
    Binary,
    Text,
    /// Character data with an optional declared length
    String(Option<u32>),
}

impl SqlType {
    /// Classify a type string as reported by the database.
    ///
    /// Matching is case-insensitive and ignores modifiers such as
    /// `unsigned`. Anything unrecognized is treated as character data.
    pub fn parse(raw: &str) -> Self {
        let lower = raw.trim().to_ascii_lowercase();
        let (base, args) = match lower.split_once('(') {
            Some((base, rest)) => (base.trim(), rest.split(')').next().map(str::trim)),
            None => (lower.as_str(), None),
        };
        let base = base.trim_end_matches(" unsigned").trim();

        match base {
            "tinyint" if args == Some("1") => SqlType::Boolean,
            "int" | "integer" | "int2" | "int4" | "smallint" | "tinyint" | "mediumint"
            | "serial" | "smallserial" => SqlType::Integer,
            "bigint" | "int8" | "bigserial" => SqlType::BigInt,
            "decimal" | "numeric" | "money" => SqlType::Decimal,
            "float" | "float4" | "float8" | "double" | "double precision" | "real" => {
                SqlType::Float
            }
            "bool" | "boolean" => SqlType::Boolean,
            "date" => SqlType::Date,
            "json" => SqlType::Json { binary: false },
            "jsonb" => SqlType::Json { binary: true },
            "uuid" => SqlType::Uuid,
            "bytea" | "blob" | "tinyblob" | "mediumblob" | "longblob" | "binary"
            | "varbinary" => SqlType::Binary,
            "text" | "tinytext" | "mediumtext" | "longtext" => SqlType::Text,
            "varchar" | "character varying" | "char" | "character" | "nvarchar" => {
                SqlType::String(args.and_then(|a| a.parse().ok()))
            }
            b if b.starts_with("timestamp") || b.starts_with("datetime") => SqlType::DateTime,
            b if b.starts_with("time") => SqlType::Time,
            _ => SqlType::String(None),
        }
    }
}

/// Maps column types to language-specific type expressions.
pub trait TypeMapper {
    /// Type of a property holding values of `sql_type`.
    fn map_type(&self, sql_type: SqlType) -> &'static str;

    /// Type of a property that may also hold no value.
    fn map_nullable_type(&self, ty: &str) -> String {
        format!("{ty} | null")
    }

    /// ORM column type expression for `sql_type`.
    fn data_type(&self, sql_type: SqlType) -> String;

    /// ORM column type expression for an enum over `values`.
    fn enum_data_type(&self, values: &[String]) -> String;
}

/// TypeScript types and sequelize `DataTypes`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequelizeTypeMapper;

impl TypeMapper for SequelizeTypeMapper {
    fn map_type(&self, sql_type: SqlType) -> &'static str {
        match sql_type {
            SqlType::Integer | SqlType::Decimal | SqlType::Float => "number",
            // 64-bit values overflow a JS number; sequelize returns strings
            SqlType::BigInt => "string",
            SqlType::Boolean => "boolean",
            SqlType::Date | SqlType::DateTime => "Date",
            SqlType::Json { .. } => "object",
            SqlType::Binary => "Buffer",
            SqlType::Time | SqlType::Uuid | SqlType::Text | SqlType::String(_) => "string",
        }
    }

    fn data_type(&self, sql_type: SqlType) -> String {
        let name = match sql_type {
            SqlType::Integer => "INTEGER",
            SqlType::BigInt => "BIGINT",
            SqlType::Decimal => "DECIMAL",
            SqlType::Float => "FLOAT",
            SqlType::Boolean => "BOOLEAN",
            SqlType::Date => "DATEONLY",
            SqlType::DateTime => "DATE",
            SqlType::Time => "TIME",
            SqlType::Json { binary: false } => "JSON",
            SqlType::Json { binary: true } => "JSONB",
            SqlType::Uuid => "UUID",
            SqlType::Binary => "BLOB",
            SqlType::Text => "TEXT",
            SqlType::String(Some(len)) => return format!("DataTypes.STRING({len})"),
            SqlType::String(None) => "STRING",
        };
        format!("DataTypes.{name}")
    }

    fn enum_data_type(&self, values: &[String]) -> String {
        let values: Vec<String> = values.iter().map(|v| quote(v)).collect();
        format!("DataTypes.ENUM({})", values.join(", "))
    }
}

/// Single-quoted TypeScript string literal.
pub(crate) fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}
