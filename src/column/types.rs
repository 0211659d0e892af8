//! SQL column types.

use std::fmt;

/// Data type of a column as declared in the schema.
///
/// The variants cover the types the code generator understands. Each maps
/// onto the corresponding `sea_query::ColumnDef` builder call for DDL
/// rendering; the `Display` form is the canonical spelling used in schema
/// snapshots and catalog files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlType {
    SmallInt,
    Integer,
    BigInt,
    Double,
    Boolean,
    /// Variable-length string with a maximum length.
    Varchar(u32),
    /// Unbounded character data (CLOB).
    Text,
    /// Binary large object.
    Blob,
    Date,
    /// Date-time with fractional-second precision (0..=6 digits).
    DateTime {
        precision: u8,
    },
    Json,
    Uuid,
    Decimal {
        precision: u32,
        scale: u32,
    },
}

impl SqlType {
    /// Apply this type to a sea-query column builder.
    pub fn apply(&self, def: &mut sea_query::ColumnDef) {
        match self {
            SqlType::SmallInt => {
                def.small_integer();
            }
            SqlType::Integer => {
                def.integer();
            }
            SqlType::BigInt => {
                def.big_integer();
            }
            SqlType::Double => {
                def.double();
            }
            SqlType::Boolean => {
                def.boolean();
            }
            SqlType::Varchar(len) => {
                def.string_len(*len);
            }
            SqlType::Text => {
                def.text();
            }
            SqlType::Blob => {
                def.blob();
            }
            SqlType::Date => {
                def.date();
            }
            // sea-query's builder has no precision knob for timestamps;
            // the precision is kept in the metadata for snapshot checks.
            SqlType::DateTime { .. } => {
                def.timestamp();
            }
            SqlType::Json => {
                def.json_binary();
            }
            SqlType::Uuid => {
                def.uuid();
            }
            SqlType::Decimal { precision, scale } => {
                def.decimal_len(*precision, *scale);
            }
        }
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlType::SmallInt => write!(f, "smallint"),
            SqlType::Integer => write!(f, "integer"),
            SqlType::BigInt => write!(f, "bigint"),
            SqlType::Double => write!(f, "double"),
            SqlType::Boolean => write!(f, "boolean"),
            SqlType::Varchar(len) => write!(f, "varchar({len})"),
            SqlType::Text => write!(f, "text"),
            SqlType::Blob => write!(f, "blob"),
            SqlType::Date => write!(f, "date"),
            SqlType::DateTime { precision } => write!(f, "datetime({precision})"),
            SqlType::Json => write!(f, "json"),
            SqlType::Uuid => write!(f, "uuid"),
            SqlType::Decimal { precision, scale } => write!(f, "decimal({precision},{scale})"),
        }
    }
}
