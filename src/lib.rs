//! # Moorings
//!
//! Typed table descriptors and schema reflection for `sea-query`.
//!
//! A table descriptor mirrors one relational table: its columns (with SQL
//! types and nullability), its primary key, and its outgoing foreign keys.
//! Descriptors are immutable after construction; aliasing, renaming, and
//! foreign-key path navigation all return fresh instances. Descriptor
//! modules are produced by `moorings-codegen` from a catalog description
//! of the live schema.

pub mod column;
pub mod error;
pub mod ident;
pub mod key;
pub mod relation;
pub mod schema;
pub mod snapshot;
pub mod table;

pub mod tests_cfg;

pub use column::{ColumnDef, SqlType, TypedColumn};
pub use error::SchemaError;
pub use key::{ForeignKeyDef, KeyColumns, PrimaryKeyDef};
pub use relation::{path_alias, RelationDef, RelationType};
pub use schema::SchemaDef;
pub use snapshot::TableSnapshot;
pub use table::{Table, TableDescriptor, TableMeta};
