//! Table metadata and table instances.
//!
//! `TableMeta` is the per-table singleton built once by generated code.
//! `Table` is one reference to that table inside a query: the default
//! instance, an alias, or a path instance reached through a foreign key.
//! Generated table types wrap a `Table` and implement [`TableDescriptor`].

pub mod instance;
pub mod meta;

#[doc(inline)]
pub use instance::{PathOrigin, Table};
#[doc(inline)]
pub use meta::TableMeta;

use crate::column::ColumnDef;
use crate::key::{ForeignKeyDef, PrimaryKeyDef};
use sea_query::TableRef;

/// Implemented by every generated table descriptor type.
///
/// The generated type owns a [`Table`] instance; everything else is derived
/// from the shared metadata.
pub trait TableDescriptor {
    fn as_table(&self) -> &Table;

    /// Effective table name (reflects `rename`).
    fn table_name(&self) -> &str {
        self.as_table().name()
    }

    fn schema_name(&self) -> Option<&'static str> {
        self.as_table().meta().schema
    }

    /// Columns in declaration order.
    fn columns(&self) -> &[ColumnDef] {
        &self.as_table().meta().columns
    }

    fn primary_key(&self) -> &PrimaryKeyDef {
        &self.as_table().meta().primary_key
    }

    /// Outgoing foreign keys, in declaration order.
    fn references(&self) -> &[ForeignKeyDef] {
        &self.as_table().meta().foreign_keys
    }

    /// Identifier that qualifies this instance's columns in a query.
    fn qualifier(&self) -> &str {
        self.as_table().qualifier()
    }

    fn table_ref(&self) -> TableRef {
        self.as_table().table_ref()
    }
}
