//! Per-table metadata singletons.

use crate::column::ColumnDef;
use crate::error::SchemaError;
use crate::ident;
use crate::key::{ForeignKeyDef, PrimaryKeyDef};
use sea_query::{IntoIden, TableCreateStatement, TableName};
use std::sync::Arc;

/// Immutable metadata describing one table of the schema.
///
/// Generated code constructs exactly one `Arc<TableMeta>` per table, inside
/// a `Lazy` static; every [`crate::Table`] instance (default, aliased, or
/// path) shares that allocation. Sharing is what makes instance identity
/// checks via [`crate::Table::same_meta`] meaningful.
#[derive(Debug)]
pub struct TableMeta {
    pub schema: Option<&'static str>,
    pub name: &'static str,
    pub columns: Vec<ColumnDef>,
    pub primary_key: PrimaryKeyDef,
    pub foreign_keys: Vec<ForeignKeyDef>,
}

impl TableMeta {
    /// Construct and validate table metadata.
    ///
    /// # Panics
    ///
    /// Generated code is trusted, so structural violations panic rather
    /// than propagate: invalid identifiers, duplicate column names, more
    /// than one identity column, primary key columns that do not exist,
    /// or an identity column outside the primary key.
    pub fn new(
        schema: Option<&'static str>,
        name: &'static str,
        columns: Vec<ColumnDef>,
        primary_key: PrimaryKeyDef,
        foreign_keys: Vec<ForeignKeyDef>,
    ) -> Arc<Self> {
        ident::require_identifier("table", name);
        if let Some(schema) = schema {
            ident::require_identifier("schema", schema);
        }
        for col in &columns {
            ident::require_identifier("column", col.name);
            assert_eq!(
                columns.iter().filter(|c| c.name == col.name).count(),
                1,
                "table {name} declares column {} more than once",
                col.name
            );
        }
        let identity_count = columns.iter().filter(|c| c.identity).count();
        assert!(
            identity_count <= 1,
            "table {name} declares {identity_count} identity columns, at most one is allowed"
        );
        for pk_col in primary_key.columns.iter() {
            assert!(
                columns.iter().any(|c| c.name == pk_col),
                "primary key {} names unknown column {pk_col}",
                primary_key.name
            );
        }
        for col in columns.iter().filter(|c| c.identity) {
            assert!(
                primary_key.columns.contains(col.name),
                "identity column {} must be part of the primary key",
                col.name
            );
        }
        for fk in &foreign_keys {
            for fk_col in fk.columns.iter() {
                assert!(
                    columns.iter().any(|c| c.name == fk_col),
                    "foreign key {} names unknown column {fk_col}",
                    fk.name
                );
            }
        }

        log::debug!(
            "table metadata constructed: {}.{name} ({} columns, {} foreign keys)",
            schema.unwrap_or("<default>"),
            columns.len(),
            foreign_keys.len()
        );

        Arc::new(Self {
            schema,
            name,
            columns,
            primary_key,
            foreign_keys,
        })
    }

    /// Look up a column descriptor by name.
    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Like [`Self::column`], but an error for callers resolving names that
    /// arrive at runtime (query parameters, catalog diffs).
    pub fn require_column(&self, name: &str) -> Result<&ColumnDef, SchemaError> {
        self.column(name).ok_or_else(|| SchemaError::UnknownColumn {
            table: self.name.to_string(),
            column: name.to_string(),
        })
    }

    /// Foreign key by constraint name.
    pub fn foreign_key(&self, name: &str) -> Option<&ForeignKeyDef> {
        self.foreign_keys.iter().find(|fk| fk.name == name)
    }

    /// Schema-qualified name for statement building.
    pub fn table_name(&self) -> TableName {
        TableName(
            self.schema.map(sea_query::SchemaName::from),
            self.name.into_iden(),
        )
    }

    /// Render a `CREATE TABLE` statement from the descriptor.
    ///
    /// A single-column primary key is emitted on the column itself; a
    /// composite key becomes a table-level constraint.
    pub fn create_table_statement(&self) -> TableCreateStatement {
        let mut stmt = sea_query::Table::create();
        stmt.table(self.table_name());
        let unary_pk = self.primary_key.columns.arity() == 1;
        for col in &self.columns {
            let mut def = col.to_column_def();
            if unary_pk && self.primary_key.columns.contains(col.name) {
                def.primary_key();
            }
            stmt.col(&mut def);
        }
        if !unary_pk {
            let mut index = sea_query::Index::create();
            index.name(self.primary_key.name);
            for col in self.primary_key.columns.iter() {
                index.col(col.into_iden());
            }
            stmt.primary_key(&mut index);
        }
        stmt
    }
}
