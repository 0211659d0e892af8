// Generated by moorings-codegen - do not edit manually.

use once_cell::sync::Lazy;
use std::sync::Arc;

use super::keys;
use crate::{
    ColumnDef, ForeignKeyDef, PrimaryKeyDef, SqlType, Table, TableDescriptor, TableMeta,
    TypedColumn,
};

static META: Lazy<Arc<TableMeta>> = Lazy::new(|| {
    TableMeta::new(
        Some("PUBLIC"),
        "AUTHOR",
        vec![
            ColumnDef::new("ID", SqlType::Integer).identity(),
            ColumnDef::new("FIRST_NAME", SqlType::Varchar(50)).nullable(),
            ColumnDef::new("LAST_NAME", SqlType::Varchar(50)),
            ColumnDef::new("DATE_OF_BIRTH", SqlType::Date).nullable(),
            ColumnDef::new("YEAR_OF_BIRTH", SqlType::Integer).nullable(),
            ColumnDef::new("DISTINGUISHED", SqlType::SmallInt).nullable(),
        ],
        PrimaryKeyDef::clone(&keys::PK_T_AUTHOR),
        vec![],
    )
});

/// The reference instance of `PUBLIC.AUTHOR`.
pub static AUTHOR: Lazy<Author> = Lazy::new(Author::new);

/// The table `PUBLIC.AUTHOR`.
#[derive(Debug, Clone)]
pub struct Author {
    table: Table,
}

impl Author {
    fn from_table(table: Table) -> Self {
        Self { table }
    }

    /// A `PUBLIC.AUTHOR` table reference.
    pub fn new() -> Self {
        Self::from_table(Table::base(Arc::clone(&META)))
    }

    /// An aliased `PUBLIC.AUTHOR` table reference.
    pub fn aliased(alias: &str) -> Self {
        Self::from_table(Table::aliased(Arc::clone(&META), alias))
    }

    /// A `PUBLIC.AUTHOR` path instance, reached from `child` via `fk`.
    pub fn path(child: &Table, fk: &ForeignKeyDef) -> Self {
        Self::from_table(Table::path(Arc::clone(&META), child, fk))
    }

    /// A new instance of this table under a different alias.
    pub fn alias_as(&self, alias: &str) -> Self {
        Self::from_table(self.table.alias_as(alias))
    }

    /// Rename this table; returns a new instance.
    pub fn rename(&self, name: &str) -> Self {
        Self::from_table(self.table.rename(name))
    }

    /// The column `PUBLIC.AUTHOR.ID`.
    pub fn id(&self) -> TypedColumn<i32> {
        self.table.typed("ID")
    }

    /// The column `PUBLIC.AUTHOR.FIRST_NAME`.
    pub fn first_name(&self) -> TypedColumn<Option<String>> {
        self.table.typed("FIRST_NAME")
    }

    /// The column `PUBLIC.AUTHOR.LAST_NAME`.
    pub fn last_name(&self) -> TypedColumn<String> {
        self.table.typed("LAST_NAME")
    }

    /// The column `PUBLIC.AUTHOR.DATE_OF_BIRTH`.
    pub fn date_of_birth(&self) -> TypedColumn<Option<chrono::NaiveDate>> {
        self.table.typed("DATE_OF_BIRTH")
    }

    /// The column `PUBLIC.AUTHOR.YEAR_OF_BIRTH`.
    pub fn year_of_birth(&self) -> TypedColumn<Option<i32>> {
        self.table.typed("YEAR_OF_BIRTH")
    }

    /// The column `PUBLIC.AUTHOR.DISTINGUISHED`.
    pub fn distinguished(&self) -> TypedColumn<Option<i16>> {
        self.table.typed("DISTINGUISHED")
    }
}

impl Default for Author {
    fn default() -> Self {
        Self::new()
    }
}

impl TableDescriptor for Author {
    fn as_table(&self) -> &Table {
        &self.table
    }
}
