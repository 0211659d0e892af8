// Generated by moorings-codegen - do not edit manually.

use once_cell::sync::{Lazy, OnceCell};
use std::sync::Arc;

use super::author::Author;
use super::keys;
use crate::{
    ColumnDef, ForeignKeyDef, PrimaryKeyDef, SqlType, Table, TableDescriptor, TableMeta,
    TypedColumn,
};

static META: Lazy<Arc<TableMeta>> = Lazy::new(|| {
    TableMeta::new(
        Some("PUBLIC"),
        "BOOK",
        vec![
            ColumnDef::new("ID", SqlType::Integer).identity(),
            ColumnDef::new("AUTHOR_ID", SqlType::Integer),
            ColumnDef::new("CO_AUTHOR_ID", SqlType::Integer).nullable(),
            ColumnDef::new("DETAILS_ID", SqlType::Integer).nullable(),
            ColumnDef::new("TITLE", SqlType::Varchar(400)),
            ColumnDef::new("PUBLISHED_IN", SqlType::Integer).nullable(),
            ColumnDef::new("LANGUAGE_ID", SqlType::Integer).nullable(),
            ColumnDef::new("CONTENT_TEXT", SqlType::Text).nullable(),
            ColumnDef::new("CONTENT_PDF", SqlType::Blob).nullable(),
            ColumnDef::new("REC_VERSION", SqlType::Integer).nullable(),
            ColumnDef::new("REC_TIMESTAMP", SqlType::DateTime { precision: 6 }).nullable(),
        ],
        PrimaryKeyDef::clone(&keys::PK_T_BOOK),
        vec![
            ForeignKeyDef::clone(&keys::FK_T_BOOK_AUTHOR_ID),
            ForeignKeyDef::clone(&keys::FK_T_BOOK_CO_AUTHOR_ID),
        ],
    )
});

/// The reference instance of `PUBLIC.BOOK`.
pub static BOOK: Lazy<Book> = Lazy::new(Book::new);

/// The table `PUBLIC.BOOK`.
#[derive(Debug, Clone)]
pub struct Book {
    table: Table,
    fk_t_book_author_id: OnceCell<Box<Author>>,
    fk_t_book_co_author_id: OnceCell<Box<Author>>,
}

impl Book {
    fn from_table(table: Table) -> Self {
        Self {
            table,
            fk_t_book_author_id: OnceCell::new(),
            fk_t_book_co_author_id: OnceCell::new(),
        }
    }

    /// A `PUBLIC.BOOK` table reference.
    pub fn new() -> Self {
        Self::from_table(Table::base(Arc::clone(&META)))
    }

    /// An aliased `PUBLIC.BOOK` table reference.
    pub fn aliased(alias: &str) -> Self {
        Self::from_table(Table::aliased(Arc::clone(&META), alias))
    }

    /// A `PUBLIC.BOOK` path instance, reached from `child` via `fk`.
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

    /// The column `PUBLIC.BOOK.ID`.
    pub fn id(&self) -> TypedColumn<i32> {
        self.table.typed("ID")
    }

    /// The column `PUBLIC.BOOK.AUTHOR_ID`.
    pub fn author_id(&self) -> TypedColumn<i32> {
        self.table.typed("AUTHOR_ID")
    }

    /// The column `PUBLIC.BOOK.CO_AUTHOR_ID`.
    pub fn co_author_id(&self) -> TypedColumn<Option<i32>> {
        self.table.typed("CO_AUTHOR_ID")
    }

    /// The column `PUBLIC.BOOK.DETAILS_ID`.
    pub fn details_id(&self) -> TypedColumn<Option<i32>> {
        self.table.typed("DETAILS_ID")
    }

    /// The column `PUBLIC.BOOK.TITLE`.
    pub fn title(&self) -> TypedColumn<String> {
        self.table.typed("TITLE")
    }

    /// The column `PUBLIC.BOOK.PUBLISHED_IN`.
    pub fn published_in(&self) -> TypedColumn<Option<i32>> {
        self.table.typed("PUBLISHED_IN")
    }

    /// The column `PUBLIC.BOOK.LANGUAGE_ID`.
    pub fn language_id(&self) -> TypedColumn<Option<i32>> {
        self.table.typed("LANGUAGE_ID")
    }

    /// The column `PUBLIC.BOOK.CONTENT_TEXT`.
    pub fn content_text(&self) -> TypedColumn<Option<String>> {
        self.table.typed("CONTENT_TEXT")
    }

    /// The column `PUBLIC.BOOK.CONTENT_PDF`.
    pub fn content_pdf(&self) -> TypedColumn<Option<Vec<u8>>> {
        self.table.typed("CONTENT_PDF")
    }

    /// The column `PUBLIC.BOOK.REC_VERSION`.
    pub fn rec_version(&self) -> TypedColumn<Option<i32>> {
        self.table.typed("REC_VERSION")
    }

    /// The column `PUBLIC.BOOK.REC_TIMESTAMP`.
    pub fn rec_timestamp(&self) -> TypedColumn<Option<chrono::NaiveDateTime>> {
        self.table.typed("REC_TIMESTAMP")
    }

    /// The `PUBLIC.AUTHOR` table reached via `FK_T_BOOK_AUTHOR_ID`,
    /// memoized after first access.
    pub fn fk_t_book_author_id(&self) -> &Author {
        &**self
            .fk_t_book_author_id
            .get_or_init(|| Box::new(Author::path(&self.table, &keys::FK_T_BOOK_AUTHOR_ID)))
    }

    /// The `PUBLIC.AUTHOR` table reached via `FK_T_BOOK_CO_AUTHOR_ID`,
    /// memoized after first access.
    pub fn fk_t_book_co_author_id(&self) -> &Author {
        &**self
            .fk_t_book_co_author_id
            .get_or_init(|| Box::new(Author::path(&self.table, &keys::FK_T_BOOK_CO_AUTHOR_ID)))
    }
}

impl Default for Book {
    fn default() -> Self {
        Self::new()
    }
}

impl TableDescriptor for Book {
    fn as_table(&self) -> &Table {
        &self.table
    }
}
