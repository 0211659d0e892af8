// Generated by moorings-codegen - do not edit manually.

use once_cell::sync::Lazy;

use crate::{ForeignKeyDef, KeyColumns, PrimaryKeyDef};

/// The primary key of `PUBLIC.AUTHOR`.
pub static PK_T_AUTHOR: Lazy<PrimaryKeyDef> =
    Lazy::new(|| PrimaryKeyDef::new("PK_T_AUTHOR", KeyColumns::Unary("ID")));

/// The primary key of `PUBLIC.BOOK`.
pub static PK_T_BOOK: Lazy<PrimaryKeyDef> =
    Lazy::new(|| PrimaryKeyDef::new("PK_T_BOOK", KeyColumns::Unary("ID")));

/// The foreign key `PUBLIC.BOOK.AUTHOR_ID` -> `PUBLIC.AUTHOR.ID`.
pub static FK_T_BOOK_AUTHOR_ID: Lazy<ForeignKeyDef> = Lazy::new(|| {
    ForeignKeyDef::new(
        "FK_T_BOOK_AUTHOR_ID",
        "BOOK",
        KeyColumns::Unary("AUTHOR_ID"),
        "AUTHOR",
        KeyColumns::Unary("ID"),
    )
});

/// The foreign key `PUBLIC.BOOK.CO_AUTHOR_ID` -> `PUBLIC.AUTHOR.ID`.
pub static FK_T_BOOK_CO_AUTHOR_ID: Lazy<ForeignKeyDef> = Lazy::new(|| {
    ForeignKeyDef::new(
        "FK_T_BOOK_CO_AUTHOR_ID",
        "BOOK",
        KeyColumns::Unary("CO_AUTHOR_ID"),
        "AUTHOR",
        KeyColumns::Unary("ID"),
    )
});
