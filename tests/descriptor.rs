//! Integration tests for generated table descriptors
//!
//! These tests exercise the descriptor surface through the reference
//! `PUBLIC` schema: column metadata, keys, aliasing, renaming, and
//! memoized foreign key navigation.

use moorings::tests_cfg::book::{Book, BOOK};
use moorings::tests_cfg::{author::AUTHOR, keys};
use moorings::{KeyColumns, SchemaError, TableDescriptor, TableSnapshot};

#[test]
fn test_book_column_layout() {
    let names: Vec<&str> = BOOK.columns().iter().map(|c| c.name).collect();
    assert_eq!(
        names,
        vec![
            "ID",
            "AUTHOR_ID",
            "CO_AUTHOR_ID",
            "DETAILS_ID",
            "TITLE",
            "PUBLISHED_IN",
            "LANGUAGE_ID",
            "CONTENT_TEXT",
            "CONTENT_PDF",
            "REC_VERSION",
            "REC_TIMESTAMP",
        ]
    );

    let snapshot = TableSnapshot::of(BOOK.as_table().meta());
    assert_eq!(snapshot.schema.as_deref(), Some("PUBLIC"));
    assert_eq!(snapshot.table, "BOOK");

    let title = &snapshot.columns[4];
    assert_eq!(title.sql_type, "varchar(400)");
    assert!(!title.nullable);

    let rec_timestamp = &snapshot.columns[10];
    assert_eq!(rec_timestamp.sql_type, "datetime(6)");
    assert!(rec_timestamp.nullable);
}

#[test]
fn test_book_nullability_mirrors_constraints() {
    let meta = BOOK.as_table().meta();
    assert!(!meta.column("AUTHOR_ID").unwrap().nullable);
    assert!(meta.column("CO_AUTHOR_ID").unwrap().nullable);
    assert!(meta.column("DETAILS_ID").unwrap().nullable);
}

#[test]
fn test_book_has_exactly_one_identity_column() {
    let identity: Vec<&str> = BOOK
        .columns()
        .iter()
        .filter(|c| c.identity)
        .map(|c| c.name)
        .collect();
    assert_eq!(identity, vec!["ID"]);
}

#[test]
fn test_book_primary_key() {
    let pk = BOOK.primary_key();
    assert_eq!(pk.name, "PK_T_BOOK");
    assert_eq!(pk.columns, KeyColumns::Unary("ID"));
}

#[test]
fn test_book_references_author_twice() {
    let fks = BOOK.references();
    assert_eq!(fks.len(), 2);
    assert_eq!(fks[0].name, "FK_T_BOOK_AUTHOR_ID");
    assert_eq!(fks[0].ref_table, "AUTHOR");
    assert_eq!(fks[1].name, "FK_T_BOOK_CO_AUTHOR_ID");
    assert_eq!(fks[1].ref_table, "AUTHOR");
    assert!(fks[0].columns.contains("AUTHOR_ID"));
    assert!(fks[1].columns.contains("CO_AUTHOR_ID"));
}

#[test]
fn test_aliasing_leaves_original_untouched() {
    let b = Book::aliased("b1");
    assert_eq!(b.qualifier(), "b1");
    assert_eq!(b.table_name(), "BOOK");
    assert_eq!(BOOK.qualifier(), "BOOK");
    assert!(BOOK.as_table().same_meta(b.as_table()));
}

#[test]
fn test_two_aliases_share_metadata_but_not_qualifier() {
    let b1 = Book::aliased("b1");
    let b2 = b1.alias_as("b2");
    assert_eq!(b1.qualifier(), "b1");
    assert_eq!(b2.qualifier(), "b2");
    assert!(b1.as_table().same_meta(b2.as_table()));
}

#[test]
fn test_rename_returns_new_instance_with_schema_kept() {
    let renamed = BOOK.rename("BOOK_ARCHIVE");
    assert_eq!(renamed.table_name(), "BOOK_ARCHIVE");
    assert_eq!(renamed.schema_name(), Some("PUBLIC"));
    // Keys and columns still come from the shared metadata.
    assert_eq!(renamed.primary_key().name, "PK_T_BOOK");
    assert_eq!(BOOK.table_name(), "BOOK");
}

#[test]
fn test_foreign_key_navigation_is_memoized() {
    let book = Book::new();
    let first = book.fk_t_book_author_id();
    let second = book.fk_t_book_author_id();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn test_two_foreign_keys_yield_distinct_path_instances() {
    let book = Book::new();
    let author = book.fk_t_book_author_id();
    let co_author = book.fk_t_book_co_author_id();

    assert!(!std::ptr::eq(author, co_author));
    assert_eq!(author.qualifier(), "BOOK__fk_t_book_author_id");
    assert_eq!(co_author.qualifier(), "BOOK__fk_t_book_co_author_id");
    assert!(author.as_table().same_meta(co_author.as_table()));
    assert!(author.as_table().same_meta(AUTHOR.as_table()));
}

#[test]
fn test_path_instance_records_its_origin() {
    let book = Book::aliased("b");
    let author = book.fk_t_book_author_id();
    let origin = author.as_table().origin().expect("path instance origin");
    assert_eq!(origin.child, "b");
    assert_eq!(origin.foreign_key, "FK_T_BOOK_AUTHOR_ID");
    assert_eq!(author.qualifier(), "b__fk_t_book_author_id");
}

#[test]
fn test_navigation_from_aliased_instances_is_independent() {
    let b1 = Book::aliased("b1");
    let b2 = Book::aliased("b2");
    assert_eq!(
        b1.fk_t_book_author_id().qualifier(),
        "b1__fk_t_book_author_id"
    );
    assert_eq!(
        b2.fk_t_book_author_id().qualifier(),
        "b2__fk_t_book_author_id"
    );
}

#[test]
fn test_require_column_reports_unknown_columns() {
    let err = BOOK
        .as_table()
        .meta()
        .require_column("SUBTITLE")
        .unwrap_err();
    match err {
        SchemaError::UnknownColumn { table, column } => {
            assert_eq!(table, "BOOK");
            assert_eq!(column, "SUBTITLE");
        }
        other => panic!("expected UnknownColumn, got {other}"),
    }
}

#[test]
fn test_snapshot_detects_drift() {
    let descriptor = TableSnapshot::of(BOOK.as_table().meta());

    let mut live = descriptor.clone();
    live.columns[4].sql_type = "varchar(255)".to_string();
    live.columns[1].nullable = true;

    let err = descriptor.verify_matches(&live).unwrap_err();
    match err {
        SchemaError::Drift { table, differences } => {
            assert_eq!(table, "BOOK");
            assert_eq!(differences.len(), 2);
        }
        other => panic!("expected Drift, got {other}"),
    }

    assert!(descriptor.verify_matches(&descriptor.clone()).is_ok());
}

#[test]
fn test_snapshot_json_round_trip() {
    let snapshot = TableSnapshot::of(BOOK.as_table().meta());
    let json = serde_json::to_string(&snapshot).unwrap();
    let restored: TableSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(snapshot, restored);
}

#[test]
fn test_author_descriptor_surface() {
    assert_eq!(AUTHOR.table_name(), "AUTHOR");
    assert_eq!(AUTHOR.schema_name(), Some("PUBLIC"));
    assert_eq!(AUTHOR.columns().len(), 6);
    assert!(AUTHOR.references().is_empty());
    assert_eq!(AUTHOR.primary_key().name, keys::PK_T_AUTHOR.name);
}
