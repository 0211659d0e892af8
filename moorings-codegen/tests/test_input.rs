//! End-to-end tests over the shipped PUBLIC catalog definition

use moorings_codegen::parser::parse_catalog_from_file;
use moorings_codegen::TableWriter;
use std::io::Write;
use std::path::PathBuf;

fn public_catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("input/public.toml")
}

#[test]
fn test_public_catalog_parses_and_validates() {
    let catalog = parse_catalog_from_file(&public_catalog_path()).unwrap();

    assert_eq!(catalog.schema, "PUBLIC");
    assert_eq!(catalog.tables.len(), 2);

    let book = catalog.table("BOOK").unwrap();
    assert_eq!(book.columns.len(), 11);
    assert_eq!(book.primary_key.columns, vec!["ID".to_string()]);
    assert_eq!(book.foreign_keys.len(), 2);
    assert_eq!(book.foreign_keys[0].references_table, "AUTHOR");

    let co_author_id = book.column("CO_AUTHOR_ID").unwrap();
    assert!(co_author_id.nullable);
    let author_id = book.column("AUTHOR_ID").unwrap();
    assert!(!author_id.nullable);

    let identity: Vec<_> = book.columns.iter().filter(|c| c.identity).collect();
    assert_eq!(identity.len(), 1);
    assert_eq!(identity[0].name, "ID");
}

#[test]
fn test_public_catalog_generates_every_module() {
    let catalog = parse_catalog_from_file(&public_catalog_path()).unwrap();
    let writer = TableWriter::with_crate_path("crate").unwrap();

    writer.generate_root_module(&catalog).unwrap();
    writer.generate_keys_module(&catalog).unwrap();
    for table in &catalog.tables {
        writer.generate_table_module(&catalog, table).unwrap();
    }
}

#[test]
fn test_format_detection_without_extension() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "schema": "PUBLIC",
            "tables": [{{
                "name": "LANGUAGE",
                "columns": [{{ "name": "ID", "type": "integer", "identity": true }}],
                "primary_key": {{ "name": "PK_T_LANGUAGE", "columns": ["ID"] }}
            }}]
        }}"#
    )
    .unwrap();

    let catalog = parse_catalog_from_file(file.path()).unwrap();
    assert_eq!(catalog.tables[0].name, "LANGUAGE");
}

#[test]
fn test_invalid_catalog_is_rejected_at_parse_time() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
schema = "PUBLIC"

[[tables]]
name = "BOOK"

[[tables.columns]]
name = "ID"
type = "integer"

[tables.primary_key]
name = "PK_T_BOOK"
columns = ["MISSING"]
"#
    )
    .unwrap();

    let err = parse_catalog_from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("missing column 'BOOK.MISSING'"));
}
