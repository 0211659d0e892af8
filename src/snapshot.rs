//! Serializable schema snapshots.
//!
//! Generated descriptors are only valid while they match the live database.
//! A snapshot is a flat, serializable summary of one table's layout; taking
//! one from the descriptor and one from the live catalog and diffing them
//! surfaces schema drift before it turns into opaque query failures.

use crate::error::SchemaError;
use crate::table::TableMeta;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSnapshot {
    pub name: String,
    /// Canonical type spelling (`SqlType` display form).
    pub sql_type: String,
    pub nullable: bool,
    pub identity: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKeySnapshot {
    pub name: String,
    pub columns: Vec<String>,
    pub ref_table: String,
    pub ref_columns: Vec<String>,
}

/// Flat summary of one table's layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub schema: Option<String>,
    pub table: String,
    pub columns: Vec<ColumnSnapshot>,
    pub primary_key: Vec<String>,
    pub foreign_keys: Vec<ForeignKeySnapshot>,
}

impl TableSnapshot {
    pub fn of(meta: &TableMeta) -> Self {
        Self {
            schema: meta.schema.map(str::to_string),
            table: meta.name.to_string(),
            columns: meta
                .columns
                .iter()
                .map(|c| ColumnSnapshot {
                    name: c.name.to_string(),
                    sql_type: c.sql_type.to_string(),
                    nullable: c.nullable,
                    identity: c.identity,
                })
                .collect(),
            primary_key: meta.primary_key.columns.iter().map(str::to_string).collect(),
            foreign_keys: meta
                .foreign_keys
                .iter()
                .map(|fk| ForeignKeySnapshot {
                    name: fk.name.to_string(),
                    columns: fk.columns.iter().map(str::to_string).collect(),
                    ref_table: fk.ref_table.to_string(),
                    ref_columns: fk.ref_columns.iter().map(str::to_string).collect(),
                })
                .collect(),
        }
    }

    /// Compare against a snapshot of the live table; any difference is
    /// reported as drift, column by column.
    pub fn verify_matches(&self, live: &TableSnapshot) -> Result<(), SchemaError> {
        let mut differences = Vec::new();

        if self.table != live.table {
            differences.push(format!("table name: {} != {}", self.table, live.table));
        }
        if self.schema != live.schema {
            differences.push(format!("schema: {:?} != {:?}", self.schema, live.schema));
        }

        for col in &self.columns {
            match live.columns.iter().find(|c| c.name == col.name) {
                None => differences.push(format!("column {} missing in live table", col.name)),
                Some(live_col) if live_col != col => differences.push(format!(
                    "column {}: {} {}null != {} {}null",
                    col.name,
                    col.sql_type,
                    if col.nullable { "" } else { "not " },
                    live_col.sql_type,
                    if live_col.nullable { "" } else { "not " },
                )),
                Some(_) => {}
            }
        }
        for live_col in &live.columns {
            if !self.columns.iter().any(|c| c.name == live_col.name) {
                differences.push(format!("live table has extra column {}", live_col.name));
            }
        }

        // Columns are ordinal in the catalog, so the same set in a
        // different order is still drift.
        let names: Vec<&str> = self.columns.iter().map(|c| c.name.as_str()).collect();
        let live_names: Vec<&str> = live.columns.iter().map(|c| c.name.as_str()).collect();
        if names != live_names
            && names.len() == live_names.len()
            && names.iter().all(|n| live_names.contains(n))
        {
            differences.push(format!(
                "column order: {} != {}",
                names.join(", "),
                live_names.join(", ")
            ));
        }

        if self.primary_key != live.primary_key {
            differences.push(format!(
                "primary key: {:?} != {:?}",
                self.primary_key, live.primary_key
            ));
        }
        if self.foreign_keys != live.foreign_keys {
            differences.push("foreign keys differ".to_string());
        }

        if differences.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::Drift {
                table: self.table.clone(),
                differences,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::{ColumnDef, SqlType};
    use crate::key::{KeyColumns, PrimaryKeyDef};

    fn meta() -> std::sync::Arc<TableMeta> {
        TableMeta::new(
            Some("PUBLIC"),
            "SAMPLE",
            vec![
                ColumnDef::new("ID", SqlType::Integer).identity(),
                ColumnDef::new("TITLE", SqlType::Varchar(400)),
            ],
            PrimaryKeyDef::new("PK_SAMPLE", KeyColumns::Unary("ID")),
            vec![],
        )
    }

    #[test]
    fn test_snapshot_round_trips_through_json() {
        let snap = TableSnapshot::of(&meta());
        let json = serde_json::to_string(&snap).expect("snapshot serializes");
        let back: TableSnapshot = serde_json::from_str(&json).expect("snapshot deserializes");
        assert_eq!(snap, back);
    }

    #[test]
    fn test_identical_snapshots_verify() {
        let snap = TableSnapshot::of(&meta());
        assert!(snap.verify_matches(&snap.clone()).is_ok());
    }

    #[test]
    fn test_type_drift_is_reported() {
        let snap = TableSnapshot::of(&meta());
        let mut live = snap.clone();
        live.columns[1].sql_type = "varchar(200)".to_string();
        let err = snap.verify_matches(&live).unwrap_err();
        match err {
            SchemaError::Drift { table, differences } => {
                assert_eq!(table, "SAMPLE");
                assert!(differences.iter().any(|d| d.contains("TITLE")));
            }
            other => panic!("expected drift, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_and_extra_columns_reported() {
        let snap = TableSnapshot::of(&meta());
        let mut live = snap.clone();
        live.columns.remove(1);
        live.columns.push(ColumnSnapshot {
            name: "ISBN".to_string(),
            sql_type: "varchar(13)".to_string(),
            nullable: true,
            identity: false,
        });
        let err = snap.verify_matches(&live).unwrap_err();
        match err {
            SchemaError::Drift { differences, .. } => {
                assert!(differences.iter().any(|d| d.contains("TITLE missing")));
                assert!(differences.iter().any(|d| d.contains("extra column ISBN")));
            }
            other => panic!("expected drift, got {other:?}"),
        }
    }

    #[test]
    fn test_reordered_columns_are_drift() {
        let snap = TableSnapshot::of(&meta());
        let mut live = snap.clone();
        live.columns.swap(0, 1);
        let err = snap.verify_matches(&live).unwrap_err();
        match err {
            SchemaError::Drift { differences, .. } => {
                assert!(differences.iter().any(|d| d.contains("column order")));
            }
            other => panic!("expected drift, got {other:?}"),
        }
    }
}
