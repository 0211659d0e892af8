//! Catalog definition structures

/// A catalog of tables within one schema, parsed from input.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct CatalogDefinition {
    pub schema: String,
    #[serde(default)]
    pub tables: Vec<TableDefinition>,
}

/// One table within a catalog.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct TableDefinition {
    pub name: String,
    pub columns: Vec<ColumnDefinition>,
    pub primary_key: KeyDefinition,
    #[serde(default)]
    pub foreign_keys: Vec<ForeignKeyDefinition>,
}

/// A column within a table definition.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ColumnDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub type_str: String,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub identity: bool,
    #[serde(default)]
    pub default: Option<String>,
}

/// A named key over one or more columns.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct KeyDefinition {
    pub name: String,
    pub columns: Vec<String>,
}

/// A foreign key from this table to a referenced table.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ForeignKeyDefinition {
    pub name: String,
    pub columns: Vec<String>,
    pub references_table: String,
    pub references_columns: Vec<String>,
}

impl CatalogDefinition {
    /// Create an example catalog for testing
    pub fn example() -> Self {
        Self {
            schema: "PUBLIC".to_string(),
            tables: vec![
                TableDefinition {
                    name: "AUTHOR".to_string(),
                    columns: vec![
                        ColumnDefinition {
                            name: "ID".to_string(),
                            type_str: "integer".to_string(),
                            nullable: false,
                            identity: true,
                            default: None,
                        },
                        ColumnDefinition {
                            name: "LAST_NAME".to_string(),
                            type_str: "varchar(50)".to_string(),
                            nullable: false,
                            identity: false,
                            default: None,
                        },
                    ],
                    primary_key: KeyDefinition {
                        name: "PK_T_AUTHOR".to_string(),
                        columns: vec!["ID".to_string()],
                    },
                    foreign_keys: vec![],
                },
                TableDefinition {
                    name: "BOOK".to_string(),
                    columns: vec![
                        ColumnDefinition {
                            name: "ID".to_string(),
                            type_str: "integer".to_string(),
                            nullable: false,
                            identity: true,
                            default: None,
                        },
                        ColumnDefinition {
                            name: "AUTHOR_ID".to_string(),
                            type_str: "integer".to_string(),
                            nullable: false,
                            identity: false,
                            default: None,
                        },
                        ColumnDefinition {
                            name: "TITLE".to_string(),
                            type_str: "varchar(400)".to_string(),
                            nullable: false,
                            identity: false,
                            default: None,
                        },
                    ],
                    primary_key: KeyDefinition {
                        name: "PK_T_BOOK".to_string(),
                        columns: vec!["ID".to_string()],
                    },
                    foreign_keys: vec![ForeignKeyDefinition {
                        name: "FK_T_BOOK_AUTHOR_ID".to_string(),
                        columns: vec!["AUTHOR_ID".to_string()],
                        references_table: "AUTHOR".to_string(),
                        references_columns: vec!["ID".to_string()],
                    }],
                },
            ],
        }
    }

    /// Look up a table definition by name.
    pub fn table(&self, name: &str) -> Option<&TableDefinition> {
        self.tables.iter().find(|t| t.name == name)
    }
}

impl TableDefinition {
    /// Look up a column definition by name.
    pub fn column(&self, name: &str) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|c| c.name == name)
    }
}
