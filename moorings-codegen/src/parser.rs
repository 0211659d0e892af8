//! Input parsing and validation for catalog definitions

use crate::catalog::{CatalogDefinition, TableDefinition};
use crate::error::CodegenError;
use crate::resolver;
use std::fs;
use std::path::Path;

pub fn parse_catalog_from_file(path: &Path) -> anyhow::Result<CatalogDefinition> {
    let content = fs::read_to_string(path)?;
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");

    let catalog = match ext {
        "toml" => parse_toml(&content)?,
        "json" => parse_json(&content)?,
        _ => {
            // Try to detect format from content
            if content.trim_start().starts_with('{') {
                parse_json(&content)?
            } else if content.contains('=') {
                parse_toml(&content)?
            } else {
                anyhow::bail!("Unknown file format. Supported: .toml, .json")
            }
        }
    };

    validate(&catalog)?;
    Ok(catalog)
}

fn parse_toml(content: &str) -> anyhow::Result<CatalogDefinition> {
    toml::from_str(content).map_err(|e| CodegenError::Parse(e.to_string()).into())
}

fn parse_json(content: &str) -> anyhow::Result<CatalogDefinition> {
    serde_json::from_str(content).map_err(|e| CodegenError::Parse(e.to_string()).into())
}

fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Validate a parsed catalog before any code is generated.
///
/// Rejects duplicate names, unknown types, keys over missing columns,
/// identity columns outside the primary key, and foreign keys whose
/// column lists do not line up with the referenced key.
pub fn validate(catalog: &CatalogDefinition) -> Result<(), CodegenError> {
    if !is_valid_identifier(&catalog.schema) {
        return Err(CodegenError::Validation(format!(
            "schema name '{}' is not a valid identifier",
            catalog.schema
        )));
    }

    for (i, table) in catalog.tables.iter().enumerate() {
        if catalog.tables[..i].iter().any(|t| t.name == table.name) {
            return Err(CodegenError::Validation(format!(
                "duplicate table '{}'",
                table.name
            )));
        }
        validate_table(catalog, table)?;
    }

    // Every constraint becomes a static in the single keys module,
    // so names must be unique across the whole catalog.
    let mut seen_constraints: Vec<&str> = Vec::new();
    for table in &catalog.tables {
        let names = std::iter::once(table.primary_key.name.as_str())
            .chain(table.foreign_keys.iter().map(|fk| fk.name.as_str()));
        for name in names {
            if seen_constraints.contains(&name) {
                return Err(CodegenError::Validation(format!(
                    "duplicate constraint name '{name}'"
                )));
            }
            seen_constraints.push(name);
        }
    }

    Ok(())
}

fn validate_table(catalog: &CatalogDefinition, table: &TableDefinition) -> Result<(), CodegenError> {
    let table_name = &table.name;
    if !is_valid_identifier(table_name) {
        return Err(CodegenError::Validation(format!(
            "table name '{table_name}' is not a valid identifier"
        )));
    }
    if table_name.eq_ignore_ascii_case("keys") {
        return Err(CodegenError::Validation(format!(
            "table name '{table_name}' collides with the generated keys module"
        )));
    }

    if table.columns.is_empty() {
        return Err(CodegenError::Validation(format!(
            "table '{table_name}' has no columns"
        )));
    }

    let mut identity_count = 0;
    for (i, column) in table.columns.iter().enumerate() {
        if !is_valid_identifier(&column.name) {
            return Err(CodegenError::Validation(format!(
                "column name '{}' in table '{table_name}' is not a valid identifier",
                column.name
            )));
        }
        if table.columns[..i].iter().any(|c| c.name == column.name) {
            return Err(CodegenError::Validation(format!(
                "duplicate column '{}' in table '{table_name}'",
                column.name
            )));
        }
        if !resolver::is_known_type(&column.type_str) {
            return Err(CodegenError::Validation(format!(
                "column '{}.{}' has unknown type '{}'",
                table_name, column.name, column.type_str
            )));
        }
        if column.identity {
            identity_count += 1;
            if column.nullable {
                return Err(CodegenError::Validation(format!(
                    "identity column '{}.{}' cannot be nullable",
                    table_name, column.name
                )));
            }
            if !table.primary_key.columns.contains(&column.name) {
                return Err(CodegenError::Validation(format!(
                    "identity column '{}.{}' is not part of the primary key",
                    table_name, column.name
                )));
            }
        }
    }

    if identity_count > 1 {
        return Err(CodegenError::Validation(format!(
            "table '{table_name}' has more than one identity column"
        )));
    }

    if !is_valid_identifier(&table.primary_key.name) {
        return Err(CodegenError::Validation(format!(
            "primary key name '{}' on table '{table_name}' is not a valid identifier",
            table.primary_key.name
        )));
    }
    if table.primary_key.columns.is_empty() {
        return Err(CodegenError::Validation(format!(
            "primary key '{}' on table '{table_name}' has no columns",
            table.primary_key.name
        )));
    }
    for pk_col in &table.primary_key.columns {
        if table.column(pk_col).is_none() {
            return Err(CodegenError::Validation(format!(
                "primary key '{}' names missing column '{table_name}.{pk_col}'",
                table.primary_key.name
            )));
        }
    }

    for fk in &table.foreign_keys {
        if !is_valid_identifier(&fk.name) {
            return Err(CodegenError::Validation(format!(
                "foreign key name '{}' on table '{table_name}' is not a valid identifier",
                fk.name
            )));
        }
        for fk_col in &fk.columns {
            if table.column(fk_col).is_none() {
                return Err(CodegenError::Validation(format!(
                    "foreign key '{}' names missing column '{table_name}.{fk_col}'",
                    fk.name
                )));
            }
        }
        let Some(target) = catalog.table(&fk.references_table) else {
            return Err(CodegenError::Validation(format!(
                "foreign key '{}' references unknown table '{}'",
                fk.name, fk.references_table
            )));
        };
        for ref_col in &fk.references_columns {
            if target.column(ref_col).is_none() {
                return Err(CodegenError::Validation(format!(
                    "foreign key '{}' references missing column '{}.{ref_col}'",
                    fk.name, fk.references_table
                )));
            }
        }
        if fk.columns.len() != fk.references_columns.len() {
            return Err(CodegenError::Validation(format!(
                "foreign key '{}' has {} columns but references {}",
                fk.name,
                fk.columns.len(),
                fk.references_columns.len()
            )));
        }
        if fk.columns.is_empty() {
            return Err(CodegenError::Validation(format!(
                "foreign key '{}' has no columns",
                fk.name
            )));
        }
    }

    Ok(())
}
