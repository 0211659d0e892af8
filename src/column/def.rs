//! Column descriptor metadata.

use crate::column::types::SqlType;

/// Immutable descriptor for one column of a table.
///
/// Instances are constructed by generated code and live inside the owning
/// table's metadata singleton. Nothing here is mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    /// Column name as declared in the database.
    pub name: &'static str,
    pub sql_type: SqlType,
    pub nullable: bool,
    /// Identity (auto-increment) column. Implies `nullable == false` and
    /// membership in the primary key; the codegen validator enforces both.
    pub identity: bool,
    /// Default value expression, verbatim SQL (e.g. `"0"`, `"now()"`).
    pub default_expr: Option<&'static str>,
}

impl ColumnDef {
    /// A non-null column without identity or default. Generated code uses
    /// the builder-style helpers below for everything else.
    pub const fn new(name: &'static str, sql_type: SqlType) -> Self {
        Self {
            name,
            sql_type,
            nullable: false,
            identity: false,
            default_expr: None,
        }
    }

    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub const fn identity(mut self) -> Self {
        self.identity = true;
        self.nullable = false;
        self
    }

    pub const fn default_expr(mut self, expr: &'static str) -> Self {
        self.default_expr = Some(expr);
        self
    }

    /// Render this descriptor as a sea-query `ColumnDef` for DDL statements.
    pub fn to_column_def(&self) -> sea_query::ColumnDef {
        let mut def = sea_query::ColumnDef::new(self.name);
        self.sql_type.apply(&mut def);
        if self.nullable {
            def.null();
        } else {
            def.not_null();
        }
        if self.identity {
            def.auto_increment();
        }
        if let Some(expr) = self.default_expr {
            def.default(sea_query::Expr::cust(expr));
        }
        def
    }
}
