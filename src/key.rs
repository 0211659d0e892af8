//! Key metadata: primary keys and foreign keys.
//!
//! Keys may span one or many columns. `KeyColumns` represents the ordered
//! column set; `ForeignKeyDef` pairs a child column set with the referenced
//! parent column set and can render the join condition between two concrete
//! table instances.

use sea_query::{Condition, Expr, ExprTrait, IntoIden};

/// Ordered set of column names forming a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyColumns {
    /// Single-column key.
    Unary(&'static str),
    /// Two-column composite key.
    Binary(&'static str, &'static str),
    /// Three or more columns.
    Many(Vec<&'static str>),
}

impl KeyColumns {
    /// Number of columns in this key.
    pub fn arity(&self) -> usize {
        match self {
            Self::Unary(_) => 1,
            Self::Binary(_, _) => 2,
            Self::Many(cols) => cols.len(),
        }
    }

    pub fn iter(&self) -> KeyColumnsIter<'_> {
        KeyColumnsIter {
            columns: self,
            index: 0,
        }
    }

    pub fn contains(&self, column: &str) -> bool {
        self.iter().any(|c| c == column)
    }
}

/// Borrowing iterator over the column names of a `KeyColumns`.
#[derive(Debug)]
pub struct KeyColumnsIter<'a> {
    columns: &'a KeyColumns,
    index: usize,
}

impl<'a> Iterator for KeyColumnsIter<'a> {
    type Item = &'static str;

    fn next(&mut self) -> Option<Self::Item> {
        let result = match self.columns {
            KeyColumns::Unary(a) => match self.index {
                0 => Some(*a),
                _ => None,
            },
            KeyColumns::Binary(a, b) => match self.index {
                0 => Some(*a),
                1 => Some(*b),
                _ => None,
            },
            KeyColumns::Many(cols) => cols.get(self.index).copied(),
        };
        if result.is_some() {
            self.index += 1;
        }
        result
    }
}

/// Primary key constraint of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryKeyDef {
    /// Constraint name as declared in the database (e.g. `PK_T_BOOK`).
    pub name: &'static str,
    pub columns: KeyColumns,
}

impl PrimaryKeyDef {
    pub fn new(name: &'static str, columns: KeyColumns) -> Self {
        crate::ident::require_identifier("primary key", name);
        Self { name, columns }
    }
}

/// Foreign key constraint from a child table into a parent table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyDef {
    /// Constraint name as declared in the database (e.g. `FK_T_BOOK_AUTHOR_ID`).
    pub name: &'static str,
    /// Child (owning) table name.
    pub table: &'static str,
    /// Foreign key column(s) in the child table.
    pub columns: KeyColumns,
    /// Parent (referenced) table name.
    pub ref_table: &'static str,
    /// Referenced key column(s) in the parent table.
    pub ref_columns: KeyColumns,
}

impl ForeignKeyDef {
    /// # Panics
    ///
    /// Panics if the child and parent column sets have different arities.
    pub fn new(
        name: &'static str,
        table: &'static str,
        columns: KeyColumns,
        ref_table: &'static str,
        ref_columns: KeyColumns,
    ) -> Self {
        crate::ident::require_identifier("foreign key", name);
        assert_eq!(
            columns.arity(),
            ref_columns.arity(),
            "foreign key and referenced key must have matching arity"
        );
        Self {
            name,
            table,
            columns,
            ref_table,
            ref_columns,
        }
    }

    /// Build the join condition `child.fk_col = parent.pk_col` (one equality
    /// per column pair), with both sides qualified by the identifiers of the
    /// concrete table instances taking part in the query.
    pub fn join_condition(&self, child_qualifier: &str, parent_qualifier: &str) -> Condition {
        let mut condition = Condition::all();
        for (fk_col, pk_col) in self.columns.iter().zip(self.ref_columns.iter()) {
            let child = (child_qualifier.to_string().into_iden(), fk_col.into_iden());
            let parent = (parent_qualifier.to_string().into_iden(), pk_col.into_iden());
            condition = condition.add(Expr::col(child).eq(Expr::col(parent)));
        }
        condition
    }
}
