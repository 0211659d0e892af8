//! Typed column handles for query building.
//!
//! A `TypedColumn<T>` pairs a column identifier with the identifier of the
//! concrete table instance it belongs to (the alias when the instance is
//! aliased, the table name otherwise). Filter operations accept only the
//! column's Rust type `T`, so `book.published_in().eq("1984")` is a compile
//! error while `book.published_in().eq(Some(1984))` builds.

use sea_query::{DynIden, Expr, ExprTrait, IntoIden, Value};
use std::marker::PhantomData;

/// A typed handle to one column of one table instance.
#[derive(Debug, Clone)]
pub struct TypedColumn<T> {
    table: DynIden,
    column: DynIden,
    _value: PhantomData<T>,
}

impl<T> TypedColumn<T> {
    pub fn new<Tb: IntoIden, C: IntoIden>(table: Tb, column: C) -> Self {
        Self {
            table: table.into_iden(),
            column: column.into_iden(),
            _value: PhantomData,
        }
    }

    /// Table-qualified column reference, usable anywhere sea-query accepts
    /// an `IntoColumnRef` (select lists, `order_by`, `group_by`).
    pub fn column_ref(&self) -> (DynIden, DynIden) {
        (self.table.clone(), self.column.clone())
    }

    /// The qualified column as an expression.
    pub fn expr(&self) -> Expr {
        Expr::col(self.column_ref())
    }

    /// Column-to-column equality, for explicit join conditions.
    pub fn eq_column<U>(&self, other: &TypedColumn<U>) -> Expr {
        self.expr().eq(other.expr())
    }

    /// `column IS NULL`
    pub fn is_null(&self) -> Expr {
        self.expr().is_null()
    }

    /// `column IS NOT NULL`
    pub fn is_not_null(&self) -> Expr {
        self.expr().is_not_null()
    }
}

impl<T> TypedColumn<T>
where
    T: Into<Value>,
{
    /// `column = value`
    pub fn eq(&self, value: T) -> Expr {
        self.expr().eq(value)
    }

    /// `column <> value`
    pub fn ne(&self, value: T) -> Expr {
        self.expr().ne(value)
    }

    /// `column > value`
    pub fn gt(&self, value: T) -> Expr {
        self.expr().gt(value)
    }

    /// `column >= value`
    pub fn gte(&self, value: T) -> Expr {
        self.expr().gte(value)
    }

    /// `column < value`
    pub fn lt(&self, value: T) -> Expr {
        self.expr().lt(value)
    }

    /// `column <= value`
    pub fn lte(&self, value: T) -> Expr {
        self.expr().lte(value)
    }

    /// `column BETWEEN start AND end`
    pub fn between(&self, start: T, end: T) -> Expr {
        self.expr().between(start, end)
    }

    /// `column IN (values)`
    pub fn is_in<I>(&self, values: I) -> Expr
    where
        I: IntoIterator<Item = T>,
    {
        self.expr().is_in(values)
    }

    /// `column NOT IN (values)`
    pub fn is_not_in<I>(&self, values: I) -> Expr
    where
        I: IntoIterator<Item = T>,
    {
        self.expr().is_not_in(values)
    }
}

impl TypedColumn<String> {
    /// `column LIKE pattern`
    pub fn like(&self, pattern: &str) -> Expr {
        self.expr().like(pattern)
    }
}

impl TypedColumn<Option<String>> {
    /// `column LIKE pattern`
    pub fn like(&self, pattern: &str) -> Expr {
        self.expr().like(pattern)
    }
}
