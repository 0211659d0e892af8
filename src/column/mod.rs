//! Column metadata and typed column handles.
//!
//! `ColumnDef` is the immutable per-column descriptor generated code bakes
//! into table metadata. `TypedColumn<T>` is the handle a query author works
//! with: it knows which table instance (and alias) qualifies it, and its
//! filter operations only accept values of the column's Rust type.

pub mod def;
pub mod typed;
pub mod types;

#[doc(inline)]
pub use def::ColumnDef;
#[doc(inline)]
pub use typed::TypedColumn;
#[doc(inline)]
pub use types::SqlType;
