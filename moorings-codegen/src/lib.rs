//! Moorings Codegen Library
//!
//! This library generates table descriptor modules (table structs, key
//! statics, typed column accessors) from catalog definitions. It emits
//! actual Rust source files rather than relying on procedural macros, so
//! the generated descriptors are plain code that can be read and reviewed.

pub mod catalog;
pub mod error;
pub mod parser;
pub mod resolver;
pub mod writer;

pub use catalog::{
    CatalogDefinition, ColumnDefinition, ForeignKeyDefinition, KeyDefinition, TableDefinition,
};
pub use error::CodegenError;
pub use writer::TableWriter;
