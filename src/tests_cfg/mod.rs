//! Reference `PUBLIC` schema used by the documentation and the test-suite.
//!
//! Generated by `moorings-codegen` from `moorings-codegen/input/public.toml`
//! with `--crate-path crate`; regenerate instead of editing.

pub mod author;
pub mod book;
pub mod keys;

use crate::SchemaDef;

/// The `PUBLIC` schema.
pub static PUBLIC: SchemaDef = SchemaDef::new("PUBLIC");
