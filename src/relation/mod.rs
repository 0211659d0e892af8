//! Relationships between tables.
//!
//! A relation pairs two concrete table instances with the foreign key that
//! links them and converts into a sea-query `Condition` for JOINs. Path
//! aliases for implicit-join navigation are derived here as well.

pub mod def;

#[doc(inline)]
pub use def::{path_alias, RelationDef, RelationType};
