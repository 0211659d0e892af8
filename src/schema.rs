//! Schema descriptor.

/// A database schema a table belongs to.
///
/// Generated code declares one `SchemaDef` static per schema and passes its
/// name into each table's metadata. The descriptor carries no catalog
/// contents of its own; tables reference it by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SchemaDef {
    pub name: &'static str,
}

impl SchemaDef {
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }
}
