//! Table instances: default references, aliases, and path instances.

use crate::column::TypedColumn;
use crate::key::ForeignKeyDef;
use crate::relation::path_alias;
use crate::table::meta::TableMeta;
use sea_query::{IntoIden, TableRef};
use std::sync::Arc;

/// How a path instance was reached: through which foreign key, from which
/// child instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathOrigin {
    /// Qualifier of the child instance the navigation started from.
    pub child: String,
    /// Constraint name of the foreign key that was followed.
    pub foreign_key: &'static str,
}

/// One reference to a table inside a query.
///
/// All instances of a table share the same `Arc<TableMeta>`; what varies is
/// the alias, an optional rename, and the path provenance. Every operation
/// returns a fresh instance, the receiver is never mutated.
#[derive(Debug, Clone)]
pub struct Table {
    meta: Arc<TableMeta>,
    /// Set by `rename`; replaces the metadata name in rendered SQL.
    name_override: Option<String>,
    alias: Option<String>,
    origin: Option<PathOrigin>,
}

impl Table {
    /// The default (unaliased) reference instance.
    pub fn base(meta: Arc<TableMeta>) -> Self {
        Self {
            meta,
            name_override: None,
            alias: None,
            origin: None,
        }
    }

    /// An aliased reference, for self-joins and repeated use of one table
    /// in a single query.
    pub fn aliased(meta: Arc<TableMeta>, alias: impl Into<String>) -> Self {
        Self {
            meta,
            name_override: None,
            alias: Some(alias.into()),
            origin: None,
        }
    }

    /// A path instance: this table reached from `child` through `fk`.
    /// The alias is derived deterministically, so following two different
    /// foreign keys to the same parent yields two distinct qualifiers.
    pub fn path(meta: Arc<TableMeta>, child: &Table, fk: &ForeignKeyDef) -> Self {
        let alias = path_alias(child, fk);
        log::debug!(
            "path instance {} -> {} via {} (alias {alias})",
            child.qualifier(),
            meta.name,
            fk.name
        );
        Self {
            meta,
            name_override: None,
            alias: Some(alias),
            origin: Some(PathOrigin {
                child: child.qualifier().to_string(),
                foreign_key: fk.name,
            }),
        }
    }

    /// A new instance of the same table under a different alias.
    pub fn alias_as(&self, alias: impl Into<String>) -> Self {
        Self {
            meta: Arc::clone(&self.meta),
            name_override: self.name_override.clone(),
            alias: Some(alias.into()),
            origin: None,
        }
    }

    /// A new instance bound to a different table name. The schema
    /// association is kept; alias and path provenance are dropped.
    pub fn rename(&self, name: impl Into<String>) -> Self {
        Self {
            meta: Arc::clone(&self.meta),
            name_override: Some(name.into()),
            alias: None,
            origin: None,
        }
    }

    pub fn meta(&self) -> &Arc<TableMeta> {
        &self.meta
    }

    /// Effective table name (reflects `rename`).
    pub fn name(&self) -> &str {
        self.name_override.as_deref().unwrap_or(self.meta.name)
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Path provenance, when this instance was created by foreign-key
    /// navigation.
    pub fn origin(&self) -> Option<&PathOrigin> {
        self.origin.as_ref()
    }

    /// Identifier qualifying this instance's columns: the alias when
    /// aliased, the table name otherwise.
    pub fn qualifier(&self) -> &str {
        self.alias.as_deref().unwrap_or_else(|| self.name())
    }

    /// Whether two instances describe the same underlying table (share the
    /// metadata singleton), regardless of alias.
    pub fn same_meta(&self, other: &Table) -> bool {
        Arc::ptr_eq(&self.meta, &other.meta)
    }

    /// Schema-qualified, alias-aware table reference for statement building.
    pub fn table_ref(&self) -> TableRef {
        let name = sea_query::TableName(
            self.meta.schema.map(sea_query::SchemaName::from),
            self.name().to_string().into_iden(),
        );
        TableRef::Table(name, self.alias.as_deref().map(|a| a.to_string().into_iden()))
    }

    /// A typed column handle qualified by this instance.
    ///
    /// Generated accessors supply the column name and value type; the name
    /// is trusted to exist in the metadata.
    pub fn typed<T>(&self, column: &'static str) -> TypedColumn<T> {
        debug_assert!(
            self.meta.column(column).is_some(),
            "table {} has no column {column}",
            self.meta.name
        );
        TypedColumn::new(self.qualifier().to_string(), column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::{ColumnDef, SqlType};
    use crate::key::{KeyColumns, PrimaryKeyDef};
    use sea_query::{PostgresQueryBuilder, Query};

    fn parent_meta() -> Arc<TableMeta> {
        TableMeta::new(
            Some("PUBLIC"),
            "PARENT",
            vec![ColumnDef::new("ID", SqlType::Integer).identity()],
            PrimaryKeyDef::new("PK_PARENT", KeyColumns::Unary("ID")),
            vec![],
        )
    }

    fn child_meta() -> Arc<TableMeta> {
        TableMeta::new(
            Some("PUBLIC"),
            "CHILD",
            vec![
                ColumnDef::new("ID", SqlType::Integer).identity(),
                ColumnDef::new("PARENT_ID", SqlType::Integer),
            ],
            PrimaryKeyDef::new("PK_CHILD", KeyColumns::Unary("ID")),
            vec![ForeignKeyDef::new(
                "FK_CHILD_PARENT_ID",
                "CHILD",
                KeyColumns::Unary("PARENT_ID"),
                "PARENT",
                KeyColumns::Unary("ID"),
            )],
        )
    }

    #[test]
    fn test_base_qualifier_is_table_name() {
        let t = Table::base(child_meta());
        assert_eq!(t.qualifier(), "CHILD");
        assert_eq!(t.alias(), None);
    }

    #[test]
    fn test_alias_as_leaves_original_untouched() {
        let t = Table::base(child_meta());
        let aliased = t.alias_as("c1");
        assert_eq!(aliased.qualifier(), "c1");
        assert_eq!(t.qualifier(), "CHILD");
        assert!(t.same_meta(&aliased));
    }

    #[test]
    fn test_two_aliases_are_independent() {
        let t = Table::base(child_meta());
        let a = t.alias_as("c1");
        let b = t.alias_as("c2");
        assert_ne!(a.qualifier(), b.qualifier());
        assert!(a.same_meta(&b));
    }

    #[test]
    fn test_rename_changes_name_keeps_schema() {
        let t = Table::base(child_meta());
        let renamed = t.rename("CHILD_ARCHIVE");
        assert_eq!(renamed.name(), "CHILD_ARCHIVE");
        assert_eq!(renamed.qualifier(), "CHILD_ARCHIVE");
        assert_eq!(renamed.meta().schema, Some("PUBLIC"));
        assert_eq!(t.name(), "CHILD");
    }

    #[test]
    fn test_path_instance_records_origin() {
        let child = Table::base(child_meta());
        let fk = child.meta().foreign_keys[0].clone();
        let parent = Table::path(parent_meta(), &child, &fk);
        let origin = parent.origin().expect("path instance has an origin");
        assert_eq!(origin.child, "CHILD");
        assert_eq!(origin.foreign_key, "FK_CHILD_PARENT_ID");
        assert_eq!(parent.qualifier(), "CHILD__fk_child_parent_id");
    }

    #[test]
    fn test_path_from_aliased_child_uses_child_alias() {
        let child = Table::base(child_meta()).alias_as("c");
        let fk = child.meta().foreign_keys[0].clone();
        let parent = Table::path(parent_meta(), &child, &fk);
        assert_eq!(parent.qualifier(), "c__fk_child_parent_id");
    }

    #[test]
    fn test_table_ref_renders_schema_and_alias() {
        let t = Table::base(child_meta()).alias_as("c1");
        let sql = Query::select()
            .column(sea_query::Asterisk)
            .from(t.table_ref())
            .to_string(PostgresQueryBuilder);
        assert!(sql.contains("\"PUBLIC\".\"CHILD\""), "sql: {sql}");
        assert!(sql.contains("\"c1\""), "sql: {sql}");
    }

    #[test]
    fn test_typed_column_uses_qualifier() {
        let t = Table::base(child_meta()).alias_as("c1");
        let col: TypedColumn<i32> = t.typed("PARENT_ID");
        let sql = Query::select()
            .expr(col.is_null())
            .to_string(PostgresQueryBuilder);
        assert!(sql.contains("\"c1\".\"PARENT_ID\""), "sql: {sql}");
    }
}
