//! Relation definitions and the path-alias resolver.

use crate::key::ForeignKeyDef;
use crate::table::Table;
use sea_query::Condition;

/// Type of relationship between two tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationType {
    /// One-to-one relationship.
    HasOne,
    /// One-to-many relationship.
    HasMany,
    /// Many-to-one relationship (the foreign key lives on this side).
    BelongsTo,
}

/// A relationship between two concrete table instances.
///
/// `from` is the instance owning the foreign key columns, `to` the
/// referenced instance. Both carry their own aliases, so the rendered join
/// condition stays correct when the same table appears twice in a query.
#[derive(Debug, Clone)]
pub struct RelationDef {
    pub rel_type: RelationType,
    pub from: Table,
    pub to: Table,
    pub foreign_key: ForeignKeyDef,
}

impl RelationDef {
    /// A `BelongsTo` relation following `fk` from `child` to `parent`.
    pub fn belongs_to(child: &Table, parent: &Table, fk: &ForeignKeyDef) -> Self {
        Self {
            rel_type: RelationType::BelongsTo,
            from: child.clone(),
            to: parent.clone(),
            foreign_key: fk.clone(),
        }
    }

    /// Reverse the relation (parent side sees `HasMany`, child side
    /// `BelongsTo`; `HasOne` is symmetric).
    pub fn rev(self) -> Self {
        let rel_type = match self.rel_type {
            RelationType::BelongsTo => RelationType::HasMany,
            RelationType::HasMany => RelationType::BelongsTo,
            RelationType::HasOne => RelationType::HasOne,
        };
        Self {
            rel_type,
            from: self.to,
            to: self.from,
            foreign_key: self.foreign_key,
        }
    }

    /// Join condition between the two instances.
    pub fn condition(&self) -> Condition {
        match self.rel_type {
            // Foreign key columns sit on the `from` side.
            RelationType::BelongsTo => self
                .foreign_key
                .join_condition(self.from.qualifier(), self.to.qualifier()),
            // Reversed: foreign key columns sit on the `to` side.
            RelationType::HasMany | RelationType::HasOne => self
                .foreign_key
                .join_condition(self.to.qualifier(), self.from.qualifier()),
        }
    }
}

impl From<RelationDef> for Condition {
    fn from(rel: RelationDef) -> Condition {
        rel.condition()
    }
}

/// Deterministic alias for a path instance: the parent table reached from
/// `child` through `fk`.
///
/// Unlike a caller-supplied alias this must be reproducible, unique per
/// foreign key, and readable in rendered SQL, so it combines the child's
/// qualifier with the lowercased constraint name.
pub fn path_alias(child: &Table, fk: &ForeignKeyDef) -> String {
    format!("{}__{}", child.qualifier(), fk.name.to_lowercase())
}
