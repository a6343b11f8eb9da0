use crate::model::{
    entity::EntityModel,
    field::{Direction, FieldModel},
};
use dashmap::{DashMap, mapref::entry::Entry};
use once_cell::sync::Lazy;
use std::{collections::HashMap, sync::Arc};
use thiserror::Error as ThisError;
use tracing::debug;

///
/// ResolveError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ResolveError {
    #[error(
        "duplicate {direction} wire name `{wire}` on {path}: declared by `{first}` and `{second}`"
    )]
    DuplicateWireName {
        path: &'static str,
        direction: Direction,
        wire: &'static str,
        first: &'static str,
        second: &'static str,
    },
}

///
/// TableEntry
///

#[derive(Clone, Copy, Debug)]
pub struct TableEntry {
    /// External name in the table's direction.
    pub wire: &'static str,
    pub field: &'static FieldModel,
}

///
/// MappingTable
///
/// Resolved wire-name lookup for one (entity model, direction) pair.
/// Entries preserve field declaration order; immutable once built.
///

#[derive(Debug)]
pub struct MappingTable {
    path: &'static str,
    direction: Direction,
    entries: Vec<TableEntry>,
    index: HashMap<&'static str, usize>,
}

// Tables are deterministic per (path, direction); the entry API holds the
// shard lock during construction, so each key is computed at most once.
// Failed builds are not cached.
static TABLES: Lazy<DashMap<(&'static str, Direction), Arc<MappingTable>>> =
    Lazy::new(DashMap::new);

impl MappingTable {
    /// Resolve the cached table for (model, direction).
    pub fn resolve(
        model: &'static EntityModel,
        direction: Direction,
    ) -> Result<Arc<Self>, ResolveError> {
        match TABLES.entry((model.path, direction)) {
            Entry::Occupied(occupied) => Ok(occupied.get().clone()),
            Entry::Vacant(vacant) => {
                let table = Arc::new(Self::build(model, direction)?);
                Ok(vacant.insert(table).clone())
            }
        }
    }

    /// Build a table without touching the cache.
    pub fn build(model: &'static EntityModel, direction: Direction) -> Result<Self, ResolveError> {
        let mut entries: Vec<TableEntry> = Vec::with_capacity(model.fields.len());
        let mut index = HashMap::with_capacity(model.fields.len());

        for field in model.fields {
            let Some(wire) = field.wire_name(direction) else {
                continue;
            };

            if let Some(&prior) = index.get(wire) {
                return Err(ResolveError::DuplicateWireName {
                    path: model.path,
                    direction,
                    wire,
                    first: entries[prior].field.name,
                    second: field.name,
                });
            }

            index.insert(wire, entries.len());
            entries.push(TableEntry { wire, field });
        }

        debug!(
            entity = model.entity_name,
            path = model.path,
            direction = %direction,
            fields = entries.len(),
            "mapping table built"
        );

        Ok(Self {
            path: model.path,
            direction,
            entries,
            index,
        })
    }

    /// Entry for `wire`, if the name is mapped in this table's direction.
    #[must_use]
    pub fn lookup(&self, wire: &str) -> Option<&TableEntry> {
        self.index.get(wire).map(|&slot| &self.entries[slot])
    }

    /// Entries in field declaration order.
    #[must_use]
    pub fn entries(&self) -> &[TableEntry] {
        self.entries.as_slice()
    }

    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub const fn path(&self) -> &'static str {
        self.path
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

///
/// TESTS
///
