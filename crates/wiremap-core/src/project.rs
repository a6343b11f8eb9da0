//! Projection: reading typed entities back out as plain structures.
//!
//! The engine walk ([`to_plain`]) resolves the mapping table for the
//! requested direction and reads each mapped field through the entity's
//! `get_field`, in field declaration order. Absent fields are omitted
//! entirely, never emitted as null. Nested entities and collections project
//! with the SAME direction as the parent (unlike hydration, where single
//! nested entities pin to inbound).
//!
//! An entity with nothing to emit projects as the empty-object marker
//! `Plain::Map(vec![])`, so downstream encoding yields `{}` rather than
//! `[]`.

use crate::{
    model::{
        field::Direction,
        table::{MappingTable, ResolveError},
    },
    traits::{EntityValue, FieldValue},
    value::Plain,
};
use thiserror::Error as ThisError;

///
/// ProjectError
///

#[derive(Debug, ThisError)]
pub enum ProjectError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("{path} has no field `{field}` in its dispatch table")]
    UnknownField {
        path: &'static str,
        field: &'static str,
    },
}

impl ProjectError {
    /// Dispatch-table miss; the field model and getter have drifted apart.
    #[must_use]
    pub const fn unknown_field(path: &'static str, field: &'static str) -> Self {
        Self::UnknownField { path, field }
    }
}

/// Project an entity into a plain structure keyed by `direction` wire names.
pub fn to_plain<E: EntityValue>(entity: &E, direction: Direction) -> Result<Plain, ProjectError> {
    let table = MappingTable::resolve(E::MODEL, direction)?;

    let mut out = Vec::with_capacity(table.len());
    for entry in table.entries() {
        if let Some(value) = entity.get_field(entry.field.name, direction)? {
            out.push((entry.wire.to_string(), value));
        }
    }

    Ok(Plain::Map(out))
}

//
// DISPATCH HELPERS
//

/// Emit a scalar field through its `FieldValue` conversion.
pub fn scalar<T: FieldValue>(value: &T) -> Result<Option<Plain>, ProjectError> {
    Ok(value.to_plain())
}

/// Project a single nested entity with the parent's direction.
pub fn nested<E: EntityValue>(
    slot: &Option<E>,
    direction: Direction,
) -> Result<Option<Plain>, ProjectError> {
    match slot {
        Some(child) => Ok(Some(to_plain(child, direction)?)),
        None => Ok(None),
    }
}

/// Project an entity collection with the parent's direction.
pub fn nested_list<E: EntityValue>(
    slot: &Option<Vec<E>>,
    direction: Direction,
) -> Result<Option<Plain>, ProjectError> {
    let Some(items) = slot else {
        return Ok(None);
    };

    let mut out = Vec::with_capacity(items.len());
    for item in items {
        out.push(to_plain(item, direction)?);
    }

    Ok(Some(Plain::List(out)))
}

///
/// TESTS
///
