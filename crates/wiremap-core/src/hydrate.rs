//! Hydration: populating typed entities from plain payloads.
//!
//! The engine walk ([`from_plain`]) resolves the mapping table for the
//! requested direction and dispatches each mapped payload key through the
//! entity's `set_field`. The helper functions below implement the per-kind
//! assignment rules, so dispatch arms stay one line per field.
//!
//! Direction handling for nested entities is a fixed rule:
//! - single nested entities ALWAYS hydrate with the inbound table, whatever
//!   direction the parent pass uses;
//! - entity collections propagate the parent direction into each element.
//!
//! Round-trip correctness leans on this asymmetry; see the tests in
//! `project`.

use crate::{
    json::{self, DecodeError},
    model::{
        field::{Direction, FieldKind, FieldModel},
        table::{MappingTable, ResolveError},
    },
    traits::{EntityValue, FieldValue},
    value::Plain,
};
use std::any;
use thiserror::Error as ThisError;

///
/// HydrateError
///

#[derive(Debug, ThisError)]
pub enum HydrateError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("{path}: entity payload must be a map, found {found}")]
    NonMapPayload {
        path: &'static str,
        found: &'static str,
    },

    #[error("{path}.{field}: expected {expected}, found {found}")]
    Mismatch {
        path: &'static str,
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("{path} has no field `{field}` in its dispatch table")]
    UnknownField {
        path: &'static str,
        field: &'static str,
    },
}

impl HydrateError {
    /// Dispatch-table miss; the field model and setter have drifted apart.
    #[must_use]
    pub const fn unknown_field(path: &'static str, field: &'static str) -> Self {
        Self::UnknownField { path, field }
    }
}

/// Hydrate an entity from a JSON document.
pub fn from_json<E: EntityValue>(text: &str, direction: Direction) -> Result<E, HydrateError> {
    let raw = json::decode(text)?;

    from_plain(&raw, direction)
}

/// Hydrate an entity from an already-decoded plain structure.
///
/// Payload keys absent from the mapping table are ignored; mapped fields
/// absent from the payload keep their defaults.
pub fn from_plain<E: EntityValue>(raw: &Plain, direction: Direction) -> Result<E, HydrateError> {
    let table = MappingTable::resolve(E::MODEL, direction)?;

    let Plain::Map(pairs) = raw else {
        return Err(HydrateError::NonMapPayload {
            path: E::MODEL.path,
            found: raw.kind(),
        });
    };

    let mut entity = E::default();
    for (key, value) in pairs {
        let Some(entry) = table.lookup(key) else {
            continue;
        };

        shape_gate(E::MODEL.path, entry.field, value)?;
        entity.set_field(entry.field.name, value, direction)?;
    }

    Ok(entity)
}

// Declared-kind shape gate; `set_field` refines per-type conversion.
// `Null` counts as absent for single values but is a hard mismatch for
// collections, which must be sequences when present.
fn shape_gate(
    path: &'static str,
    field: &'static FieldModel,
    raw: &Plain,
) -> Result<(), HydrateError> {
    match field.kind {
        FieldKind::Scalar => Ok(()),
        FieldKind::Entity => match raw {
            Plain::Map(_) | Plain::Null => Ok(()),
            other => Err(HydrateError::Mismatch {
                path,
                field: field.name,
                expected: "map",
                found: other.kind(),
            }),
        },
        FieldKind::EntityList => match raw {
            Plain::List(_) => Ok(()),
            other => Err(HydrateError::Mismatch {
                path,
                field: field.name,
                expected: "list",
                found: other.kind(),
            }),
        },
    }
}

//
// DISPATCH HELPERS
//

/// Assign a scalar field. `Null` counts as absent and keeps the default.
pub fn scalar<T: FieldValue>(
    path: &'static str,
    field: &'static str,
    slot: &mut T,
    raw: &Plain,
) -> Result<(), HydrateError> {
    if raw.is_null() {
        return Ok(());
    }

    match T::from_plain(raw) {
        Some(value) => {
            *slot = value;
            Ok(())
        }
        None => Err(HydrateError::Mismatch {
            path,
            field,
            expected: any::type_name::<T>(),
            found: raw.kind(),
        }),
    }
}

/// Assign a single nested entity, hydrating with the inbound table.
pub fn nested<E: EntityValue>(
    path: &'static str,
    field: &'static str,
    slot: &mut Option<E>,
    raw: &Plain,
) -> Result<(), HydrateError> {
    match raw {
        Plain::Null => Ok(()),
        Plain::Map(_) => {
            *slot = Some(from_plain(raw, Direction::Inbound)?);
            Ok(())
        }
        other => Err(HydrateError::Mismatch {
            path,
            field,
            expected: "map",
            found: other.kind(),
        }),
    }
}

/// Assign an entity collection, propagating the parent direction.
pub fn nested_list<E: EntityValue>(
    path: &'static str,
    field: &'static str,
    slot: &mut Option<Vec<E>>,
    raw: &Plain,
    direction: Direction,
) -> Result<(), HydrateError> {
    let Plain::List(items) = raw else {
        return Err(HydrateError::Mismatch {
            path,
            field,
            expected: "list",
            found: raw.kind(),
        });
    };

    let mut out = Vec::with_capacity(items.len());
    for item in items {
        if !matches!(item, Plain::Map(_)) {
            return Err(HydrateError::Mismatch {
                path,
                field,
                expected: "map element",
                found: item.kind(),
            });
        }

        out.push(from_plain(item, direction)?);
    }

    *slot = Some(out);

    Ok(())
}

///
/// TESTS
///
