//! Core runtime for Wiremap: the plain value model, constant entity field
//! metadata, and the hydration/projection engine built on top of both.

pub mod hydrate;
pub mod json;
pub mod model;
pub mod project;
pub mod traits;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, engine internals, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        model::{
            entity::EntityModel,
            field::{Direction, FieldKind, FieldModel, WireRule},
            table::MappingTable,
        },
        traits::{EntityValue, FieldValue},
        value::Plain,
    };
}
