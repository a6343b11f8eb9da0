//! ## Crate layout
//! - `core`: plain value model, entity field metadata, and the
//!   hydration/projection engine.
//!
//! The `prelude` module mirrors the surface used by entity definitions;
//! engine helpers and error types stay module-qualified
//! (`wiremap::hydrate`, `wiremap::project`, `wiremap::json`).

pub use wiremap_core as core;

pub use wiremap_core::{hydrate, json, model, project, traits, value};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        model::{
            entity::EntityModel,
            field::{Direction, FieldKind, FieldModel, WireRule},
            table::MappingTable,
        },
        traits::{EntityValue, FieldValue as _},
        value::Plain,
    };
}
