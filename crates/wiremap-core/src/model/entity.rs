use crate::model::field::FieldModel;

///
/// EntityModel
/// Constant runtime model for one mappable entity type.
///

#[derive(Debug)]
pub struct EntityModel {
    /// Fully-qualified Rust type path (for dispatch and diagnostics).
    pub path: &'static str,
    /// Stable external name used in diagnostics and tracing.
    pub entity_name: &'static str,
    /// Ordered field list (authoritative for projection output order).
    pub fields: &'static [FieldModel],
}

impl EntityModel {
    /// Field descriptor by internal identifier.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldModel> {
        self.fields.iter().find(|field| field.name == name)
    }
}
