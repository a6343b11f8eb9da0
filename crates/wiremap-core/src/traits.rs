use crate::{
    hydrate::{self, HydrateError},
    json,
    model::{entity::EntityModel, field::Direction},
    project::{self, ProjectError},
    value::Plain,
};

// ============================================================================
// PER-FIELD CONVERSION
// ============================================================================

///
/// FieldValue
///
/// Conversion boundary between one typed field and its plain representation.
///
/// `from_plain` returns None when the raw value cannot represent `Self`;
/// `to_plain` returns None when the field is absent and must be omitted
/// from projected output.
///

pub trait FieldValue: Sized {
    #[must_use]
    fn from_plain(raw: &Plain) -> Option<Self>;

    #[must_use]
    fn to_plain(&self) -> Option<Plain>;
}

impl FieldValue for bool {
    fn from_plain(raw: &Plain) -> Option<Self> {
        match raw {
            Plain::Bool(v) => Some(*v),
            _ => None,
        }
    }

    fn to_plain(&self) -> Option<Plain> {
        Some(Plain::Bool(*self))
    }
}

impl FieldValue for String {
    fn from_plain(raw: &Plain) -> Option<Self> {
        match raw {
            Plain::Text(v) => Some(v.clone()),
            _ => None,
        }
    }

    fn to_plain(&self) -> Option<Plain> {
        Some(Plain::Text(self.clone()))
    }
}

// Raw pass-through: a field typed `Plain` keeps whatever the payload held.
impl FieldValue for Plain {
    fn from_plain(raw: &Plain) -> Option<Self> {
        Some(raw.clone())
    }

    fn to_plain(&self) -> Option<Plain> {
        Some(self.clone())
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn from_plain(raw: &Plain) -> Option<Self> {
        if raw.is_null() {
            return Some(None);
        }

        T::from_plain(raw).map(Some)
    }

    fn to_plain(&self) -> Option<Plain> {
        self.as_ref().and_then(FieldValue::to_plain)
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn from_plain(raw: &Plain) -> Option<Self> {
        let Plain::List(items) = raw else {
            return None;
        };

        let mut out = Self::with_capacity(items.len());
        for item in items {
            out.push(T::from_plain(item)?);
        }

        Some(out)
    }

    fn to_plain(&self) -> Option<Plain> {
        Some(Plain::List(
            self.iter().filter_map(FieldValue::to_plain).collect(),
        ))
    }
}

// impl_field_value_int
#[macro_export]
macro_rules! impl_field_value_int {
    ( $( $type:ty ),* $(,)? ) => {
        $(
            impl $crate::traits::FieldValue for $type {
                fn from_plain(raw: &$crate::value::Plain) -> Option<Self> {
                    match raw {
                        $crate::value::Plain::Int(v) => (*v).try_into().ok(),
                        $crate::value::Plain::Uint(v) => (*v).try_into().ok(),
                        _ => None,
                    }
                }

                fn to_plain(&self) -> Option<$crate::value::Plain> {
                    Some($crate::value::Plain::Int(i64::from(*self)))
                }
            }
        )*
    };
}

// impl_field_value_uint
#[macro_export]
macro_rules! impl_field_value_uint {
    ( $( $type:ty ),* $(,)? ) => {
        $(
            impl $crate::traits::FieldValue for $type {
                fn from_plain(raw: &$crate::value::Plain) -> Option<Self> {
                    match raw {
                        $crate::value::Plain::Int(v) => (*v).try_into().ok(),
                        $crate::value::Plain::Uint(v) => (*v).try_into().ok(),
                        _ => None,
                    }
                }

                fn to_plain(&self) -> Option<$crate::value::Plain> {
                    Some($crate::value::Plain::Uint(u64::from(*self)))
                }
            }
        )*
    };
}

// impl_field_value_float
//
// JSON integer literals populate float fields; the reverse never holds.
#[macro_export]
macro_rules! impl_field_value_float {
    ( $( $type:ty ),* $(,)? ) => {
        $(
            impl $crate::traits::FieldValue for $type {
                #[allow(
                    clippy::cast_precision_loss,
                    clippy::cast_possible_truncation,
                    clippy::unnecessary_cast
                )]
                fn from_plain(raw: &$crate::value::Plain) -> Option<Self> {
                    match raw {
                        $crate::value::Plain::Float(v) => Some(*v as $type),
                        $crate::value::Plain::Int(v) => Some(*v as $type),
                        $crate::value::Plain::Uint(v) => Some(*v as $type),
                        _ => None,
                    }
                }

                fn to_plain(&self) -> Option<$crate::value::Plain> {
                    Some($crate::value::Plain::Float(f64::from(*self)))
                }
            }
        )*
    };
}

impl_field_value_int!(i8, i16, i32, i64);
impl_field_value_uint!(u8, u16, u32, u64);
impl_field_value_float!(f32, f64);

// ============================================================================
// ENTITY CONTRACT
// ============================================================================

///
/// EntityValue
///
/// A mappable domain entity.
///
/// Implementors provide the constant field-metadata table plus the typed
/// per-field dispatch; hydration and projection walk the resolved mapping
/// tables and call back through `set_field` / `get_field`. The dispatch arms
/// are built from the `hydrate` / `project` helper functions so the
/// field-kind rules live in the engine, not in entity code.
///
/// An empty entity is `Default::default()`; hydrated construction goes
/// through `from_plain` / `from_json`.
///

pub trait EntityValue: Default {
    const MODEL: &'static EntityModel;

    /// Assign one field from its decoded raw value.
    ///
    /// `field` is the internal identifier from [`Self::MODEL`]; `direction`
    /// is the table direction of the current hydration pass, forwarded into
    /// entity-collection fields.
    fn set_field(
        &mut self,
        field: &'static str,
        raw: &Plain,
        direction: Direction,
    ) -> Result<(), HydrateError>;

    /// Read one field back as a plain value; None omits the field.
    fn get_field(
        &self,
        field: &'static str,
        direction: Direction,
    ) -> Result<Option<Plain>, ProjectError>;

    //
    // PROVIDED SURFACE
    //

    /// Hydrate from an already-decoded plain structure.
    fn from_plain(raw: &Plain, direction: Direction) -> Result<Self, HydrateError> {
        hydrate::from_plain(raw, direction)
    }

    /// Hydrate from a JSON document.
    fn from_json(text: &str, direction: Direction) -> Result<Self, HydrateError> {
        hydrate::from_json(text, direction)
    }

    /// Project into a plain structure keyed by `direction` wire names.
    fn to_plain(&self, direction: Direction) -> Result<Plain, ProjectError> {
        project::to_plain(self, direction)
    }

    /// Project and encode as a JSON document.
    fn to_json(&self, direction: Direction) -> Result<String, ProjectError> {
        Ok(json::encode(&self.to_plain(direction)?))
    }
}

///
/// TESTS
///
