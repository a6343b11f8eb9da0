//! The loosely-typed nested value model exchanged with callers.
//!
//! `Plain` is the decoded form of a JSON document: primitives, lists, and
//! ordered maps. It carries no schema knowledge; the `model` and `hydrate` /
//! `project` modules interpret it against entity metadata.

use serde::{Serialize, Serializer};

///
/// Plain
///
/// Owned plain value. `Map` preserves entry order so projected output keeps
/// field declaration order end to end.
///
/// `Map(vec![])` is the empty-object marker: structurally distinct from
/// `List(vec![])`, and encoded as `{}` rather than `[]`.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Plain {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Text(String),
    List(Vec<Self>),
    Map(Vec<(String, Self)>),
}

impl Plain {
    ///
    /// CONSTRUCTION
    ///

    /// The empty-object marker.
    #[must_use]
    pub const fn empty_map() -> Self {
        Self::Map(Vec::new())
    }

    /// Build a `Plain::List` from owned items.
    pub fn from_list<T>(items: Vec<T>) -> Self
    where
        T: Into<Self>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    ///
    /// TYPES
    ///

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Stable variant label used in mismatch diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Uint(_) => "uint",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }

    ///
    /// CONVERSION
    ///

    #[must_use]
    pub const fn as_text(&self) -> Option<&str> {
        if let Self::Text(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_list(&self) -> Option<&[Self]> {
        if let Self::List(items) = self {
            Some(items.as_slice())
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_map(&self) -> Option<&[(String, Self)]> {
        if let Self::Map(entries) = self {
            Some(entries.as_slice())
        } else {
            None
        }
    }

    /// First map entry under `key`, if `self` is a map.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Map(entries) => entries
                .iter()
                .find(|(name, _)| name.as_str() == key)
                .map(|(_, value)| value),
            _ => None,
        }
    }
}

impl Default for Plain {
    fn default() -> Self {
        Self::Null
    }
}

// Serialization mirrors the JSON data model directly; `Null` is a unit.
impl Serialize for Plain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(v) => serializer.serialize_bool(*v),
            Self::Int(v) => serializer.serialize_i64(*v),
            Self::Uint(v) => serializer.serialize_u64(*v),
            Self::Float(v) => serializer.serialize_f64(*v),
            Self::Text(v) => serializer.serialize_str(v),
            Self::List(items) => serializer.collect_seq(items),
            Self::Map(entries) => {
                serializer.collect_map(entries.iter().map(|(key, value)| (key, value)))
            }
        }
    }
}

// impl_plain_from
#[macro_export]
macro_rules! impl_plain_from {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for $crate::value::Plain {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_plain_from! {
    bool   => Bool,
    i8     => Int,
    i16    => Int,
    i32    => Int,
    i64    => Int,
    u8     => Uint,
    u16    => Uint,
    u32    => Uint,
    u64    => Uint,
    f32    => Float,
    f64    => Float,
    &str   => Text,
    String => Text,
}

impl From<Vec<Self>> for Plain {
    fn from(items: Vec<Self>) -> Self {
        Self::List(items)
    }
}

impl From<Vec<(String, Self)>> for Plain {
    fn from(entries: Vec<(String, Self)>) -> Self {
        Self::Map(entries)
    }
}

///
/// TESTS
///
