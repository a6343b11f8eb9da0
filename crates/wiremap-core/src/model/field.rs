use std::fmt;

///
/// Direction
///
/// Which wire-naming convention a mapping pass uses. Inbound governs normal
/// hydration from external payloads; Outbound governs normal projection.
/// Passing the opposite direction consumes or produces payloads keyed by the
/// other convention.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    Inbound,
    Outbound,
}

impl Direction {
    #[must_use]
    pub const fn invert(self) -> Self {
        match self {
            Self::Inbound => Self::Outbound,
            Self::Outbound => Self::Inbound,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Inbound => "inbound",
            Self::Outbound => "outbound",
        };
        write!(f, "{label}")
    }
}

///
/// FieldKind
///
/// Declared shape of a field. Explicit at declaration time; nothing is
/// inferred from type names.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldKind {
    /// Primitive or raw value, converted through `FieldValue`.
    Scalar,
    /// Single nested entity.
    Entity,
    /// Ordered sequence of nested entities, all of one declared type.
    EntityList,
}

///
/// WireRule
///
/// Per-direction wire naming for one field.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WireRule {
    /// Not mapped in this direction; never read or written externally.
    Skip,
    /// Wire name equals the internal field identifier.
    Ident,
    /// Explicit wire name. An empty name falls back to the identifier.
    Named(&'static str),
}

///
/// FieldModel
/// Constant descriptor for one mappable field.
///

#[derive(Debug)]
pub struct FieldModel {
    /// Internal field identifier, as used in dispatch.
    pub name: &'static str,
    /// Declared shape.
    pub kind: FieldKind,
    pub inbound: WireRule,
    pub outbound: WireRule,
}

impl FieldModel {
    /// Wire name of this field in `direction`, or None when unmapped.
    #[must_use]
    pub const fn wire_name(&self, direction: Direction) -> Option<&'static str> {
        let rule = match direction {
            Direction::Inbound => self.inbound,
            Direction::Outbound => self.outbound,
        };

        match rule {
            WireRule::Skip => None,
            WireRule::Ident => Some(self.name),
            WireRule::Named(wire) => {
                if wire.is_empty() {
                    Some(self.name)
                } else {
                    Some(wire)
                }
            }
        }
    }
}

///
/// TESTS
///
