//! Fixture entities shared by the engine tests.
//!
//! `User` exercises every declaration feature at once: renamed fields with
//! direction-dependent wire names, a nested entity, an entity collection, a
//! raw scalar list, and fields mapped in one direction only (or neither).

use crate::{
    hydrate::{self, HydrateError},
    model::{
        entity::EntityModel,
        field::{Direction, FieldKind, FieldModel, WireRule},
    },
    project::{self, ProjectError},
    traits::EntityValue,
    value::Plain,
};

///
/// Address
/// Nested fixture entity; `street` is renamed differently per direction.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Address {
    pub city: Option<String>,
    pub street: Option<String>,
}

const ADDRESS_FIELDS: &[FieldModel] = &[
    FieldModel {
        name: "city",
        kind: FieldKind::Scalar,
        inbound: WireRule::Ident,
        outbound: WireRule::Ident,
    },
    FieldModel {
        name: "street",
        kind: FieldKind::Scalar,
        inbound: WireRule::Named("street_name"),
        outbound: WireRule::Named("streetName"),
    },
];

static ADDRESS_MODEL: EntityModel = EntityModel {
    path: "test_fixtures::Address",
    entity_name: "address",
    fields: ADDRESS_FIELDS,
};

impl EntityValue for Address {
    const MODEL: &'static EntityModel = &ADDRESS_MODEL;

    fn set_field(
        &mut self,
        field: &'static str,
        raw: &Plain,
        _direction: Direction,
    ) -> Result<(), HydrateError> {
        let path = Self::MODEL.path;

        match field {
            "city" => hydrate::scalar(path, field, &mut self.city, raw),
            "street" => hydrate::scalar(path, field, &mut self.street, raw),
            _ => Err(HydrateError::unknown_field(path, field)),
        }
    }

    fn get_field(
        &self,
        field: &'static str,
        _direction: Direction,
    ) -> Result<Option<Plain>, ProjectError> {
        match field {
            "city" => project::scalar(&self.city),
            "street" => project::scalar(&self.street),
            _ => Err(ProjectError::unknown_field(Self::MODEL.path, field)),
        }
    }
}

///
/// User
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct User {
    pub user_id: u64,
    pub name: Option<String>,
    pub home: Option<Address>,
    pub addresses: Option<Vec<Address>>,
    /// Outbound-only.
    pub note: Option<String>,
    /// Inbound-only.
    pub source: Option<String>,
    /// Raw scalar list, passed through unchanged.
    pub tags: Option<Vec<String>>,
    /// Never mapped in either direction.
    pub secret: Option<String>,
}

const USER_FIELDS: &[FieldModel] = &[
    FieldModel {
        name: "user_id",
        kind: FieldKind::Scalar,
        inbound: WireRule::Named("id_user"),
        outbound: WireRule::Named("userId"),
    },
    FieldModel {
        name: "name",
        kind: FieldKind::Scalar,
        inbound: WireRule::Ident,
        outbound: WireRule::Ident,
    },
    FieldModel {
        name: "home",
        kind: FieldKind::Entity,
        inbound: WireRule::Ident,
        outbound: WireRule::Named("homeAddress"),
    },
    FieldModel {
        name: "addresses",
        kind: FieldKind::EntityList,
        inbound: WireRule::Ident,
        outbound: WireRule::Ident,
    },
    FieldModel {
        name: "note",
        kind: FieldKind::Scalar,
        inbound: WireRule::Skip,
        outbound: WireRule::Named("noteText"),
    },
    FieldModel {
        name: "source",
        kind: FieldKind::Scalar,
        inbound: WireRule::Ident,
        outbound: WireRule::Skip,
    },
    FieldModel {
        name: "tags",
        kind: FieldKind::Scalar,
        inbound: WireRule::Ident,
        outbound: WireRule::Ident,
    },
    FieldModel {
        name: "secret",
        kind: FieldKind::Scalar,
        inbound: WireRule::Skip,
        outbound: WireRule::Skip,
    },
];

static USER_MODEL: EntityModel = EntityModel {
    path: "test_fixtures::User",
    entity_name: "user",
    fields: USER_FIELDS,
};

impl EntityValue for User {
    const MODEL: &'static EntityModel = &USER_MODEL;

    fn set_field(
        &mut self,
        field: &'static str,
        raw: &Plain,
        direction: Direction,
    ) -> Result<(), HydrateError> {
        let path = Self::MODEL.path;

        match field {
            "user_id" => hydrate::scalar(path, field, &mut self.user_id, raw),
            "name" => hydrate::scalar(path, field, &mut self.name, raw),
            "home" => hydrate::nested(path, field, &mut self.home, raw),
            "addresses" => hydrate::nested_list(path, field, &mut self.addresses, raw, direction),
            "note" => hydrate::scalar(path, field, &mut self.note, raw),
            "source" => hydrate::scalar(path, field, &mut self.source, raw),
            "tags" => hydrate::scalar(path, field, &mut self.tags, raw),
            "secret" => hydrate::scalar(path, field, &mut self.secret, raw),
            _ => Err(HydrateError::unknown_field(path, field)),
        }
    }

    fn get_field(
        &self,
        field: &'static str,
        direction: Direction,
    ) -> Result<Option<Plain>, ProjectError> {
        match field {
            "user_id" => project::scalar(&self.user_id),
            "name" => project::scalar(&self.name),
            "home" => project::nested(&self.home, direction),
            "addresses" => project::nested_list(&self.addresses, direction),
            "note" => project::scalar(&self.note),
            "source" => project::scalar(&self.source),
            "tags" => project::scalar(&self.tags),
            "secret" => project::scalar(&self.secret),
            _ => Err(ProjectError::unknown_field(Self::MODEL.path, field)),
        }
    }
}

///
/// Ghost
/// No outbound-mapped fields; projects to the empty-object marker.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ghost {
    pub hidden: Option<String>,
}

const GHOST_FIELDS: &[FieldModel] = &[FieldModel {
    name: "hidden",
    kind: FieldKind::Scalar,
    inbound: WireRule::Ident,
    outbound: WireRule::Skip,
}];

static GHOST_MODEL: EntityModel = EntityModel {
    path: "test_fixtures::Ghost",
    entity_name: "ghost",
    fields: GHOST_FIELDS,
};

impl EntityValue for Ghost {
    const MODEL: &'static EntityModel = &GHOST_MODEL;

    fn set_field(
        &mut self,
        field: &'static str,
        raw: &Plain,
        _direction: Direction,
    ) -> Result<(), HydrateError> {
        let path = Self::MODEL.path;

        match field {
            "hidden" => hydrate::scalar(path, field, &mut self.hidden, raw),
            _ => Err(HydrateError::unknown_field(path, field)),
        }
    }

    fn get_field(
        &self,
        field: &'static str,
        _direction: Direction,
    ) -> Result<Option<Plain>, ProjectError> {
        match field {
            "hidden" => project::scalar(&self.hidden),
            _ => Err(ProjectError::unknown_field(Self::MODEL.path, field)),
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::{Address, User};
    use crate::{
        hydrate::HydrateError,
        model::field::Direction,
        project::ProjectError,
        traits::EntityValue,
        value::Plain,
    };

    #[test]
    fn dispatch_rejects_field_names_outside_the_model() {
        let mut user = User::default();

        let err = user
            .set_field("bogus", &Plain::Null, Direction::Inbound)
            .expect_err("no such field");
        assert!(matches!(err, HydrateError::UnknownField { field: "bogus", .. }));

        let err = Address::default()
            .get_field("bogus", Direction::Inbound)
            .expect_err("no such field");
        assert!(matches!(err, ProjectError::UnknownField { field: "bogus", .. }));
    }

    #[test]
    fn models_expose_fields_by_identifier() {
        let field = User::MODEL.field("user_id").expect("declared field");
        assert_eq!(field.wire_name(Direction::Inbound), Some("id_user"));

        assert!(User::MODEL.field("bogus").is_none());
    }
}
