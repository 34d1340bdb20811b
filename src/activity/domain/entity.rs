//! Entity references and the [`Loggable`] capability.
//!
//! Subjects, actors, and contragents live outside this crate. The recorder
//! only needs three things from them: a type name, a key, and a generic
//! JSON structure the description templating engine can walk.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// Capability required from any entity that takes part in an activity.
///
/// # Examples
///
/// ```
/// use activitylog::activity::domain::{GenericEntity, Loggable};
///
/// let user = GenericEntity::new("user", "1").with_attribute("name", "Ada");
/// assert_eq!(user.entity_ref().to_string(), "user#1");
/// assert_eq!(user.to_structure()["name"], "Ada");
/// ```
pub trait Loggable: fmt::Debug + Send + Sync {
    /// Returns the entity type name stored alongside the key.
    fn entity_type(&self) -> &str;

    /// Returns the entity key in string form.
    fn entity_id(&self) -> String;

    /// Converts the entity into a nested mapping/array structure.
    fn to_structure(&self) -> Value;

    /// Returns the `(type, id)` reference persisted on records.
    fn entity_ref(&self) -> EntityRef {
        EntityRef::new(self.entity_type(), self.entity_id())
    }
}

/// Shared handle to an external entity.
pub type SharedEntity = Arc<dyn Loggable>;

/// Reference to an external entity by type and key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    entity_type: String,
    id: String,
}

impl EntityRef {
    /// Creates a reference from a type name and key.
    #[must_use]
    pub fn new(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    /// Returns the entity type name.
    #[must_use]
    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    /// Returns the entity key.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.entity_type, self.id)
    }
}

/// General-purpose [`Loggable`] holding a type, a key, and JSON attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericEntity {
    entity_type: String,
    id: String,
    attributes: Map<String, Value>,
}

impl GenericEntity {
    /// Creates an entity with no attributes.
    #[must_use]
    pub fn new(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            id: id.into(),
            attributes: Map::new(),
        }
    }

    /// Creates an entity whose attributes are the serialized form of `model`.
    ///
    /// A model that serializes to something other than a JSON object is
    /// stored under the `value` attribute.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] when `model` cannot be serialized.
    pub fn from_serialize<T: Serialize>(
        entity_type: impl Into<String>,
        id: impl Into<String>,
        model: &T,
    ) -> Result<Self, serde_json::Error> {
        let attributes = match serde_json::to_value(model)? {
            Value::Object(map) => map,
            other => Map::from_iter([("value".to_owned(), other)]),
        };
        Ok(Self {
            entity_type: entity_type.into(),
            id: id.into(),
            attributes,
        })
    }

    /// Sets a single attribute.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Returns the attribute map.
    #[must_use]
    pub const fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// Wraps the entity in a [`SharedEntity`] handle.
    #[must_use]
    pub fn into_shared(self) -> SharedEntity {
        Arc::new(self)
    }
}

impl Loggable for GenericEntity {
    fn entity_type(&self) -> &str {
        &self.entity_type
    }

    fn entity_id(&self) -> String {
        self.id.clone()
    }

    fn to_structure(&self) -> Value {
        let mut structure = Map::new();
        if !self.attributes.contains_key("id") {
            structure.insert("id".to_owned(), Value::String(self.id.clone()));
        }
        structure.extend(self.attributes.clone());
        Value::Object(structure)
    }
}
