//! A single GeoJSON feature kept as its raw JSON members.
//!
//! Only `geometry.coordinates` and `properties.direccion` are interpreted;
//! every other member is carried through untouched and in source order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Property key that holds the street address of a feature.
pub const ADDRESS_PROPERTY: &str = "direccion";

/// One entry of a collection's `features` array.
///
/// Entries that are not JSON objects are kept verbatim so that splitting and
/// merging never lose them; every accessor treats them as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feature {
    value: Value,
}

impl Default for Feature {
    fn default() -> Self {
        Self::from_members(Map::new())
    }
}

impl Feature {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_members(members: Map<String, Value>) -> Self {
        Self {
            value: Value::Object(members),
        }
    }

    pub fn as_value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    /// The feature's members, or `None` for a non-object entry.
    pub fn members(&self) -> Option<&Map<String, Value>> {
        self.value.as_object()
    }

    pub fn is_object(&self) -> bool {
        self.value.is_object()
    }

    pub fn geometry(&self) -> Option<&Value> {
        self.members()?.get("geometry")
    }

    /// Returns `geometry.coordinates` when both members exist.
    pub fn coordinates(&self) -> Option<&Value> {
        self.geometry()
            .and_then(Value::as_object)
            .and_then(|geometry| geometry.get("coordinates"))
    }

    pub fn properties(&self) -> Option<&Map<String, Value>> {
        self.members()?.get("properties").and_then(Value::as_object)
    }

    /// Mutable access to `properties`, creating an empty object when the
    /// member is missing or `null`. `None` for a non-object entry.
    pub fn properties_mut(&mut self) -> Option<&mut Map<String, Value>> {
        let members = self.value.as_object_mut()?;
        let slot = members
            .entry("properties")
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
        }
        slot.as_object_mut()
    }

    /// The current `direccion` value, if it is a string.
    pub fn address(&self) -> Option<&str> {
        self.properties()
            .and_then(|properties| properties.get(ADDRESS_PROPERTY))
            .and_then(Value::as_str)
    }

    /// Store `address` as `direccion`. Returns `false`, leaving the entry
    /// untouched, when the feature is not an object.
    pub fn set_address(&mut self, address: impl Into<String>) -> bool {
        match self.properties_mut() {
            Some(properties) => {
                properties.insert(ADDRESS_PROPERTY.to_string(), Value::String(address.into()));
                true
            }
            None => false,
        }
    }
}

impl From<Map<String, Value>> for Feature {
    fn from(members: Map<String, Value>) -> Self {
        Self::from_members(members)
    }
}

impl From<Value> for Feature {
    fn from(value: Value) -> Self {
        Self { value }
    }
}
