//! GeoJSON `FeatureCollection` with verbatim top-level metadata.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{GeoJsonError, Result};
use crate::feature::Feature;

/// Required value of the top-level `type` member.
pub const FEATURE_COLLECTION: &str = "FeatureCollection";

/// Top-level members that are never treated as metadata.
pub const RESERVED_MEMBERS: [&str; 2] = ["type", "features"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
enum CollectionKind {
    #[default]
    FeatureCollection,
}

/// An ordered list of features plus every other top-level member of the
/// source document (`name`, `crs`, `bbox`, ...).
///
/// Serializes as `type`, `features`, then the metadata in source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    kind: CollectionKind,
    pub features: Vec<Feature>,
    #[serde(flatten)]
    metadata: Map<String, Value>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            kind: CollectionKind::FeatureCollection,
            features,
            metadata: Map::new(),
        }
    }

    /// Attach metadata, dropping any reserved member it may contain.
    #[must_use]
    pub fn with_metadata(mut self, mut metadata: Map<String, Value>) -> Self {
        for key in RESERVED_MEMBERS {
            metadata.shift_remove(key);
        }
        self.metadata = metadata;
        self
    }

    pub fn metadata(&self) -> &Map<String, Value> {
        &self.metadata
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn into_parts(self) -> (Vec<Feature>, Map<String, Value>) {
        (self.features, self.metadata)
    }
}

impl TryFrom<Value> for FeatureCollection {
    type Error = GeoJsonError;

    fn try_from(value: Value) -> Result<Self> {
        let Value::Object(mut members) = value else {
            return Err(GeoJsonError::InvalidFormat {
                found: describe(&value),
            });
        };

        match members.shift_remove("type") {
            Some(Value::String(kind)) if kind == FEATURE_COLLECTION => {}
            Some(other) => {
                return Err(GeoJsonError::InvalidFormat {
                    found: describe(&other),
                });
            }
            None => {
                return Err(GeoJsonError::InvalidFormat {
                    found: "missing".to_string(),
                });
            }
        }

        let features = match members.shift_remove("features") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items.into_iter().map(Feature::from).collect(),
            Some(other) => {
                return Err(GeoJsonError::FeaturesNotArray {
                    found: describe(&other),
                });
            }
        };

        Ok(Self {
            kind: CollectionKind::FeatureCollection,
            features,
            metadata: members,
        })
    }
}

/// Short description of a JSON value for error messages.
fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::String(text) => format!("\"{text}\""),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    }
}
