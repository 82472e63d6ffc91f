use thiserror::Error;

/// Structural problems found while interpreting a JSON document as GeoJSON.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeoJsonError {
    /// Top-level `type` is missing or is not `FeatureCollection`.
    #[error("GeoJSON must be a FeatureCollection (found type: {found})")]
    InvalidFormat { found: String },

    /// The `features` member is present but is not an array.
    #[error("`features` must be an array (found {found})")]
    FeaturesNotArray { found: String },
}

pub type Result<T> = std::result::Result<T, GeoJsonError>;
