pub mod collection;
pub mod error;
pub mod feature;
pub mod geometry;
pub mod options;

pub use collection::{FEATURE_COLLECTION, FeatureCollection, RESERVED_MEMBERS};
pub use error::{GeoJsonError, Result};
pub use feature::{ADDRESS_PROPERTY, Feature};
pub use geometry::LatLng;
pub use options::{
    AnnotateOptions, DEFAULT_MERGE_OUTPUT, DEFAULT_MERGE_PATTERN, DEFAULT_PREFIX,
    DEFAULT_REQUEST_DELAY, DEFAULT_REQUEST_TIMEOUT, DEFAULT_SPLIT_DIR, GEOJSON_EXTENSION,
    MergeOptions, SplitOptions,
};
