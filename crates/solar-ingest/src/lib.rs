//! GeoJSON file access for the solar-potential toolkit.
//!
//! # Features
//!
//! - **Reading**: parse a file and check it is a `FeatureCollection`
//! - **Writing**: two-space indented UTF-8 output with literal non-ASCII text
//! - **Discovery**: list chunk files of a directory matching a shell pattern
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use solar_ingest::{FilePattern, list_matching_files, read_collection};
//!
//! let pattern = FilePattern::new("parte_*.geojson")?;
//! for path in list_matching_files(Path::new("geojson_divididos"), &pattern)? {
//!     let collection = read_collection(&path)?;
//!     println!("{}: {} features", path.display(), collection.len());
//! }
//! ```

mod discovery;
mod error;
mod io;

// === Error Types ===
pub use error::{IngestError, Result};

// === Reading / Writing ===
pub use io::{read_collection, read_json, write_collection};

// === File Discovery ===
pub use discovery::{FilePattern, list_matching_files};
