//! Reading and writing GeoJSON files.
//!
//! Output is UTF-8 with non-ASCII characters written literally and two-space
//! indentation, so files stay diffable against the source datasets.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use solar_model::FeatureCollection;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Parse a file as JSON without interpreting it.
pub fn read_json(path: &Path) -> Result<Value> {
    let file = File::open(path).map_err(|e| IngestError::io(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        if source.is_io() {
            IngestError::Io {
                path: path.to_path_buf(),
                source: source.into(),
            }
        } else {
            IngestError::MalformedJson {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Read a file that must contain a GeoJSON `FeatureCollection`.
pub fn read_collection(path: &Path) -> Result<FeatureCollection> {
    let value = read_json(path)?;
    let collection =
        FeatureCollection::try_from(value).map_err(|source| IngestError::InvalidFormat {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(
        path = %path.display(),
        features = collection.len(),
        "read feature collection"
    );
    Ok(collection)
}

/// Write a collection, replacing any existing file at `path`.
pub fn write_collection(path: &Path, collection: &FeatureCollection) -> Result<()> {
    write_pretty(path, collection)?;
    debug!(
        path = %path.display(),
        features = collection.len(),
        "wrote feature collection"
    );
    Ok(())
}

fn write_pretty<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path).map_err(|e| IngestError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value).map_err(|source| IngestError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(|e| IngestError::io(path, e))
}
