//! Error types for GeoJSON file access.

use std::path::PathBuf;

use solar_model::GeoJsonError;
use thiserror::Error;

/// Errors that can occur while reading, writing or discovering GeoJSON files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file does not exist.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Any other I/O failure on a file.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === JSON Errors ===
    /// File content is not valid JSON.
    #[error("{path} is not valid JSON: {source}")]
    MalformedJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// File is valid JSON but not a GeoJSON FeatureCollection.
    #[error("{path}: {source}")]
    InvalidFormat {
        path: PathBuf,
        #[source]
        source: GeoJsonError,
    },

    /// Failed to serialize a collection to disk.
    #[error("failed to write {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // === Discovery Errors ===
    /// File name pattern could not be compiled.
    #[error("invalid file pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::Io { path, source }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/parte_001.geojson"),
        };
        assert_eq!(err.to_string(), "file not found: /data/parte_001.geojson");
    }

    #[test]
    fn test_not_found_io_error_maps_to_file_not_found() {
        let source = std::io::Error::from(std::io::ErrorKind::NotFound);
        let err = IngestError::io("missing.geojson", source);
        assert!(matches!(err, IngestError::FileNotFound { .. }));

        let source = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
        let err = IngestError::io("locked.geojson", source);
        assert!(matches!(err, IngestError::Io { .. }));
    }
}
