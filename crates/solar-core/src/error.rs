use std::path::{Path, PathBuf};

use solar_ingest::IngestError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// Merge found nothing to merge.
    #[error("no files matching '{pattern}' found in {dir}")]
    NoInputFiles { dir: PathBuf, pattern: String },

    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The requested output path points at the input file.
    #[error("refusing to overwrite input file {path}")]
    OutputIsInput { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, CoreError>;

/// Fails when `output` resolves to the same file as `input`.
pub fn ensure_distinct_output(input: &Path, output: &Path) -> Result<()> {
    if same_file(input, output) {
        return Err(CoreError::OutputIsInput {
            path: output.to_path_buf(),
        });
    }
    Ok(())
}

pub(crate) fn same_file(left: &Path, right: &Path) -> bool {
    match (std::fs::canonicalize(left), std::fs::canonicalize(right)) {
        (Ok(left), Ok(right)) => left == right,
        _ => left == right,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn detects_same_file_through_relative_segments() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("parte_001.geojson");
        std::fs::write(&input, "{}").unwrap();
        let aliased = dir.path().join(".").join("parte_001.geojson");

        assert!(matches!(
            ensure_distinct_output(&input, &aliased),
            Err(CoreError::OutputIsInput { .. })
        ));
        assert!(ensure_distinct_output(&input, &dir.path().join("out.geojson")).is_ok());
    }
}
