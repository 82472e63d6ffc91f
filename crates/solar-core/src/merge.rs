//! Merging chunk files back into a single collection.
//!
//! Files are processed in name order. A file that cannot be read, is not
//! JSON, or is not a `FeatureCollection` is skipped and reported; it never
//! aborts the merge. Collection metadata is taken from the first valid file
//! only.

use std::path::{Path, PathBuf};

use serde::Serialize;
use solar_ingest::{FilePattern, IngestError, list_matching_files, read_collection, write_collection};
use solar_model::{FeatureCollection, GeoJsonError, MergeOptions};
use tracing::{error, info, warn};

use crate::error::{CoreError, Result, same_file};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FileOutcome {
    Merged { features: usize },
    /// Valid JSON that is not a `FeatureCollection`.
    NotFeatureCollection { reason: String },
    /// Unreadable or unparsable file.
    Failed { reason: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct MergedFile {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

impl MergedFile {
    pub fn is_merged(&self) -> bool {
        matches!(self.outcome, FileOutcome::Merged { .. })
    }
}

/// In-memory result of merging a list of files.
#[derive(Debug, Clone)]
pub struct Merged {
    pub collection: FeatureCollection,
    pub files: Vec<MergedFile>,
    /// File the output metadata was copied from.
    pub metadata_source: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MergeReport {
    pub output: PathBuf,
    pub total_features: usize,
    pub files: Vec<MergedFile>,
    pub metadata_source: Option<PathBuf>,
}

impl MergeReport {
    pub fn merged_count(&self) -> usize {
        self.files.iter().filter(|file| file.is_merged()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.files.len() - self.merged_count()
    }
}

/// Concatenate the features of `paths`, in the given order.
pub fn merge_files(paths: &[PathBuf]) -> Merged {
    let mut features = Vec::new();
    let mut metadata = None;
    let mut metadata_source = None;
    let mut files = Vec::with_capacity(paths.len());

    for path in paths {
        let outcome = match read_collection(path) {
            Ok(collection) => {
                let count = collection.len();
                let (chunk_features, chunk_metadata) = collection.into_parts();
                features.extend(chunk_features);
                if metadata.is_none() {
                    metadata = Some(chunk_metadata);
                    metadata_source = Some(path.clone());
                }
                info!(path = %path.display(), features = count, "merged file");
                FileOutcome::Merged { features: count }
            }
            Err(IngestError::InvalidFormat { source, .. }) => {
                warn!(
                    path = %path.display(),
                    reason = %source,
                    "not a FeatureCollection, skipping"
                );
                FileOutcome::NotFeatureCollection {
                    reason: skip_reason(&source),
                }
            }
            Err(err) => {
                error!(path = %path.display(), error = %err, "failed to process file, skipping");
                FileOutcome::Failed {
                    reason: err.to_string(),
                }
            }
        };
        files.push(MergedFile {
            path: path.clone(),
            outcome,
        });
    }

    Merged {
        collection: FeatureCollection::new(features).with_metadata(metadata.unwrap_or_default()),
        files,
        metadata_source,
    }
}

/// Merge every file of `options.input_dir` matching `options.pattern` into
/// `options.output`.
pub fn merge_directory(options: &MergeOptions) -> Result<MergeReport> {
    let pattern = FilePattern::new(&options.pattern)?;
    let mut paths = list_matching_files(&options.input_dir, &pattern)?;
    // Never merge a previous run's output into itself.
    paths.retain(|path| !same_file(path, &options.output));
    if paths.is_empty() {
        return Err(CoreError::NoInputFiles {
            dir: options.input_dir.clone(),
            pattern: options.pattern.clone(),
        });
    }
    info!(
        dir = %options.input_dir.display(),
        pattern = %options.pattern,
        file_count = paths.len(),
        "merging files"
    );

    let merged = merge_files(&paths);
    write_output(&options.output, &merged.collection)?;
    info!(
        output = %options.output.display(),
        total_features = merged.collection.len(),
        "merge complete"
    );

    Ok(MergeReport {
        output: options.output.clone(),
        total_features: merged.collection.len(),
        files: merged.files,
        metadata_source: merged.metadata_source,
    })
}

fn write_output(path: &Path, collection: &FeatureCollection) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| CoreError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    write_collection(path, collection)?;
    Ok(())
}

fn skip_reason(error: &GeoJsonError) -> String {
    match error {
        GeoJsonError::InvalidFormat { found } => format!("type is {found}"),
        other => other.to_string(),
    }
}
