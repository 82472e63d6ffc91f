//! Splitting a feature collection into fixed-size chunk files.

use std::num::NonZeroUsize;
use std::ops::Range;
use std::path::{Path, PathBuf};

use serde::Serialize;
use solar_ingest::{read_collection, write_collection};
use solar_model::{FeatureCollection, SplitOptions};
use tracing::{info, warn};

use crate::error::{CoreError, Result};

/// Highest chunk index whose zero-padded name still sorts correctly.
pub const MAX_SORTABLE_CHUNKS: usize = 999;

/// One chunk of a split collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    /// 1-based chunk number.
    pub index: usize,
    /// Half-open feature range of the source collection.
    pub range: Range<usize>,
    pub collection: FeatureCollection,
}

/// A chunk file written to disk.
#[derive(Debug, Clone, Serialize)]
pub struct WrittenChunk {
    pub path: PathBuf,
    pub index: usize,
    pub range: Range<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SplitReport {
    pub total_features: usize,
    pub chunk_size: usize,
    pub output_dir: PathBuf,
    pub chunks: Vec<WrittenChunk>,
}

/// `{prefix}_{index:03}.{extension}`.
pub fn chunk_file_name(prefix: &str, index: usize, extension: &str) -> String {
    format!("{prefix}_{index:03}.{extension}")
}

/// 1-based chunk numbers with their half-open ranges over `total` features.
pub fn chunk_ranges(
    total: usize,
    chunk_size: NonZeroUsize,
) -> impl Iterator<Item = (usize, Range<usize>)> {
    let size = chunk_size.get();
    (0..total.div_ceil(size)).map(move |i| (i + 1, i * size..total.min((i + 1) * size)))
}

/// Partition a collection in memory. Every chunk carries a copy of the
/// source metadata.
pub fn split_collection(collection: &FeatureCollection, chunk_size: NonZeroUsize) -> Vec<Chunk> {
    chunk_ranges(collection.len(), chunk_size)
        .map(|(index, range)| Chunk {
            index,
            collection: build_chunk(collection, range.clone()),
            range,
        })
        .collect()
}

/// Read `input` and write its chunks according to `options`.
pub fn split_file(input: &Path, options: &SplitOptions) -> Result<SplitReport> {
    let collection = read_collection(input)?;
    split_to_dir(&collection, options)
}

/// Write the chunks of `collection` into `options.output_dir`.
///
/// An empty collection writes nothing and does not create the directory.
pub fn split_to_dir(collection: &FeatureCollection, options: &SplitOptions) -> Result<SplitReport> {
    let total = collection.len();
    let mut report = SplitReport {
        total_features: total,
        chunk_size: options.chunk_size.get(),
        output_dir: options.output_dir.clone(),
        chunks: Vec::new(),
    };
    if total == 0 {
        info!("collection has no features, nothing to split");
        return Ok(report);
    }

    let chunk_count = total.div_ceil(options.chunk_size.get());
    info!(
        total_features = total,
        chunk_count,
        chunk_size = options.chunk_size.get(),
        "splitting collection"
    );
    if chunk_count > MAX_SORTABLE_CHUNKS {
        warn!(
            chunk_count,
            "more than {MAX_SORTABLE_CHUNKS} chunks: file names past {} will not sort in order",
            chunk_file_name(&options.prefix, MAX_SORTABLE_CHUNKS, &options.extension)
        );
    }

    std::fs::create_dir_all(&options.output_dir).map_err(|source| CoreError::CreateDir {
        path: options.output_dir.clone(),
        source,
    })?;

    for (index, range) in chunk_ranges(total, options.chunk_size) {
        let path = options
            .output_dir
            .join(chunk_file_name(&options.prefix, index, &options.extension));
        // Built one at a time so only a single chunk copy is alive.
        let chunk = build_chunk(collection, range.clone());
        write_collection(&path, &chunk)?;
        info!(
            path = %path.display(),
            first = range.start + 1,
            last = range.end,
            "chunk written"
        );
        report.chunks.push(WrittenChunk { path, index, range });
    }

    Ok(report)
}

fn build_chunk(collection: &FeatureCollection, range: Range<usize>) -> FeatureCollection {
    FeatureCollection::new(collection.features[range].to_vec())
        .with_metadata(collection.metadata().clone())
}
