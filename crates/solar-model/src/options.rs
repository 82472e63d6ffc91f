//! Configuration options for the split, merge and annotate commands.

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default chunk file prefix.
pub const DEFAULT_PREFIX: &str = "parte";
/// Default directory that receives chunk files.
pub const DEFAULT_SPLIT_DIR: &str = "geojson_divididos";
/// Extension used for every file the toolkit writes.
pub const GEOJSON_EXTENSION: &str = "geojson";
/// Default merged output file name.
pub const DEFAULT_MERGE_OUTPUT: &str = "geojson_completo.geojson";
/// Default file name pattern for merge input discovery.
pub const DEFAULT_MERGE_PATTERN: &str = "*.geojson";

/// Pause between two geocoding requests (provider usage policy).
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_millis(1200);
/// Timeout applied to a single geocoding request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Options for splitting a collection into chunk files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitOptions {
    /// Maximum number of features per chunk.
    pub chunk_size: NonZeroUsize,
    /// File name prefix; chunks are named `{prefix}_{NNN}.{extension}`.
    pub prefix: String,
    /// Directory receiving the chunk files (created when absent).
    pub output_dir: PathBuf,
    pub extension: String,
}

impl SplitOptions {
    pub fn new(chunk_size: NonZeroUsize) -> Self {
        Self {
            chunk_size,
            prefix: DEFAULT_PREFIX.to_string(),
            output_dir: PathBuf::from(DEFAULT_SPLIT_DIR),
            extension: GEOJSON_EXTENSION.to_string(),
        }
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}

/// Options for merging chunk files back into one collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeOptions {
    /// Directory scanned for input files.
    pub input_dir: PathBuf,
    /// Shell-style file name pattern (`*`, `?`, `[...]`).
    pub pattern: String,
    /// Destination of the merged collection.
    pub output: PathBuf,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            pattern: DEFAULT_MERGE_PATTERN.to_string(),
            output: PathBuf::from(DEFAULT_MERGE_OUTPUT),
        }
    }
}

impl MergeOptions {
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }
}

/// Options for the geocoding annotation pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotateOptions {
    /// Pause enforced after every geocoding request.
    pub request_delay: Duration,
    /// Store the normalized "street + number" form instead of the raw address.
    pub normalize: bool,
}

impl Default for AnnotateOptions {
    fn default() -> Self {
        Self {
            request_delay: DEFAULT_REQUEST_DELAY,
            normalize: false,
        }
    }
}

impl AnnotateOptions {
    #[must_use]
    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }

    #[must_use]
    pub fn with_normalize(mut self, enable: bool) -> Self {
        self.normalize = enable;
        self
    }
}
