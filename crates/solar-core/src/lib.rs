//! Collection-level transformations: split, merge and address cleanup.

pub mod clean;
pub mod error;
pub mod merge;
pub mod split;

pub use clean::{AddressChange, CleanReport, clean_addresses, clean_file, truncate_chars};
pub use error::{CoreError, Result, ensure_distinct_output};
pub use merge::{FileOutcome, MergeReport, Merged, MergedFile, merge_directory, merge_files};
pub use split::{
    Chunk, MAX_SORTABLE_CHUNKS, SplitReport, WrittenChunk, chunk_file_name, chunk_ranges,
    split_collection, split_file, split_to_dir,
};
