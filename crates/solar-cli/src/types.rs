use std::path::PathBuf;
use std::time::Duration;

use solar_core::{CleanReport, MergeReport, SplitReport};
use solar_geocode::AnnotateStats;

#[derive(Debug)]
pub struct GeocodeResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub stats: AnnotateStats,
    pub elapsed: Duration,
}

#[derive(Debug)]
pub struct CleanResult {
    pub output: PathBuf,
    pub report: CleanReport,
}

/// What the interactive menu ended up running.
#[derive(Debug)]
pub enum MenuOutcome {
    Split(SplitReport),
    Merge(MergeReport),
}
