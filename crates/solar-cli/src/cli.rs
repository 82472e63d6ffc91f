//! Command-line argument definitions for `solar-geojson`.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use solar_cli::prompt::parse_chunk_size;
use solar_geocode::{DEFAULT_ENDPOINT, DEFAULT_USER_AGENT};
use solar_model::{DEFAULT_MERGE_OUTPUT, DEFAULT_MERGE_PATTERN, DEFAULT_PREFIX, DEFAULT_SPLIT_DIR};

#[derive(Parser)]
#[command(
    name = "solar-geojson",
    version,
    about = "Split, merge and geocode solar-potential GeoJSON files",
    long_about = "Tools for large GeoJSON FeatureCollections of rooftop polygons.\n\n\
                  Split a collection into numbered chunks, merge chunks back, attach a\n\
                  reverse-geocoded street address to every polygon, and clean those\n\
                  addresses into a short \"street number\" form."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags and RUST_LOG).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for humans, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Split a FeatureCollection into fixed-size chunk files.
    Split(SplitArgs),

    /// Merge chunk files from a directory into one FeatureCollection.
    Merge(MergeArgs),

    /// Attach a reverse-geocoded address to every polygon.
    Geocode(GeocodeArgs),

    /// Rewrite stored addresses into "street number" form.
    Clean(CleanArgs),

    /// Interactive split/merge menu.
    Menu,
}

#[derive(Args)]
pub struct SplitArgs {
    /// GeoJSON FeatureCollection to split.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Features per chunk file.
    #[arg(long = "chunk-size", short = 'n', value_name = "N", value_parser = parse_chunk_size)]
    pub chunk_size: NonZeroUsize,

    /// File name prefix of the chunks.
    #[arg(long = "prefix", default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Directory receiving the chunk files.
    #[arg(long = "output-dir", value_name = "DIR", default_value = DEFAULT_SPLIT_DIR)]
    pub output_dir: PathBuf,
}

#[derive(Args)]
pub struct MergeArgs {
    /// Directory containing the files to merge.
    #[arg(value_name = "DIR", default_value = ".")]
    pub input_dir: PathBuf,

    /// Merged output file.
    #[arg(long = "output", short = 'o', value_name = "PATH", default_value = DEFAULT_MERGE_OUTPUT)]
    pub output: PathBuf,

    /// Shell glob selecting input file names (`*`, `?`, `[...]`).
    #[arg(long = "pattern", default_value = DEFAULT_MERGE_PATTERN)]
    pub pattern: String,
}

#[derive(Args)]
pub struct GeocodeArgs {
    /// GeoJSON FeatureCollection of polygons.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (default: <INPUT stem>-direcciones.geojson).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// User agent identifying this client to the geocoding service.
    #[arg(long = "user-agent", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Base URL of the Nominatim service.
    #[arg(long = "endpoint", value_name = "URL", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Pause after every request, in milliseconds.
    #[arg(long = "delay-ms", value_name = "MS", default_value_t = 1200)]
    pub delay_ms: u64,

    /// Per-request timeout, in seconds.
    #[arg(long = "timeout-secs", value_name = "SECS", default_value_t = 15)]
    pub timeout_secs: u64,

    /// Preferred language of returned addresses (e.g. `es`).
    #[arg(long = "language", value_name = "LANG")]
    pub language: Option<String>,

    /// Store the normalized "street number" form instead of the full address.
    #[arg(long = "normalize")]
    pub normalize: bool,
}

#[derive(Args)]
pub struct CleanArgs {
    /// GeoJSON file whose features carry a `direccion` property.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (default: <INPUT stem>_opt.geojson).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Number of rewritten addresses shown in the summary.
    #[arg(long = "samples", value_name = "N", default_value_t = 10)]
    pub samples: usize,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
