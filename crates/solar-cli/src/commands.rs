use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, info_span};

use solar_cli::prompt::{MenuChoice, Prompter};
use solar_core::{MergeReport, SplitReport, clean_file, ensure_distinct_output, merge_directory, split_file};
use solar_geocode::{Annotator, NominatimClient, NominatimConfig, estimated_duration};
use solar_ingest::{read_collection, write_collection};
use solar_model::{AnnotateOptions, GEOJSON_EXTENSION, MergeOptions, SplitOptions};

use crate::cli::{CleanArgs, GeocodeArgs, MergeArgs, SplitArgs};
use crate::types::{CleanResult, GeocodeResult, MenuOutcome};

pub fn run_split(args: &SplitArgs) -> Result<SplitReport> {
    let options = SplitOptions::new(args.chunk_size)
        .with_prefix(&args.prefix)
        .with_output_dir(&args.output_dir);
    split_with(&args.input, &options)
}

fn split_with(input: &Path, options: &SplitOptions) -> Result<SplitReport> {
    let span = info_span!(
        "split",
        input = %input.display(),
        chunk_size = options.chunk_size.get()
    );
    let _enter = span.enter();
    let start = Instant::now();
    let report =
        split_file(input, options).with_context(|| format!("split {}", input.display()))?;
    info!(
        total_features = report.total_features,
        chunk_count = report.chunks.len(),
        duration_ms = start.elapsed().as_millis(),
        "split complete"
    );
    Ok(report)
}

pub fn run_merge(args: &MergeArgs) -> Result<MergeReport> {
    let options = MergeOptions::new(&args.input_dir)
        .with_output(&args.output)
        .with_pattern(&args.pattern);
    merge_with(&options)
}

fn merge_with(options: &MergeOptions) -> Result<MergeReport> {
    let span = info_span!(
        "merge",
        input_dir = %options.input_dir.display(),
        pattern = %options.pattern
    );
    let _enter = span.enter();
    let start = Instant::now();
    let report = merge_directory(options)
        .with_context(|| format!("merge {}", options.input_dir.display()))?;
    info!(
        file_count = report.files.len(),
        skipped = report.skipped_count(),
        total_features = report.total_features,
        duration_ms = start.elapsed().as_millis(),
        "merge complete"
    );
    Ok(report)
}

pub fn run_geocode(args: &GeocodeArgs) -> Result<GeocodeResult> {
    let span = info_span!("geocode", input = %args.input.display());
    let _enter = span.enter();

    let mut collection = read_collection(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;
    if collection.is_empty() {
        bail!("{} has no features", args.input.display());
    }
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| derived_output(&args.input, "-direcciones"));
    ensure_distinct_output(&args.input, &output)?;

    let config = NominatimConfig::default()
        .with_endpoint(&args.endpoint)
        .with_user_agent(&args.user_agent)
        .with_timeout(Duration::from_secs(args.timeout_secs))
        .with_language(args.language.clone());
    let client = NominatimClient::new(config).context("create geocoding client")?;
    let options = AnnotateOptions::default()
        .with_request_delay(Duration::from_millis(args.delay_ms))
        .with_normalize(args.normalize);
    info!(
        feature_count = collection.len(),
        estimated_secs = estimated_duration(collection.len(), options.request_delay).as_secs(),
        "geocoding features"
    );

    let start = Instant::now();
    let progress = progress_bar(collection.len())?;
    let mut errors = 0usize;
    let annotator = Annotator::new(client, options);
    let stats = annotator.annotate(&mut collection, |_, outcome| {
        if outcome.is_error() {
            errors += 1;
            progress.set_message(format!("{errors} errors"));
        }
        progress.inc(1);
    });
    progress.finish_and_clear();

    write_collection(&output, &collection)
        .with_context(|| format!("write {}", output.display()))?;
    info!(
        success = stats.success,
        no_address = stats.no_address,
        errors = stats.errors(),
        duration_ms = start.elapsed().as_millis(),
        "geocode complete"
    );
    Ok(GeocodeResult {
        input: args.input.clone(),
        output,
        stats,
        elapsed: start.elapsed(),
    })
}

pub fn run_clean(args: &CleanArgs) -> Result<CleanResult> {
    let span = info_span!("clean", input = %args.input.display());
    let _enter = span.enter();
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| derived_output(&args.input, "_opt"));
    let report = clean_file(&args.input, &output, args.samples)
        .with_context(|| format!("clean {}", args.input.display()))?;
    info!(total = report.total, modified = report.modified, "clean complete");
    Ok(CleanResult { output, report })
}

pub fn run_menu() -> Result<MenuOutcome> {
    let cwd = std::env::current_dir().context("resolve current directory")?;
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    match prompter.menu_choice()? {
        MenuChoice::Split => {
            let request = prompter.split_request()?;
            split_with(&request.input, &request.options).map(MenuOutcome::Split)
        }
        MenuChoice::Merge => {
            let options = prompter.merge_request(&cwd)?;
            merge_with(&options).map(MenuOutcome::Merge)
        }
    }
}

/// `{stem}{suffix}.geojson` next to `input`.
fn derived_output(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "output".into(), |stem| stem.to_string_lossy());
    input.with_file_name(format!("{stem}{suffix}.{GEOJSON_EXTENSION}"))
}

fn progress_bar(len: usize) -> Result<ProgressBar> {
    let bar = ProgressBar::new(len as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} eta {eta} {msg}")?
            .progress_chars("=> "),
    );
    bar.enable_steady_tick(Duration::from_millis(200));
    Ok(bar)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_output_sits_next_to_input() {
        assert_eq!(
            derived_output(Path::new("data/badajoz.geojson"), "-direcciones"),
            PathBuf::from("data/badajoz-direcciones.geojson")
        );
        assert_eq!(
            derived_output(Path::new("caceres.json"), "_opt"),
            PathBuf::from("caceres_opt.geojson")
        );
    }
}
