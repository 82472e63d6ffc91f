//! Interactive parameter acquisition for the `menu` command.
//!
//! [`Prompter`] reads answers line by line from any [`BufRead`] and writes
//! questions to any [`Write`], so the same flow runs against a terminal or
//! an in-memory script.

use std::io::{self, BufRead, Write};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use solar_model::{DEFAULT_MERGE_OUTPUT, DEFAULT_MERGE_PATTERN, DEFAULT_PREFIX, MergeOptions, SplitOptions};
use thiserror::Error;

const RULE: &str = "==================================================";

#[derive(Debug, Error)]
pub enum PromptError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("input ended before all questions were answered")]
    EndOfInput,

    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("{0}")]
    InvalidChunkSize(String),

    #[error("invalid option '{0}', choose 1 or 2")]
    InvalidChoice(String),
}

pub type Result<T> = std::result::Result<T, PromptError>;

/// Entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Split,
    Merge,
}

/// Answers collected for a split.
#[derive(Debug, Clone)]
pub struct SplitRequest {
    pub input: PathBuf,
    pub options: SplitOptions,
}

/// Parse a positive chunk size.
///
/// # Errors
///
/// Returns a user-facing message for non-integers and zero.
pub fn parse_chunk_size(raw: &str) -> std::result::Result<NonZeroUsize, String> {
    let value: usize = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", raw.trim()))?;
    NonZeroUsize::new(value).ok_or_else(|| "chunk size must be greater than 0".to_string())
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Print `question`, then read one trimmed line.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}: ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::EndOfInput);
        }
        Ok(line.trim().to_string())
    }

    /// Like [`ask`](Self::ask), with `default` for an empty answer.
    pub fn ask_or(&mut self, question: &str, default: &str) -> Result<String> {
        let answer = self.ask(&format!("{question} (press Enter for '{default}')"))?;
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }

    pub fn menu_choice(&mut self) -> Result<MenuChoice> {
        writeln!(self.output, "{RULE}")?;
        writeln!(self.output, "GEOJSON MANAGER")?;
        writeln!(self.output, "{RULE}")?;
        writeln!(self.output, "1. Split a large GeoJSON into smaller parts")?;
        writeln!(self.output, "2. Merge several GeoJSON files into one")?;
        writeln!(self.output, "{RULE}")?;
        match self.ask("Choose an option (1 or 2)")?.as_str() {
            "1" => Ok(MenuChoice::Split),
            "2" => Ok(MenuChoice::Merge),
            other => Err(PromptError::InvalidChoice(other.to_string())),
        }
    }

    /// Ask for the input file, chunk size and prefix.
    pub fn split_request(&mut self) -> Result<SplitRequest> {
        let input = PathBuf::from(self.ask("Path of the GeoJSON file to split")?);
        if !input.is_file() {
            return Err(PromptError::FileNotFound(input));
        }
        let chunk_size = parse_chunk_size(&self.ask("Number of features per file")?)
            .map_err(PromptError::InvalidChunkSize)?;
        let prefix = self.ask_or("File name prefix", DEFAULT_PREFIX)?;
        Ok(SplitRequest {
            input,
            options: SplitOptions::new(chunk_size).with_prefix(prefix),
        })
    }

    /// Ask for the input directory (defaulting to `cwd`), output name and
    /// pattern.
    pub fn merge_request(&mut self, cwd: &Path) -> Result<MergeOptions> {
        let dir = self.ask_or(
            "Directory with the GeoJSON files to merge",
            &cwd.display().to_string(),
        )?;
        let dir = PathBuf::from(dir);
        if !dir.is_dir() {
            return Err(PromptError::DirectoryNotFound(dir));
        }
        let output = self.ask_or("Output file name", DEFAULT_MERGE_OUTPUT)?;
        let pattern = self.ask_or("Search pattern", DEFAULT_MERGE_PATTERN)?;
        Ok(MergeOptions::new(dir)
            .with_output(output)
            .with_pattern(pattern))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_size_parsing() {
        assert_eq!(parse_chunk_size(" 25 ").unwrap().get(), 25);
        assert_eq!(
            parse_chunk_size("0").unwrap_err(),
            "chunk size must be greater than 0"
        );
        assert_eq!(parse_chunk_size("-3").unwrap_err(), "'-3' is not a valid number");
        assert!(parse_chunk_size("diez").is_err());
    }

    #[test]
    fn ask_or_uses_default_on_empty_line() {
        let mut prompter = Prompter::new("\n  custom \n".as_bytes(), Vec::new());
        assert_eq!(prompter.ask_or("Prefix", "parte").unwrap(), "parte");
        assert_eq!(prompter.ask_or("Prefix", "parte").unwrap(), "custom");
        let (_, output) = prompter.into_inner();
        let shown = String::from_utf8(output).unwrap();
        assert!(shown.starts_with("Prefix (press Enter for 'parte'): "));
    }

    #[test]
    fn end_of_input_is_reported() {
        let mut prompter = Prompter::new("".as_bytes(), Vec::new());
        assert!(matches!(prompter.ask("Anything"), Err(PromptError::EndOfInput)));
    }
}
