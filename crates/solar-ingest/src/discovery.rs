//! Chunk file discovery for merge inputs.

use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::trace;

use crate::error::{IngestError, Result};

/// Shell-style file name pattern (`*`, `?`, `[abc]`, `[!abc]`, `[a-z]`).
///
/// Matches the file name only, never the directory part. As with shell
/// globbing, names starting with `.` only match patterns starting with `.`.
#[derive(Debug, Clone)]
pub struct FilePattern {
    pattern: String,
    regex: Regex,
}

impl FilePattern {
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(&glob_to_regex(pattern)).map_err(|e| {
            IngestError::InvalidPattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            }
        })?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    pub fn matches(&self, file_name: &str) -> bool {
        if file_name.starts_with('.') && !self.pattern.starts_with('.') {
            return false;
        }
        self.regex.is_match(file_name)
    }
}

/// Lists the files of `dir` whose name matches `pattern`.
///
/// Returns files sorted by filename. Subdirectories are never returned.
pub fn list_matching_files(dir: &Path, pattern: &FilePattern) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();

        // Skip directories
        if !path.is_file() {
            continue;
        }

        let matched = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| pattern.matches(name));

        if matched {
            files.push(path);
        } else {
            trace!(path = %path.display(), pattern = pattern.as_str(), "file does not match");
        }
    }

    // Sort by filename
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

fn glob_to_regex(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut regex = String::with_capacity(pattern.len() + 8);
    regex.push('^');
    let mut index = 0;
    while index < chars.len() {
        match chars[index] {
            '*' => regex.push_str(".*"),
            '?' => regex.push('.'),
            '[' => match class_end(&chars, index) {
                Some(end) => {
                    regex.push_str(&translate_class(&chars[index + 1..end]));
                    index = end;
                }
                // An unclosed bracket is a literal character.
                None => regex.push_str(r"\["),
            },
            other => {
                let mut buf = [0u8; 4];
                regex.push_str(&regex::escape(other.encode_utf8(&mut buf)));
            }
        }
        index += 1;
    }
    regex.push('$');
    regex
}

/// Index of the `]` closing the class opened at `start`.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut body = start + 1;
    if chars.get(body) == Some(&'!') {
        body += 1;
    }
    // A `]` right after the opening bracket is part of the class.
    if chars.get(body) == Some(&']') {
        body += 1;
    }
    chars
        .get(body..)?
        .iter()
        .position(|&c| c == ']')
        .map(|offset| body + offset)
}

fn translate_class(body: &[char]) -> String {
    let mut class = String::from("[");
    let body = match body.split_first() {
        Some(('!', rest)) => {
            class.push('^');
            rest
        }
        _ => body,
    };
    for &c in body {
        if matches!(c, '\\' | '[' | ']' | '^' | '&' | '~') {
            class.push('\\');
        }
        class.push(c);
    }
    class.push(']');
    class
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn pattern(value: &str) -> FilePattern {
        FilePattern::new(value).unwrap()
    }

    #[test]
    fn test_star_and_question_mark() {
        assert!(pattern("*.geojson").matches("parte_001.geojson"));
        assert!(!pattern("*.geojson").matches("parte_001.json"));
        assert!(pattern("parte_00?.geojson").matches("parte_007.geojson"));
        assert!(!pattern("parte_00?.geojson").matches("parte_010.geojson"));
    }

    #[test]
    fn test_literal_dots_are_escaped() {
        assert!(!pattern("*.geojson").matches("parte_001xgeojson"));
    }

    #[test]
    fn test_character_classes() {
        assert!(pattern("parte_[0-1]*").matches("parte_101.geojson"));
        assert!(!pattern("parte_[!0]*").matches("parte_001.geojson"));
        assert!(pattern("parte_[!0]*").matches("parte_101.geojson"));
        assert!(pattern("a[]]b").matches("a]b"));
        assert!(pattern("a[b").matches("a[b"));
    }

    #[test]
    fn test_hidden_files_need_explicit_dot() {
        assert!(!pattern("*.geojson").matches(".parte.geojson"));
        assert!(pattern(".*.geojson").matches(".parte.geojson"));
    }

    #[test]
    fn test_invalid_range_is_reported() {
        let err = FilePattern::new("[z-a]").unwrap_err();
        assert!(matches!(err, IngestError::InvalidPattern { .. }));
    }

    #[test]
    fn test_list_matching_files_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        for name in ["parte_002.geojson", "parte_001.geojson", "notes.txt"] {
            std::fs::write(dir.path().join(name), "{}").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.geojson")).unwrap();

        let files = list_matching_files(dir.path(), &pattern("*.geojson")).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["parte_001.geojson", "parte_002.geojson"]);
    }

    #[test]
    fn test_missing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent");
        let err = list_matching_files(&missing, &pattern("*")).unwrap_err();
        assert!(matches!(err, IngestError::DirectoryNotFound { .. }));
    }
}
