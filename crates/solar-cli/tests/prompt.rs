//! Scripted runs of the interactive menu prompts.

use std::fs;
use std::path::PathBuf;

use solar_cli::prompt::{MenuChoice, PromptError, Prompter};
use tempfile::TempDir;

fn prompter(script: &str) -> Prompter<&[u8], Vec<u8>> {
    Prompter::new(script.as_bytes(), Vec::new())
}

#[test]
fn menu_choices() {
    assert_eq!(prompter("1\n").menu_choice().unwrap(), MenuChoice::Split);
    assert_eq!(prompter(" 2 \n").menu_choice().unwrap(), MenuChoice::Merge);
    assert!(matches!(
        prompter("3\n").menu_choice(),
        Err(PromptError::InvalidChoice(choice)) if choice == "3"
    ));
}

#[test]
fn menu_banner_is_printed() {
    let mut prompter = prompter("1\n");
    prompter.menu_choice().unwrap();
    let (_, output) = prompter.into_inner();
    let shown = String::from_utf8(output).unwrap();
    assert!(shown.contains("1. Split a large GeoJSON into smaller parts"));
    assert!(shown.contains("2. Merge several GeoJSON files into one"));
}

#[test]
fn split_request_with_defaults() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("potencial.geojson");
    fs::write(&input, "{}").unwrap();

    let script = format!("{}\n250\n\n", input.display());
    let request = prompter(&script).split_request().unwrap();

    assert_eq!(request.input, input);
    assert_eq!(request.options.chunk_size.get(), 250);
    assert_eq!(request.options.prefix, "parte");
    assert_eq!(request.options.output_dir, PathBuf::from("geojson_divididos"));
}

#[test]
fn split_request_validates_answers() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("potencial.geojson");
    fs::write(&input, "{}").unwrap();

    let missing = prompter("no-such-file.geojson\n").split_request();
    assert!(matches!(missing, Err(PromptError::FileNotFound(_))));

    let zero = prompter(&format!("{}\n0\n", input.display())).split_request();
    assert!(matches!(
        zero,
        Err(PromptError::InvalidChunkSize(message)) if message == "chunk size must be greater than 0"
    ));

    let text = prompter(&format!("{}\nmuchos\n", input.display())).split_request();
    assert!(matches!(text, Err(PromptError::InvalidChunkSize(_))));
}

#[test]
fn merge_request_defaults_to_working_directory() {
    let dir = TempDir::new().unwrap();

    let options = prompter("\n\n\n").merge_request(dir.path()).unwrap();

    assert_eq!(options.input_dir, dir.path());
    assert_eq!(options.output, PathBuf::from("geojson_completo.geojson"));
    assert_eq!(options.pattern, "*.geojson");
}

#[test]
fn merge_request_custom_answers() {
    let dir = TempDir::new().unwrap();
    let script = format!("{}\ntodo.geojson\nparte_*.geojson\n", dir.path().display());

    let options = prompter(&script).merge_request(&PathBuf::from(".")).unwrap();

    assert_eq!(options.input_dir, dir.path());
    assert_eq!(options.output, PathBuf::from("todo.geojson"));
    assert_eq!(options.pattern, "parte_*.geojson");
}

#[test]
fn merge_request_rejects_missing_directory() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");
    let script = format!("{}\n", missing.display());

    let result = prompter(&script).merge_request(dir.path());
    assert!(matches!(result, Err(PromptError::DirectoryNotFound(path)) if path == missing));
}
