use std::fs;
use std::path::PathBuf;

use anchor_windows::cli::{ExtractArgs, KeyMode, WordCountMode};
use anchor_windows::config::RunConfig;
use tempfile::TempDir;

fn args() -> ExtractArgs {
    ExtractArgs {
        input: PathBuf::from("sentences.csv"),
        delimiter: ',',
        ..ExtractArgs::default()
    }
}

#[test]
fn parses_inline_json_with_defaults() {
    let config = RunConfig::from_arg(Some(r#"{"anchor_word_source": "negative", "pkey_mode": "per-sentence"}"#))
        .unwrap()
        .unwrap();

    assert_eq!(config.anchor_word_source, "negative");
    assert_eq!(config.pkey_mode, KeyMode::PerSentence);
    assert_eq!(config.window_width, 10);
    assert!(config.write2file);
    assert_eq!(config.word_count, WordCountMode::Legacy);
}

#[test]
fn reads_json_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("run.json");
    fs::write(&path, r#"{"anchor_word_source": "legal", "window_width": 4}"#).unwrap();

    let config = RunConfig::from_arg(path.to_str()).unwrap().unwrap();
    assert_eq!(config.anchor_word_source, "legal");
    assert_eq!(config.window_width, 4);
}

#[test]
fn blank_or_missing_config_is_none() {
    assert!(RunConfig::from_arg(None).unwrap().is_none());
    assert!(RunConfig::from_arg(Some("  ")).unwrap().is_none());
}

#[test]
fn missing_config_file_errors() {
    assert!(RunConfig::from_arg(Some("/nonexistent/run.json")).is_err());
}

#[test]
fn flags_override_config() {
    let mut args = args();
    args.config = Some(r#"{"anchor_word_source": "legal", "window_width": 4, "write2file": true}"#.to_string());
    args.window_width = Some(6);
    args.write2file = Some(false);
    args.word_count = Some(WordCountMode::Exact);

    let config = RunConfig::resolve(&args).unwrap();
    assert_eq!(config.anchor_word_source, "legal");
    assert_eq!(config.window_width, 6);
    assert!(!config.write2file);
    assert_eq!(config.word_count, WordCountMode::Exact);
}

#[test]
fn requires_anchor_word_source() {
    assert!(RunConfig::resolve(&args()).is_err());
}

#[test]
fn names_output_after_source_and_width() {
    let mut args = args();
    args.anchor_word_source = Some("positive".to_string());
    args.window_width = Some(5);
    args.dir_output = Some(PathBuf::from("out"));
    args.project_folder = Some("filings".to_string());

    let config = RunConfig::resolve(&args).unwrap();
    assert_eq!(config.output_name(), "positive_anchor_words_windows_size_5");
    assert_eq!(config.project_dir(), PathBuf::from("out").join("filings"));
}
