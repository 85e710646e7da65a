use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::config::RunConfig;
use crate::ir::{BatchOutput, RunManifest, RunSummary};

pub const STATE_DIR: &str = ".anchor_windows";

pub fn build_summary(output: &BatchOutput) -> RunSummary {
    RunSummary {
        sentences_processed: output.sentences_processed,
        windows_emitted: output.windows.len(),
        anchor_words: output.windows.anchor_word_counts(),
        output_path: output.output_path.clone(),
    }
}

pub fn summarize(config: &RunConfig, summary: &RunSummary) -> String {
    let mut output = String::new();
    output.push_str(&format!("Anchor word source: {}\n", config.anchor_word_source));
    output.push_str(&format!("Window width: {}\n", config.window_width));
    output.push_str(&format!(
        "Sentences processed: {}\n",
        summary.sentences_processed
    ));
    output.push_str(&format!("Windows: {}\n", summary.windows_emitted));

    output.push_str("Anchor words:\n");
    if summary.anchor_words.is_empty() {
        output.push_str("  (none)\n");
    } else {
        for (word, count) in &summary.anchor_words {
            output.push_str(&format!("  - {word} ({count})\n"));
        }
    }

    match summary.output_path.as_ref() {
        Some(path) => output.push_str(&format!("Output: {}\n", path.display())),
        None => output.push_str("Output: (not written)\n"),
    }

    output.trim_end().to_string()
}

pub fn write_manifest(
    config: &RunConfig,
    input: &Path,
    summary: &RunSummary,
) -> Result<PathBuf> {
    let state_dir = config.project_dir().join(STATE_DIR);
    fs::create_dir_all(&state_dir)
        .with_context(|| format!("failed to create {}", state_dir.display()))?;

    let manifest = RunManifest {
        version: 1,
        generated_at: now_rfc3339(),
        input: input.to_path_buf(),
        config: config.clone(),
        summary: summary.clone(),
    };

    let path = state_dir.join("manifest.json");
    let json = serde_json::to_vec_pretty(&manifest)?;
    let mut file =
        fs::File::create(&path).with_context(|| format!("failed to write {}", path.display()))?;
    file.write_all(&json)?;
    file.write_all(b"\n")?;

    Ok(path)
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "1970-01-01T00:00:00Z".to_string())
}
