use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::cli::{ExtractArgs, KeyMode, WordCountMode};

pub const WINDOWS_SUBFOLDER: &str = "anchor_word_windows";

/// Everything a batch run needs, passed explicitly to the orchestrator and sink.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct RunConfig {
    pub anchor_word_source: String,
    pub window_width: usize,
    pub dir_output: PathBuf,
    pub project_folder: String,
    pub write2file: bool,
    pub word_count: WordCountMode,
    pub pkey_mode: KeyMode,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            anchor_word_source: String::new(),
            window_width: 10,
            dir_output: PathBuf::from("output"),
            project_folder: "anchor_windows".to_string(),
            write2file: true,
            word_count: WordCountMode::default(),
            pkey_mode: KeyMode::default(),
        }
    }
}

impl RunConfig {
    /// Accepts either an inline JSON object or a path to a JSON file.
    pub fn from_arg(raw: Option<&str>) -> Result<Option<RunConfig>> {
        let raw = match raw {
            Some(value) => value.trim(),
            None => return Ok(None),
        };
        if raw.is_empty() {
            return Ok(None);
        }
        if let Ok(parsed) = serde_json::from_str::<RunConfig>(raw) {
            return Ok(Some(parsed));
        }
        let path = Path::new(raw);
        let contents = fs::read_to_string(path)
            .with_context(|| format!("read run config from {}", path.display()))?;
        let config: RunConfig =
            serde_json::from_str(&contents).context("parse run config JSON")?;
        Ok(Some(config))
    }

    pub fn resolve(args: &ExtractArgs) -> Result<RunConfig> {
        let mut config = RunConfig::from_arg(args.config.as_deref())?.unwrap_or_default();

        if let Some(source) = args.anchor_word_source.as_ref() {
            config.anchor_word_source = source.clone();
        }
        if let Some(width) = args.window_width {
            config.window_width = width;
        }
        if let Some(dir) = args.dir_output.as_ref() {
            config.dir_output = dir.clone();
        }
        if let Some(folder) = args.project_folder.as_ref() {
            config.project_folder = folder.clone();
        }
        if let Some(write2file) = args.write2file {
            config.write2file = write2file;
        }
        if let Some(mode) = args.word_count {
            config.word_count = mode;
        }
        if let Some(mode) = args.pkey_mode {
            config.pkey_mode = mode;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.anchor_word_source.trim().is_empty() {
            bail!("anchor_word_source is required (use --anchor-word-source or --config)");
        }
        if self.project_folder.trim().is_empty() {
            bail!("project_folder must not be empty");
        }
        Ok(())
    }

    /// `{anchor_word_source}_anchor_words_windows_size_{window_width}`
    pub fn output_name(&self) -> String {
        format!(
            "{}_anchor_words_windows_size_{}",
            self.anchor_word_source, self.window_width
        )
    }

    pub fn project_dir(&self) -> PathBuf {
        self.dir_output.join(&self.project_folder)
    }
}
