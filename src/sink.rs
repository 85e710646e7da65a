use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::WriterBuilder;
use tracing::{info, warn};

use crate::config::{RunConfig, WINDOWS_SUBFOLDER};
use crate::ir::WindowTable;

/// Destination for a finished window table.
pub trait WindowSink {
    /// Where a table called `name` would be written.
    fn destination(&self, name: &str) -> PathBuf;

    fn write(&self, name: &str, table: &WindowTable) -> Result<PathBuf>;
}

/// Pipe-delimited files under `{dir_output}/{project_folder}/anchor_word_windows`.
#[derive(Debug, Clone)]
pub struct CsvSink {
    project_dir: PathBuf,
}

impl CsvSink {
    pub fn new(dir_output: &Path, project_folder: &str) -> Self {
        Self {
            project_dir: dir_output.join(project_folder),
        }
    }

    pub fn from_config(config: &RunConfig) -> Self {
        Self::new(&config.dir_output, &config.project_folder)
    }
}

impl WindowSink for CsvSink {
    fn destination(&self, name: &str) -> PathBuf {
        self.project_dir
            .join(WINDOWS_SUBFOLDER)
            .join(format!("{name}.csv"))
    }

    fn write(&self, name: &str, table: &WindowTable) -> Result<PathBuf> {
        fs::create_dir_all(&self.project_dir)
            .with_context(|| format!("failed to create {}", self.project_dir.display()))?;
        create_project_folder(&self.project_dir, WINDOWS_SUBFOLDER)?;

        let path = self.destination(name);
        write_pipe_delimited(&path, table)?;
        info!(file = %path.display(), rows = table.len(), "window table written");
        Ok(path)
    }
}

/// Creates `dir_output/name`; an existing folder is only logged.
pub fn create_project_folder(dir_output: &Path, name: &str) -> Result<PathBuf> {
    let path = dir_output.join(name);
    match fs::create_dir(&path) {
        Ok(()) => info!(path = %path.display(), "project folder created"),
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
            warn!(name, "directory already exists");
        }
        Err(err) => {
            return Err(err).with_context(|| format!("failed to create {}", path.display()));
        }
    }
    Ok(path)
}

fn write_pipe_delimited(path: &Path, table: &WindowTable) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(b'|')
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writer.write_record(WindowTable::COLUMNS)?;
    for record in &table.records {
        writer
            .serialize(record)
            .with_context(|| format!("failed to write {}", record.window_pkey))?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;
    Ok(())
}
