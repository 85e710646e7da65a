use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use csv::ReaderBuilder;
use tracing::info;
use walkdir::WalkDir;

use crate::error::{LEADING_RESERVED_COLUMNS, MIN_COLUMNS, WindowError};
use crate::ir::SentenceTable;

pub const ACCESSION_NUM: &str = "accession_num";
pub const SENT_PKEY: &str = "sent_pkey";
pub const SENTENCES: &str = "sentences";

/// Loads a single file, or every `.csv` file under a directory in path order.
pub fn load_input(path: &Path, delimiter: char) -> Result<SentenceTable> {
    if !path.is_dir() {
        return load_table(path, delimiter);
    }

    let files = chunk_files(path)?;
    if files.is_empty() {
        bail!("no .csv files found in {}", path.display());
    }

    let mut combined: Option<SentenceTable> = None;
    for file in &files {
        let table = load_table(file, delimiter)?;
        match combined.as_mut() {
            None => combined = Some(table),
            Some(existing) => {
                if existing.columns != table.columns {
                    bail!(
                        "header of {} does not match {}",
                        file.display(),
                        files[0].display()
                    );
                }
                existing.rows.extend(table.rows);
            }
        }
    }

    let combined = combined.unwrap_or_default();
    let (rows, columns) = combined.shape();
    info!(files = files.len(), rows, columns, "combined input chunks");
    Ok(combined)
}

pub fn load_table(path: &Path, delimiter: char) -> Result<SentenceTable> {
    info!(path = %path.display(), "loading sentence table");
    let delimiter = u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .with_context(|| format!("delimiter must be a single ASCII character, got {delimiter:?}"))?;

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let columns = reader
        .headers()
        .with_context(|| format!("failed to read header of {}", path.display()))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record =
            record.with_context(|| format!("failed to read row {} of {}", index + 1, path.display()))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    let table = SentenceTable::new(columns, rows);
    let (rows, columns) = table.shape();
    info!(rows, columns, "returning sentence table");
    Ok(table)
}

fn chunk_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("failed to walk {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let extension = entry.path().extension().and_then(|ext| ext.to_str());
        if extension.is_some_and(|ext| ext.eq_ignore_ascii_case("csv")) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Column positions the orchestrator reads from each row.
#[derive(Debug, Clone)]
pub struct TableLayout {
    pub accession_num: usize,
    pub sent_pkey: usize,
    pub sentences: usize,
    /// Every column between the six leading reserved columns and the last one.
    pub indicators: std::ops::Range<usize>,
}

impl TableLayout {
    pub fn of(table: &SentenceTable) -> Result<TableLayout, WindowError> {
        let found = table.columns.len();
        if found < MIN_COLUMNS {
            return Err(WindowError::InvalidInputShape { found });
        }

        let required = |name: &str| {
            table
                .column_index(name)
                .ok_or_else(|| WindowError::MissingColumn(name.to_string()))
        };

        Ok(TableLayout {
            accession_num: required(ACCESSION_NUM)?,
            sent_pkey: required(SENT_PKEY)?,
            sentences: required(SENTENCES)?,
            indicators: LEADING_RESERVED_COLUMNS..found - 1,
        })
    }
}

/// Parses an indicator cell. Empty cells are treated as no match.
pub fn match_count(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok()
}
