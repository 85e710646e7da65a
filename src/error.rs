use std::path::PathBuf;

use thiserror::Error;

use crate::ir::WindowTable;

/// Reserved leading columns in a sentence table.
pub const LEADING_RESERVED_COLUMNS: usize = 6;
/// Smallest table shape: six leading reserved columns plus one trailing.
pub const MIN_COLUMNS: usize = LEADING_RESERVED_COLUMNS + 1;

#[derive(Debug, Error)]
pub enum WindowError {
    #[error("input table has {found} columns; at least {MIN_COLUMNS} are required")]
    InvalidInputShape { found: usize },

    #[error("input table is missing required column '{0}'")]
    MissingColumn(String),

    #[error("row {row} has {found} fields; the header has {expected}")]
    MalformedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row}: indicator column '{column}' is not numeric: {value:?}")]
    InvalidIndicator {
        row: usize,
        column: String,
        value: String,
    },

    #[error("failed to write windows to {}", path.display())]
    Persist {
        path: PathBuf,
        windows: WindowTable,
        #[source]
        source: anyhow::Error,
    },
}

impl WindowError {
    /// Windows computed before the failure, if the error carries any.
    pub fn into_windows(self) -> Option<WindowTable> {
        match self {
            WindowError::Persist { windows, .. } => Some(windows),
            _ => None,
        }
    }
}
