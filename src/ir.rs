use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Serialize, Serializer};

use crate::config::RunConfig;

/// Raw sentence rows as loaded, header included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentenceTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SentenceTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowRecord {
    pub accession_num: String,
    pub sent_pkey: String,
    pub sentences: String,
    #[serde(serialize_with = "join_tokens")]
    pub sentences_tok: Vec<String>,
    pub anchor_word_pos: usize,
    #[serde(serialize_with = "join_tokens")]
    pub window_left: Vec<String>,
    pub anchor_word: String,
    #[serde(serialize_with = "join_tokens")]
    pub window_right: Vec<String>,
    pub window_pkey: String,
    pub window_word_cnt: usize,
}

/// Token sequences are stored comma-joined.
pub fn join_tokens<S: Serializer>(tokens: &[String], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&tokens.join(","))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowTable {
    pub records: Vec<WindowRecord>,
}

impl WindowTable {
    pub const COLUMNS: [&'static str; 10] = [
        "accession_num",
        "sent_pkey",
        "sentences",
        "sentences_tok",
        "anchor_word_pos",
        "window_left",
        "anchor_word",
        "window_right",
        "window_pkey",
        "window_word_cnt",
    ];

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn anchor_word_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.anchor_word.clone()).or_default() += 1;
        }
        counts
    }
}

#[derive(Debug)]
pub struct BatchOutput {
    pub windows: WindowTable,
    pub sentences_processed: usize,
    pub output_path: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct RunManifest {
    pub version: u8,
    pub generated_at: String,
    pub input: PathBuf,
    pub config: RunConfig,
    pub summary: RunSummary,
}

#[derive(Debug, Serialize, Clone)]
pub struct RunSummary {
    pub sentences_processed: usize,
    pub windows_emitted: usize,
    pub anchor_words: BTreeMap<String, usize>,
    pub output_path: Option<PathBuf>,
}
