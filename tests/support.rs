use std::fs;
use std::path::Path;

use anchor_windows::ir::{SentenceTable, WindowRecord};

/// Six reserved leading columns, three anchor words, one trailing total.
pub const HEADER: [&str; 10] = [
    "row_id",
    "accession_num",
    "sent_pkey",
    "sentences",
    "cik",
    "filing_date",
    "positive",
    "strong",
    "gain",
    "total_matches",
];

pub fn row(accession_num: &str, sent_pkey: &str, sentence: &str, matches: [u32; 3]) -> Vec<String> {
    let total: u32 = matches.iter().sum();
    let mut fields = vec![
        "0".to_string(),
        accession_num.to_string(),
        sent_pkey.to_string(),
        sentence.to_string(),
        "320193".to_string(),
        "2020-10-30".to_string(),
    ];
    fields.extend(matches.iter().map(|count| count.to_string()));
    fields.push(total.to_string());
    fields
}

pub fn sentence_table(rows: Vec<Vec<String>>) -> SentenceTable {
    SentenceTable::new(HEADER.iter().map(|c| c.to_string()).collect(), rows)
}

pub fn write_table(path: &Path, delimiter: char, table: &SentenceTable) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let mut contents = String::new();
    let separator = delimiter.to_string();
    contents.push_str(&table.columns.join(&separator));
    contents.push('\n');
    for row in &table.rows {
        let quoted: Vec<String> = row
            .iter()
            .map(|field| {
                if field.contains(delimiter) || field.contains('"') {
                    format!("\"{}\"", field.replace('"', "\"\""))
                } else {
                    field.clone()
                }
            })
            .collect();
        contents.push_str(&quoted.join(&separator));
        contents.push('\n');
    }
    fs::write(path, contents).unwrap();
}

pub fn tokens(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(' ').map(str::to_string).collect()
}

pub fn window(sent_pkey: &str, left: &str, right: &str) -> WindowRecord {
    WindowRecord {
        accession_num: "0000320193-20-000096".to_string(),
        sent_pkey: sent_pkey.to_string(),
        sentences: String::new(),
        sentences_tok: Vec::new(),
        anchor_word_pos: 0,
        window_left: tokens(left),
        anchor_word: "strong".to_string(),
        window_right: tokens(right),
        window_pkey: String::new(),
        window_word_cnt: 0,
    }
}
