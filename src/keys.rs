use std::collections::HashMap;

use crate::cli::{KeyMode, WordCountMode};
use crate::ir::WindowRecord;

/// Sets `window_pkey` to `{sent_pkey}-{n}` in table order.
pub fn assign_window_pkeys(records: &mut [WindowRecord], mode: KeyMode) {
    match mode {
        KeyMode::RunLength => {
            let mut previous: Option<String> = None;
            let mut count = 0usize;
            for record in records.iter_mut() {
                if previous.as_deref() == Some(record.sent_pkey.as_str()) {
                    count += 1;
                } else {
                    count = 1;
                    previous = Some(record.sent_pkey.clone());
                }
                record.window_pkey = format!("{}-{}", record.sent_pkey, count);
            }
        }
        KeyMode::PerSentence => {
            let mut counts: HashMap<String, usize> = HashMap::new();
            for record in records.iter_mut() {
                let count = counts.entry(record.sent_pkey.clone()).or_default();
                *count += 1;
                record.window_pkey = format!("{}-{}", record.sent_pkey, count);
            }
        }
    }
}

pub fn assign_word_counts(records: &mut [WindowRecord], mode: WordCountMode) {
    for record in records.iter_mut() {
        record.window_word_cnt =
            window_len(&record.window_left, mode) + window_len(&record.window_right, mode);
    }
}

/// Legacy counting splits the comma-joined window, so an empty window is one
/// empty element.
pub fn window_len(window: &[String], mode: WordCountMode) -> usize {
    match mode {
        WordCountMode::Legacy => window.join(",").split(',').count(),
        WordCountMode::Exact => window.len(),
    }
}
