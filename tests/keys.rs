mod support;

use anchor_windows::cli::{KeyMode, WordCountMode};
use anchor_windows::keys::{assign_window_pkeys, assign_word_counts, window_len};
use support::window;

fn pkeys(records: &[anchor_windows::ir::WindowRecord]) -> Vec<&str> {
    records.iter().map(|r| r.window_pkey.as_str()).collect()
}

#[test]
fn run_length_keys_number_repeated_sentences() {
    let mut records = vec![
        window("A-1", "", ""),
        window("A-1", "", ""),
        window("A-1", "", ""),
        window("B-1", "", ""),
    ];
    assign_window_pkeys(&mut records, KeyMode::RunLength);
    assert_eq!(pkeys(&records), vec!["A-1-1", "A-1-2", "A-1-3", "B-1-1"]);
}

#[test]
fn run_length_keys_restart_on_interleaved_sentences() {
    let mut records = vec![window("A-1", "", ""), window("B-1", "", ""), window("A-1", "", "")];
    assign_window_pkeys(&mut records, KeyMode::RunLength);
    assert_eq!(pkeys(&records), vec!["A-1-1", "B-1-1", "A-1-1"]);
}

#[test]
fn per_sentence_keys_stay_unique_when_interleaved() {
    let mut records = vec![window("A-1", "", ""), window("B-1", "", ""), window("A-1", "", "")];
    assign_window_pkeys(&mut records, KeyMode::PerSentence);
    assert_eq!(pkeys(&records), vec!["A-1-1", "B-1-1", "A-1-2"]);
}

#[test]
fn legacy_word_count_counts_empty_window_as_one() {
    let mut records = vec![
        window("A-1", "", "results this"),
        window("A-1", "reported strong", "results this"),
        window("A-1", "", ""),
    ];
    assign_word_counts(&mut records, WordCountMode::Legacy);
    let counts: Vec<usize> = records.iter().map(|r| r.window_word_cnt).collect();
    assert_eq!(counts, vec![3, 4, 2]);
}

#[test]
fn exact_word_count_counts_tokens() {
    let mut records = vec![window("A-1", "", "results this"), window("A-1", "", "")];
    assign_word_counts(&mut records, WordCountMode::Exact);
    let counts: Vec<usize> = records.iter().map(|r| r.window_word_cnt).collect();
    assert_eq!(counts, vec![2, 0]);
}

#[test]
fn window_len_agrees_between_modes_for_non_empty_windows() {
    let tokens = vec!["net".to_string(), "sales".to_string(), "rose".to_string()];
    assert_eq!(window_len(&tokens, WordCountMode::Legacy), 3);
    assert_eq!(window_len(&tokens, WordCountMode::Exact), 3);
}
