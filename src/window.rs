use tracing::debug;

use crate::clean::{clean_sentence, tokenize};
use crate::ir::WindowRecord;

/// One record per occurrence of `anchor_word` as an exact token of the
/// lower-cased, cleaned sentence. Multi-word anchors never match.
pub fn extract_windows(
    accession_num: &str,
    sent_pkey: &str,
    sentence: &str,
    anchor_word: &str,
    window_width: usize,
) -> Vec<WindowRecord> {
    let tokens = tokenize(&clean_sentence(&sentence.to_lowercase()), false);
    let positions = anchor_positions(&tokens, anchor_word);
    debug!(sent_pkey, anchor_word, ?positions, "anchor positions");

    positions
        .into_iter()
        .map(|pos| {
            let (left, right) = window_bounds(pos, window_width, tokens.len());
            let window_left = tokens[left..pos].to_vec();
            let window_right = tokens[pos + 1..right].to_vec();
            debug!(?window_left, anchor_word, ?window_right, "window");

            WindowRecord {
                accession_num: accession_num.to_string(),
                sent_pkey: sent_pkey.to_string(),
                sentences: sentence.to_string(),
                sentences_tok: tokens.clone(),
                anchor_word_pos: pos,
                window_left,
                anchor_word: anchor_word.to_string(),
                window_right,
                window_pkey: String::new(),
                window_word_cnt: 0,
            }
        })
        .collect()
}

pub fn anchor_positions(tokens: &[String], anchor_word: &str) -> Vec<usize> {
    tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| *token == anchor_word)
        .map(|(index, _)| index)
        .collect()
}

/// Returns `(left_start, right_end)` for the slices `[left_start, pos)` and
/// `[pos + 1, right_end)`.
///
/// The right bound is `pos + width + 1` when `pos + width <= len` and `len`
/// otherwise, then clamped to `len` the way a sequence slice clamps. The
/// addition saturates, so any width is accepted.
pub fn window_bounds(pos: usize, width: usize, len: usize) -> (usize, usize) {
    let left = pos.saturating_sub(width);
    let reach = pos.saturating_add(width);
    let right = if reach <= len { reach + 1 } else { len };
    (left, right.min(len))
}
