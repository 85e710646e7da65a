use tracing::info;

use crate::config::RunConfig;
use crate::error::WindowError;
use crate::ir::{BatchOutput, SentenceTable, WindowTable};
use crate::keys::{assign_window_pkeys, assign_word_counts};
use crate::sink::WindowSink;
use crate::table::{TableLayout, match_count};
use crate::window::extract_windows;

/// Extracts a window for every anchor word occurrence in `table`, keys and
/// counts them, then hands the result to `sink` when `write2file` is set.
///
/// Rows are visited in input order and anchor words in column order, so the
/// output keeps (row, anchor column, occurrence) order. A sink failure comes
/// back as [`WindowError::Persist`] carrying the computed windows.
pub fn run(
    table: &SentenceTable,
    config: &RunConfig,
    sink: &dyn WindowSink,
) -> Result<BatchOutput, WindowError> {
    let layout = TableLayout::of(table)?;
    let mut records = Vec::new();

    for (index, row) in table.rows.iter().enumerate() {
        if row.len() != table.columns.len() {
            return Err(WindowError::MalformedRow {
                row: index + 1,
                expected: table.columns.len(),
                found: row.len(),
            });
        }
        let cell = |column: usize| row[column].as_str();
        let accession_num = cell(layout.accession_num);
        let sent_pkey = cell(layout.sent_pkey);
        let sentence = cell(layout.sentences);

        for column in layout.indicators.clone() {
            let value = cell(column);
            let count = match_count(value).ok_or_else(|| WindowError::InvalidIndicator {
                row: index + 1,
                column: table.columns[column].clone(),
                value: value.to_string(),
            })?;
            if count <= 0.0 || count.is_nan() {
                continue;
            }

            let anchor_word = &table.columns[column];
            records.extend(extract_windows(
                accession_num,
                sent_pkey,
                sentence,
                anchor_word,
                config.window_width,
            ));
        }
    }

    assign_window_pkeys(&mut records, config.pkey_mode);
    info!(
        table = %format!("{}_windows", config.anchor_word_source.to_lowercase()),
        "primary key created"
    );
    assign_word_counts(&mut records, config.word_count);

    let windows = WindowTable { records };
    info!(
        sentences = table.rows.len(),
        windows = windows.len(),
        "anchor word windows extracted"
    );

    let output_path = if config.write2file {
        let name = config.output_name();
        match sink.write(&name, &windows) {
            Ok(path) => Some(path),
            Err(source) => {
                return Err(WindowError::Persist {
                    path: sink.destination(&name),
                    windows,
                    source,
                });
            }
        }
    } else {
        None
    };

    Ok(BatchOutput {
        windows,
        sentences_processed: table.rows.len(),
        output_path,
    })
}
