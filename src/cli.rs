use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "anchor-windows")]
#[command(about = "Extract token windows around anchor words in filing sentences", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Extract(ExtractArgs),
}

#[derive(Args, Debug, Default)]
pub struct ExtractArgs {
    /// Delimited sentence table, or a directory of `.csv` chunks.
    #[arg(long)]
    pub input: PathBuf,
    /// Anchor word category label (positive, negative, legal, ...).
    #[arg(long)]
    pub anchor_word_source: Option<String>,
    /// Number of tokens captured on each side of the anchor word.
    #[arg(long)]
    pub window_width: Option<usize>,
    /// Base output directory.
    #[arg(long)]
    pub dir_output: Option<PathBuf>,
    /// Project folder created under the output directory.
    #[arg(long)]
    pub project_folder: Option<String>,
    /// Persist the window table (true/false).
    #[arg(long)]
    pub write2file: Option<bool>,
    /// Input field delimiter.
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,
    /// How empty windows contribute to window_word_cnt.
    #[arg(long, value_enum)]
    pub word_count: Option<WordCountMode>,
    /// How the window_pkey suffix is numbered.
    #[arg(long, value_enum)]
    pub pkey_mode: Option<KeyMode>,
    /// Run configuration as inline JSON or a path to a JSON file.
    #[arg(long)]
    pub config: Option<String>,
    /// Log per-window detail.
    #[arg(long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WordCountMode {
    /// An empty window counts as one word, matching historical output.
    #[default]
    Legacy,
    /// An empty window counts as zero words.
    Exact,
}

#[derive(ValueEnum, Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyMode {
    /// Counter restarts whenever the sent_pkey differs from the previous row.
    #[default]
    RunLength,
    /// Counter is kept per sent_pkey across the whole table.
    PerSentence,
}
