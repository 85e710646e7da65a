pub mod batch;
pub mod clean;
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod instrument;
pub mod ir;
pub mod keys;
pub mod sink;
pub mod table;
pub mod window;

use anyhow::{Context, Result};
use cli::{Cli, Commands, ExtractArgs};
use tracing::info;

use crate::config::RunConfig;
use crate::diagnostics::{build_summary, summarize, write_manifest};
use crate::instrument::timed;
use crate::sink::CsvSink;
use crate::table::load_input;

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Extract(args) => extract(&args),
    }
}

pub fn extract(args: &ExtractArgs) -> Result<()> {
    let config = RunConfig::resolve(args)?;
    let table = timed("load_input", || load_input(&args.input, args.delimiter))?;

    let sink = CsvSink::from_config(&config);
    let output = timed("anchor_word_windows", || batch::run(&table, &config, &sink))
        .context("anchor word window extraction failed")?;

    let summary = build_summary(&output);
    if output.output_path.is_some() {
        let manifest = write_manifest(&config, &args.input, &summary)?;
        info!(path = %manifest.display(), "run manifest written");
    }

    println!("{}", summarize(&config, &summary));

    Ok(())
}
