use anchor_windows::cli::{Cli, Commands};
use anchor_windows::instrument::init_logging;
use anchor_windows::run;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let Commands::Extract(args) = &cli.command;
    init_logging(args.verbose);
    run(cli)
}
