//! CLI entry point for the chord cheat sheet generator

use chordsheet::io::cli::{Cli, SheetProcessor};
use clap::Parser;

fn main() -> chordsheet::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .format_timestamp(None)
        .init();
    let processor = SheetProcessor::new(cli);
    processor.process()
}
