//! CLI entry point for the tatami layout search

use clap::Parser;
use tatami::io::cli::{Cli, RoomProcessor};

fn main() -> tatami::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let mut processor = RoomProcessor::new(cli);
    processor.process()
}
