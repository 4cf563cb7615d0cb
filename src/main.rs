//! CLI entry point for rendering prefix-code trees

use clap::Parser;
use huffdraw::io::cli::{Cli, FileProcessor};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_env_filter(filter)
        .init();
}

fn main() -> huffdraw::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
