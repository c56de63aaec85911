//! CLI entry point for seamless tile generation

use clap::Parser;
use seamtile::io::cli::{Cli, FileProcessor};
use seamtile::io::logging::init_logging;

fn main() -> seamtile::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut processor = FileProcessor::new(cli);
    processor.process()?;
    Ok(())
}
