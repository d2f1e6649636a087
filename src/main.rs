//! CLI entry point for the adaptive quadtree mosaic renderer

use clap::Parser;
use quadmosaic::io::cli::{Cli, FileProcessor};

fn main() -> quadmosaic::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
