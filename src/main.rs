//! CLI entry point for the Wang tiling generator

use clap::Parser;
use wangtile::io::cli::{Cli, TilingProcessor};

fn main() -> wangtile::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut processor = TilingProcessor::new(cli);
    processor.process()
}
