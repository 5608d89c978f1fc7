//! Dupdirs CLI: report directory pairs sharing at least N identical files.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use dupdirs::engine::Cli;
use dupdirs::engine::handle_run;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli)?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(())
}
