//! CLI command handler: build run config, create the sink, hook Ctrl+C,
//! run the pipeline, render the report.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result, bail};
use log::warn;
use regex::Regex;

use crate::Opts;
use crate::engine::arg_parser::Cli;
use crate::engine::tools::parse_size;
use crate::pipeline::CancelToken;
use crate::utils::setup_logging;

fn setup_opts(cli: &Cli) -> Result<Opts> {
    let min_size = parse_size(&cli.min).context("parse --min")?;
    let max_size = parse_size(&cli.max).context("parse --max")?;
    if min_size > max_size {
        bail!("--min ({}B) exceeds --max ({}B)", min_size, max_size);
    }
    if cli.threads == 0 {
        bail!("--threads must be at least 1");
    }
    let exclude = cli
        .avoid
        .as_deref()
        .map(Regex::new)
        .transpose()
        .context("compile --avoid pattern")?;
    Ok(Opts {
        exclude,
        min_size,
        max_size,
        num_workers: cli.threads,
        min_repeated: cli.repeated,
    })
}

/// Run one scan. Any terminal error propagates out, so the process exits
/// nonzero; the original exercise's print-and-exit-zero behavior is not kept.
pub fn handle_run(cli: &Cli) -> Result<()> {
    setup_logging(cli.verbose);
    let opts = setup_opts(cli)?;

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("create output file {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    let cancel = CancelToken::new();
    let interrupt = cancel.clone();
    ctrlc::set_handler(move || {
        warn!("interrupted, canceling run");
        interrupt.cancel();
    })
    .context("set Ctrl+C handler")?;

    crate::run(&cli.dir, &opts, &mut out, &cancel)?;
    out.flush().context("flush report")?;
    Ok(())
}
