//! Dupdirs: find directory pairs sharing identical files.
//!
//! A bounded concurrent pipeline: recursive walk with filtering → parallel
//! blake3 fingerprinting → grouping by parent directory → exhaustive
//! pairwise directory comparison → threshold filtering and report rendering.
//! Every handoff is a blocking channel operation paired with a shared
//! [`CancelToken`](pipeline::CancelToken), so the whole pipeline stops
//! promptly on the first error or on interrupt without leaking threads.

pub mod engine;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use error::PipelineError;
pub use types::*;

use std::io::Write;
use std::path::Path;

use log::debug;

/// Single entry point: scan `root` with `opts`, write the report to `out`,
/// and return the run's terminal result.
///
/// The first read error aborts the run before any report is written. A walk
/// error is fire-and-continue: files enqueued before the failure are still
/// compared and reported, then the error is returned — treat a failing run's
/// report as partial. The token is triggered exactly once per run, here on
/// completion (releasing any stragglers) or earlier by the pipeline on error;
/// callers may also trigger it from a signal handler, in which case the run
/// aborts as walk canceled without writing a report.
pub fn run(
    root: &Path,
    opts: &Opts,
    out: &mut dyn Write,
    cancel: &pipeline::CancelToken,
) -> Result<(), PipelineError> {
    debug!(
        "scanning {} (workers: {}, size window: {}B - {}B)",
        root.display(),
        opts.num_workers,
        opts.min_size,
        opts.max_size
    );
    let output = match pipeline::run_pipeline(root, opts, cancel) {
        Ok(output) => output,
        Err(err) => {
            cancel.cancel();
            return Err(err);
        }
    };

    report::write_report(out, output.results, opts.min_repeated)?;
    cancel.cancel();

    match output.walk_error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
