//! Pipeline wiring: walk → path channel → hash workers → record channel →
//! grouper → pair enumerator → pair channel → compare workers → results.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread::JoinHandle;

use crossbeam_channel::bounded;
use log::debug;

use crate::error::PipelineError;
use crate::types::{DirGroup, MatchResult, Opts};

use super::cancel::CancelToken;
use super::{HANDOFF_CAP, compare, group, hashers, pairs, walk};

/// Everything the pipeline produced. `walk_error` is surfaced separately
/// because the walk fails fire-and-continue: paths enqueued before the
/// failure are still hashed, grouped, and compared, so the caller can render
/// the partial report before propagating the error.
pub struct PipelineOutput {
    pub results: Vec<MatchResult>,
    pub walk_error: Option<PipelineError>,
}

/// Run the full pipeline under `root`. The first errored record aborts the
/// run: the token is canceled, every stage unblocks at its next handoff, all
/// threads are joined, and the error is returned. On success the walk's own
/// error, if any, is stashed in the output.
pub fn run_pipeline(
    root: &Path,
    opts: &Opts,
    cancel: &CancelToken,
) -> Result<PipelineOutput, PipelineError> {
    let (path_tx, path_rx) = bounded::<PathBuf>(HANDOFF_CAP);
    let (record_tx, record_rx) = bounded::<hashers::HashedItem>(HANDOFF_CAP);

    let walk_handle = walk::spawn_walk_thread(root.to_path_buf(), opts, path_tx, cancel.clone());
    let hash_handles =
        hashers::spawn_hash_workers(path_rx, &record_tx, opts.num_workers, cancel);
    // Workers hold the remaining sender clones; the stream closes when the
    // last of them exits.
    drop(record_tx);

    let grouped = match group::group_by_directory(record_rx) {
        Ok(grouped) => grouped,
        Err(err) => {
            cancel.cancel();
            let _ = walk_handle.join();
            join_workers(hash_handles);
            return Err(err);
        }
    };

    // The record stream only closes after the walk dropped its sender and
    // every hash worker exited, so these joins do not block.
    let walk_error = match walk_handle.join() {
        Ok(Ok(count)) => {
            debug!("walk done, {} paths sent, {} directories", count, grouped.len());
            None
        }
        Ok(Err(err)) => Some(err),
        Err(_) => Some(PipelineError::Walk {
            path: None,
            msg: "walk thread panicked".to_string(),
        }),
    };
    join_workers(hash_handles);

    let groups: Vec<Arc<DirGroup>> = grouped
        .into_iter()
        .map(|(directory, files)| Arc::new(DirGroup { directory, files }))
        .collect();

    let (pair_tx, pair_rx) = bounded(HANDOFF_CAP);
    let (result_tx, result_rx) = bounded::<MatchResult>(HANDOFF_CAP);

    let pair_handle = pairs::spawn_pair_thread(groups, pair_tx, cancel.clone());
    let compare_handles =
        compare::spawn_compare_workers(pair_rx, &result_tx, opts.num_workers, cancel);
    drop(result_tx);

    let mut results = Vec::new();
    while let Ok(result) = result_rx.recv() {
        results.push(result);
    }
    debug!("comparison done, {} pair results", results.len());

    let _ = pair_handle.join();
    join_workers(compare_handles);

    // A cancel triggered from outside (Ctrl+C) after the walk exited makes
    // the comparison stages stop quietly; without this check the truncated
    // result set would be indistinguishable from a completed run.
    if cancel.is_canceled() {
        return Err(PipelineError::WalkCanceled);
    }

    Ok(PipelineOutput { results, walk_error })
}

fn join_workers(handles: Vec<JoinHandle<()>>) {
    for handle in handles {
        let _ = handle.join();
    }
}
