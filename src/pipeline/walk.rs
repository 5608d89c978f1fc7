//! Traversal filter: walk the root, apply exclusion and size window, send
//! surviving file paths downstream.

use std::path::PathBuf;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Sender, select};
use log::warn;
use walkdir::WalkDir;

use crate::error::PipelineError;
use crate::types::Opts;

use super::cancel::CancelToken;

/// Spawn the walk thread. Returns the count of paths sent, or the first
/// traversal error. Dropping `path_tx` on exit closes the path stream so
/// hash workers drain what was enqueued and stop.
pub fn spawn_walk_thread(
    root: PathBuf,
    opts: &Opts,
    path_tx: Sender<PathBuf>,
    cancel: CancelToken,
) -> JoinHandle<Result<usize, PipelineError>> {
    let exclude = opts.exclude.clone();
    let (min_size, max_size) = (opts.min_size, opts.max_size);
    thread::spawn(move || {
        let iter = WalkDir::new(&root).into_iter().filter_entry(move |entry| {
            match &exclude {
                // A matching directory is pruned, a matching file skipped.
                Some(re) => !re.is_match(&entry.path().to_string_lossy()),
                None => true,
            }
        });

        let mut count = 0_usize;
        for outcome in iter {
            if cancel.is_canceled() {
                return Err(PipelineError::WalkCanceled);
            }
            let entry = match outcome {
                Ok(entry) => entry,
                Err(err) => {
                    return Err(PipelineError::Walk {
                        path: err.path().map(PathBuf::from),
                        msg: err.to_string(),
                    });
                }
            };
            // Regular files only: directories, symlinks, and devices are
            // not candidates for content comparison.
            if !entry.file_type().is_file() {
                continue;
            }
            let size = match entry.metadata() {
                Ok(meta) => meta.len(),
                Err(err) => {
                    return Err(PipelineError::Walk {
                        path: Some(entry.into_path()),
                        msg: err.to_string(),
                    });
                }
            };
            if size < min_size || size > max_size {
                warn!(
                    "{} ({}B) is out of bounds ({}B - {}B), skipping it",
                    entry.path().display(),
                    size,
                    min_size,
                    max_size
                );
                continue;
            }
            select! {
                send(path_tx, entry.into_path()) -> res => {
                    if res.is_err() {
                        break;
                    }
                    count += 1;
                }
                recv(cancel.canceled()) -> _ => return Err(PipelineError::WalkCanceled),
            }
        }
        Ok(count)
    })
}
