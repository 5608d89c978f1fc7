//! Hash worker pool: fingerprint file content in parallel.

use std::path::PathBuf;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender, select};

use crate::engine::hashing::hash_file;
use crate::error::PipelineError;
use crate::types::FileRecord;

use super::cancel::CancelToken;

/// One item of the fingerprinted-file stream. A failed read is emitted as
/// `Err`, not dropped; the grouper turns the first one into the run's error.
pub type HashedItem = Result<FileRecord, PipelineError>;

fn hash_worker_loop(
    path_rx: Receiver<PathBuf>,
    record_tx: Sender<HashedItem>,
    cancel: CancelToken,
) {
    loop {
        if cancel.is_canceled() {
            break;
        }
        let path = select! {
            recv(path_rx) -> path => match path {
                Ok(path) => path,
                Err(_) => break, // walk finished, stream drained
            },
            recv(cancel.canceled()) -> _ => break,
        };
        let item = match hash_file(&path) {
            Ok(fingerprint) => Ok(FileRecord {
                directory: path.parent().map(PathBuf::from).unwrap_or_default(),
                path,
                fingerprint,
            }),
            Err(err) => Err(PipelineError::Read {
                path,
                msg: err.to_string(),
            }),
        };
        select! {
            send(record_tx, item) -> res => {
                if res.is_err() {
                    break;
                }
            }
            recv(cancel.canceled()) -> _ => break,
        }
    }
}

/// Spawn `num_workers` hash workers reading from `path_rx` and sending on
/// clones of `record_tx`. The caller must drop its own sender afterwards:
/// the stream then closes exactly once, when the last worker exits, so no
/// record is lost and nothing can be written after closure.
pub fn spawn_hash_workers(
    path_rx: Receiver<PathBuf>,
    record_tx: &Sender<HashedItem>,
    num_workers: usize,
    cancel: &CancelToken,
) -> Vec<JoinHandle<()>> {
    (0..num_workers)
        .map(|_| {
            let path_rx = path_rx.clone();
            let record_tx = record_tx.clone();
            let cancel = cancel.clone();
            thread::spawn(move || hash_worker_loop(path_rx, record_tx, cancel))
        })
        .collect()
}
