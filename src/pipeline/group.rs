//! Directory grouper: fold the fingerprinted-file stream into a map keyed
//! by immediate parent directory.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crossbeam_channel::Receiver;

use crate::error::PipelineError;
use crate::types::FileRecord;

use super::hashers::HashedItem;

/// Single consumer of the hash pool's output. Runs on the caller's thread;
/// exclusive ownership of the map means no lock is needed.
///
/// A `BTreeMap` keeps the directory keys in lexicographic order, which the
/// pair enumerator relies on for deterministic pair order. Arrival order is
/// preserved within each directory; order across directories depends on
/// worker scheduling and is not meaningful.
///
/// Stops on the first errored record and returns that error, discarding
/// whatever was grouped so far. Dropping the receiver on that path makes
/// blocked workers fail their sends and exit.
pub fn group_by_directory(
    record_rx: Receiver<HashedItem>,
) -> Result<BTreeMap<PathBuf, Vec<FileRecord>>, PipelineError> {
    let mut groups: BTreeMap<PathBuf, Vec<FileRecord>> = BTreeMap::new();
    while let Ok(item) = record_rx.recv() {
        let record = item?;
        groups
            .entry(record.directory.clone())
            .or_default()
            .push(record);
    }
    Ok(groups)
}
