//! Comparison worker pool: per directory pair, collect the file pairs whose
//! fingerprints match across the two sides.

use std::collections::HashMap;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender, select};

use crate::types::{DirPair, FileRecord, Fingerprint, MatchResult};

use super::cancel::CancelToken;

/// Compare one pair. The right side is bucketed by fingerprint first, so the
/// work is O(|A| + |B| + matches) instead of the naive O(|A|·|B|) scan.
/// Match order is the same as the nested scan would produce: left records in
/// arrival order, each expanded against the right records (in arrival order)
/// sharing its fingerprint.
pub fn compare_pair(pair: &DirPair) -> MatchResult {
    let mut by_fingerprint: HashMap<Fingerprint, Vec<&FileRecord>> =
        HashMap::with_capacity(pair.right.files.len());
    for record in &pair.right.files {
        by_fingerprint
            .entry(record.fingerprint)
            .or_default()
            .push(record);
    }

    let mut matches = Vec::new();
    for left in &pair.left.files {
        if let Some(rights) = by_fingerprint.get(&left.fingerprint) {
            for right in rights {
                matches.push((left.clone(), (*right).clone()));
            }
        }
    }

    MatchResult {
        left: pair.left.directory.clone(),
        right: pair.right.directory.clone(),
        matches,
    }
}

fn compare_worker_loop(
    pair_rx: Receiver<DirPair>,
    result_tx: Sender<MatchResult>,
    cancel: CancelToken,
) {
    loop {
        if cancel.is_canceled() {
            break;
        }
        let pair = select! {
            recv(pair_rx) -> pair => match pair {
                Ok(pair) => pair,
                Err(_) => break, // enumerator finished
            },
            recv(cancel.canceled()) -> _ => break,
        };
        let result = compare_pair(&pair);
        select! {
            send(result_tx, result) -> res => {
                if res.is_err() {
                    break;
                }
            }
            recv(cancel.canceled()) -> _ => break,
        }
    }
}

/// Spawn the comparison pool with the same fan-out/fan-in discipline as the
/// hash pool: the caller drops its `result_tx` clone and the merged result
/// stream closes once the last worker exits.
pub fn spawn_compare_workers(
    pair_rx: Receiver<DirPair>,
    result_tx: &Sender<MatchResult>,
    num_workers: usize,
    cancel: &CancelToken,
) -> Vec<JoinHandle<()>> {
    (0..num_workers)
        .map(|_| {
            let pair_rx = pair_rx.clone();
            let result_tx = result_tx.clone();
            let cancel = cancel.clone();
            thread::spawn(move || compare_worker_loop(pair_rx, result_tx, cancel))
        })
        .collect()
}
