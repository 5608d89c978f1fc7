//! Pair enumerator: every unordered pair of distinct directories, once.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Sender, select};

use crate::types::{DirGroup, DirPair};

use super::cancel::CancelToken;

/// Spawn the enumerator thread. `groups` must already be in a deterministic
/// order (the grouper hands them over sorted by directory); the i < j double
/// loop then yields each unordered pair exactly once and never pairs a
/// directory with itself. Groups are shared by `Arc`, so a pair costs two
/// pointer clones.
pub fn spawn_pair_thread(
    groups: Vec<Arc<DirGroup>>,
    pair_tx: Sender<DirPair>,
    cancel: CancelToken,
) -> JoinHandle<()> {
    thread::spawn(move || {
        for i in 0..groups.len() {
            for j in i + 1..groups.len() {
                if cancel.is_canceled() {
                    return;
                }
                let pair = DirPair {
                    left: Arc::clone(&groups[i]),
                    right: Arc::clone(&groups[j]),
                };
                select! {
                    send(pair_tx, pair) -> res => {
                        if res.is_err() {
                            return;
                        }
                    }
                    recv(cancel.canceled()) -> _ => return,
                }
            }
        }
    })
}
