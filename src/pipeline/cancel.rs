//! Cooperative cancellation shared by every pipeline stage.

use std::sync::{Arc, Mutex};

use crossbeam_channel::{Receiver, Sender, bounded};

/// Broadcast cancellation signal, triggered at most once per run.
///
/// Nothing is ever sent on the inner channel; `cancel` drops the only
/// sender, which disconnects the channel and makes every `recv` on
/// [`canceled`](Self::canceled) return immediately. Stages pair each
/// blocking send/recv with a `select!` arm on that receiver so they unblock
/// within one scheduling step instead of hanging on a dead queue.
#[derive(Clone)]
pub struct CancelToken {
    rx: Receiver<()>,
    tx: Arc<Mutex<Option<Sender<()>>>>,
}

impl CancelToken {
    pub fn new() -> Self {
        let (tx, rx) = bounded::<()>(0);
        Self {
            rx,
            tx: Arc::new(Mutex::new(Some(tx))),
        }
    }

    /// Trigger cancellation. Idempotent; later calls are no-ops. A poisoned
    /// lock must not block cancellation, so poisoning is ignored here — the
    /// `Option` is the only state behind it.
    pub fn cancel(&self) {
        self.tx
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();
    }

    pub fn is_canceled(&self) -> bool {
        matches!(
            self.rx.try_recv(),
            Err(crossbeam_channel::TryRecvError::Disconnected)
        )
    }

    /// Receiver for `select!` arms. Blocks forever until the token is
    /// canceled, then disconnects.
    pub fn canceled(&self) -> &Receiver<()> {
        &self.rx
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}
