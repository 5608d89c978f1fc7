//! Pipeline error kinds. Config errors are handled with `anyhow` before the
//! pipeline starts; everything that can fail once it is running lives here.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// Filesystem traversal failed (unreadable directory, I/O error). Paths
    /// already enqueued keep flowing downstream; the error surfaces as the
    /// run's terminal result.
    #[error("walk failed{}: {msg}", fmt_path(.path))]
    Walk { path: Option<PathBuf>, msg: String },

    /// The walk observed the cancellation signal at a handoff point.
    #[error("walk canceled")]
    WalkCanceled,

    /// A discovered file could not be read when hashing (vanished,
    /// permission changed, I/O failure).
    #[error("read {path}: {msg}", path = .path.display())]
    Read { path: PathBuf, msg: String },

    /// The report sink could not be written to.
    #[error("write report: {0}")]
    Output(#[source] std::io::Error),
}

fn fmt_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" at {}", p.display()),
        None => String::new(),
    }
}
