//! Public types for the dupdirs API and pipeline.

use std::path::PathBuf;
use std::sync::Arc;

use regex::Regex;

/// Blake3 digest of a file's full content, used as an equality proxy for
/// "identical content".
pub type Fingerprint = [u8; 32];

/// A file discovered by the walk and fingerprinted by the hash pool.
/// Immutable once emitted; `directory` is the immediate parent of `path`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    pub directory: PathBuf,
    pub fingerprint: Fingerprint,
}

impl FileRecord {
    /// Base name of the recorded path, for report lines.
    pub fn file_name(&self) -> &str {
        self.path.file_name().and_then(|n| n.to_str()).unwrap_or("")
    }
}

/// All fingerprinted files sharing one immediate parent directory.
/// `files` keeps arrival order within the directory.
#[derive(Clone, Debug)]
pub struct DirGroup {
    pub directory: PathBuf,
    pub files: Vec<FileRecord>,
}

/// One unordered pair of distinct directory groups. Built by the pair
/// enumerator with `left` before `right` in lexicographic order, so each
/// unordered pair is produced exactly once and never self-paired.
#[derive(Clone, Debug)]
pub struct DirPair {
    pub left: Arc<DirGroup>,
    pub right: Arc<DirGroup>,
}

/// Result of comparing one directory pair: every (left, right) record pair
/// with equal fingerprints. Emitted even when empty so the caller sees one
/// result per enumerated pair.
#[derive(Clone, Debug)]
pub struct MatchResult {
    pub left: PathBuf,
    pub right: PathBuf,
    pub matches: Vec<(FileRecord, FileRecord)>,
}

impl MatchResult {
    pub fn count(&self) -> usize {
        self.matches.len()
    }
}

/// Run configuration for the pipeline and report. Read-only once built.
#[derive(Clone, Debug)]
pub struct Opts {
    /// Full-path exclusion pattern. A matching file is skipped; a matching
    /// directory is not descended into.
    pub exclude: Option<Regex>,
    /// Inclusive size window in bytes. Files outside it are skipped with a
    /// warning.
    pub min_size: u64,
    pub max_size: u64,
    /// Worker count for both the hash pool and the comparison pool.
    pub num_workers: usize,
    /// Minimum number of matched files for a pair to appear in the report.
    pub min_repeated: usize,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            exclude: None,
            min_size: 0,
            max_size: 1 << 30, // 1 GiB
            num_workers: 8,
            min_repeated: 1,
        }
    }
}
