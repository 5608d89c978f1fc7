use std::path::PathBuf;

use clap::Parser;

struct DefaultArgs;

impl DefaultArgs {
    pub const MIN_SIZE: &'static str = "0B";
    pub const MAX_SIZE: &'static str = "1GB";
}

/// Find directory pairs sharing identical files.
#[derive(Clone, Parser)]
#[command(name = "dupdirs")]
#[command(about = "Report directory pairs that share at least N identical files.")]
pub struct Cli {
    /// Directory to evaluate.
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// File to write the report to. Default: stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Regex; any path matching it is skipped entirely (files and
    /// directories that would be descended into).
    #[arg(long, short)]
    pub avoid: Option<String>,

    /// Worker count for the hash and comparison pools.
    #[arg(long, short, default_value_t = 8)]
    pub threads: usize,

    /// Minimum number of repeated files for a directory pair to be reported.
    #[arg(long, short, default_value_t = 1)]
    pub repeated: usize,

    /// Minimum file size to analyze (number + unit, e.g. 4KB).
    #[arg(long, default_value = DefaultArgs::MIN_SIZE)]
    pub min: String,

    /// Maximum file size to analyze (number + unit, e.g. 100MB).
    #[arg(long, default_value = DefaultArgs::MAX_SIZE)]
    pub max: String,

    /// Verbose output.
    #[arg(long, short)]
    pub verbose: bool,
}
