//! Engine module: CLI surface, fingerprinting, size parsing.

pub mod arg_parser;
pub mod handlers;
pub mod hashing;
pub mod tools;

// Re-export commonly used functions
pub use arg_parser::Cli;
pub use handlers::handle_run;
pub use hashing::hash_file;
pub use tools::{SIZE_UNITS, parse_size};
