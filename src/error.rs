use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for scanner operations
pub type Result<T> = std::result::Result<T, ScanError>;

/// Fatal conditions for a scan run. None of these are retried: each run is a
/// single pass over a single local file.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("input file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unterminated uniform struct `{type_name}` opened at line {line}: no `}}...;` line before end of input")]
    UnterminatedStruct { type_name: String, line: usize },

    #[error("failed to write scan report")]
    Report(#[source] io::Error),
}
