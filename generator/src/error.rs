//! Error types for type generation runs.
//!
//! Only fatal conditions are errors: unreadable inputs, unparseable fragment
//! files and output failures. Per-branch and per-element problems are
//! recorded in [`FragmentReport`](crate::report::FragmentReport)s instead.

use std::path::PathBuf;

use thiserror::Error;
use wsdl_typegen_core::ShapeError;

/// Errors that abort a generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// An input directory could not be listed.
    #[error("failed to read input directory '{}': {source}", path.display())]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A fragment file could not be read.
    #[error("failed to read fragment '{}': {source}", path.display())]
    ReadFragment {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A fragment file is not valid JSON.
    #[error("failed to parse fragment '{}': {source}", path.display())]
    ParseFragment {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A fragment file is valid JSON but not a fragment record.
    #[error("invalid fragment '{}': {source}", path.display())]
    InvalidFragment {
        path: PathBuf,
        #[source]
        source: ShapeError,
    },

    /// The output artifact or report could not be written.
    #[error("failed to write '{}': {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The worker pool for fragment reads could not be created.
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Convenience alias for results with [`GenerateError`].
pub type Result<T> = std::result::Result<T, GenerateError>;
