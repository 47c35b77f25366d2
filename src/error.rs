//! Error types for maxbench
//!
//! Input errors block a run before any measurement starts. `DepthExceeded` is
//! the only error raised while measuring, and the comparator turns it into a
//! `Failed` result record.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// maxbench error types
#[derive(Error, Debug)]
pub enum Error {
    /// Input contained no numbers
    #[error("Empty dataset: please enter at least one number")]
    EmptyDataset,

    /// Input contained a piece that is not an integer
    #[error("Invalid input '{0}': use numbers separated by commas")]
    InvalidNumber(String),

    /// Recursive candidate needed more frames than the configured ceiling
    #[error("Recursion limit exceeded: {required} frames needed, limit is {limit}")]
    DepthExceeded {
        /// Configured call-depth ceiling
        limit: usize,
        /// Depth the dataset would have required
        required: usize,
    },

    /// Export requested before any run was logged
    #[error("Nothing to export: run at least one comparison first")]
    EmptyLog,

    /// Configuration rejected by the builder
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Exported log could not be parsed back
    #[error("Malformed log at row {row}: {reason}")]
    MalformedLog {
        /// 1-based data row (header excluded)
        row: usize,
        /// What was wrong with it
        reason: String,
    },

    /// CSV encoding/decoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for the recursion-depth failure the comparator recovers from.
    #[must_use]
    pub const fn is_depth_exceeded(&self) -> bool {
        matches!(self, Self::DepthExceeded { .. })
    }
}
