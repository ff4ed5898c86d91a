//! Error types shared across the certificate feed workspace.
//!
//! The `FeedError` enum unifies the failure cases for output I/O,
//! serialization, batch preconditions, and ISIN contract violations,
//! allowing crates to propagate a single error type.
use std::io;

use thiserror::Error;

/// Unified error type shared by the feed binary and the common library.
#[derive(Error, Debug)]
pub enum FeedError {
    /// I/O error while writing records to the output stream.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding a record to JSON via serde_json.
    #[error("JSON serialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// An ISIN base contained a character outside `A-Z` / `0-9`.
    ///
    /// This is a programming-contract violation, not a runtime condition:
    /// the check-digit algorithm refuses to produce a silently wrong digit.
    #[error("Invalid ISIN character: {0:?} (expected uppercase letter or digit)")]
    InvalidIsinChar(char),

    /// Batch request with a zero thread or quote count; rejected before any
    /// work begins.
    #[error("Both thread and quote counts must be positive, got threads={threads}, quotes={quotes}")]
    EmptyBatchRequest {
        /// Requested worker thread count.
        threads: usize,
        /// Requested record count.
        quotes: usize,
    },

    /// A worker thread panicked before delivering its sub-batch.
    #[error("Worker thread panicked while generating records")]
    WorkerPanic,
}
