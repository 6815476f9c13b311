//! Error types for zframe operations.
//!
//! All fallible operations in this crate return [`Result`]. Bound-checking
//! failures ([`CodecError::InvalidFrame`], [`CodecError::UnknownContentSize`],
//! [`CodecError::ContentSizeTooLarge`]) are always raised before the output
//! buffer is allocated, so hostile input can never force an oversized
//! allocation.

use thiserror::Error;

/// The error type for compression and decompression operations.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The algorithm reported an internal failure.
    ///
    /// The message is the algorithm's own diagnostic, passed through verbatim.
    #[error("zstd: {message}")]
    Algorithm {
        /// Diagnostic string reported by the algorithm.
        message: String,
    },

    /// The frame header could not be parsed.
    #[error("invalid compressed data")]
    InvalidFrame,

    /// The frame header does not declare a decompressed content size.
    #[error("unknown content size")]
    UnknownContentSize,

    /// The declared content size reaches or exceeds the caller's ceiling.
    #[error("content size is too large: {size} bytes (limit {max})")]
    ContentSizeTooLarge {
        /// Content size declared by the frame header.
        size: u64,
        /// Caller-supplied output ceiling.
        max: usize,
    },

    /// The input buffer exceeds the crate-wide input limit.
    #[error("input data is too large: {size} bytes (limit {max})")]
    InputTooLarge {
        /// Length of the rejected input.
        size: usize,
        /// Maximum accepted input length.
        max: usize,
    },

    /// A decompression stream ended without a terminating frame marker.
    ///
    /// Any bytes already delivered by the failing call must be discarded.
    #[error("unexpected end of compressed stream")]
    IncompleteFrame,

    /// `feed` or `finish` was called on a finished session.
    #[error("session is already finished")]
    SessionFinished,

    /// A background task was cancelled or panicked before delivering a result.
    #[error("background task failed: {message}")]
    TaskFailed {
        /// Description of the task failure.
        message: String,
    },
}

/// Result type alias for zframe operations.
pub type Result<T> = std::result::Result<T, CodecError>;

impl CodecError {
    /// Create an algorithm error from a diagnostic message.
    pub fn algorithm(message: impl Into<String>) -> Self {
        Self::Algorithm {
            message: message.into(),
        }
    }

    /// Create a content-size-too-large error.
    pub fn content_size_too_large(size: u64, max: usize) -> Self {
        Self::ContentSizeTooLarge { size, max }
    }

    /// Create an input-too-large error.
    pub fn input_too_large(size: usize, max: usize) -> Self {
        Self::InputTooLarge { size, max }
    }

    /// Create a task-failed error.
    pub fn task_failed(message: impl Into<String>) -> Self {
        Self::TaskFailed {
            message: message.into(),
        }
    }
}
