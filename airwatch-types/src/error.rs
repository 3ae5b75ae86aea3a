//! Error types for reading derivation.

use thiserror::Error;

/// Errors that can occur while deriving display values from a reading.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReadingError {
    /// The capture timestamp is missing or is not a valid RFC 3339 instant.
    #[error("invalid timestamp {value:?}: {source}")]
    InvalidTimestamp {
        /// The raw value as received from upstream.
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
