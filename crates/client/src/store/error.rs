//! Error types for key-value stores.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when reading or writing a store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem error on the backing file.
    #[error("IO error on {path}: {source}")]
    Io {
        /// File being read or written.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file is not a JSON object of string values.
    #[error("store file {path} is malformed: {source}")]
    MalformedFile {
        /// File that failed to parse.
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be serialized.
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A stored value exists but does not parse as the expected record.
    #[error("stored value for {key} is corrupt: {source}")]
    Corrupt {
        /// Key whose value failed to parse.
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
