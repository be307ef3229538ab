//! Error types
//!
//! Storage faults, filesystem query failures and configuration problems are
//! kept in separate enums so callers can tell a corrupt zone apart from an
//! ordinary "no such file".

use thiserror::Error;

/// Errors raised by node stores and the zone codec
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying sled database error
    #[error("storage backend error: {0}")]
    Backend(#[from] sled::Error),

    /// A node id that the zone has no record for
    #[error("node {0} not found in zone")]
    MissingNode(String),

    /// Stored bytes for a node could not be decoded
    #[error("node {id} is corrupt: {reason}")]
    Corrupt { id: String, reason: String },

    /// A node could not be encoded for hashing or storage
    #[error("failed to encode node: {0}")]
    Encode(String),
}

/// Errors raised by path resolution and metadata queries
#[derive(Debug, Error)]
pub enum FsError {
    /// Path does not resolve to any node
    #[error("no such file or directory: {0}")]
    NotFound(String),

    /// Path traverses through, or names, a non-directory where a directory
    /// is required
    #[error("not a directory: {0}")]
    NotADirectory(String),

    /// Path is syntactically unusable (e.g. embedded NUL)
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// A resolved node is neither a file nor a directory. Data-integrity
    /// fault, distinct from resolution and load failures.
    #[error("invalid element: {0}")]
    InvalidElement(&'static str),

    /// Node load failure, propagated verbatim from the zone
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors raised while loading settings or initializing logging
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A setting has an unusable value
    #[error("configuration error: {0}")]
    Invalid(String),

    /// Failure from the config source layer
    #[error(transparent)]
    Source(#[from] config::ConfigError),

    /// Logging subscriber could not be installed
    #[error("logging initialization failed: {0}")]
    Logging(String),
}
