use keel_repo::RepoError;
use keel_types::ObjectId;
use thiserror::Error;

use crate::object::ObjectKind;

/// Errors from object store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The framed bytes do not parse: missing header delimiter, non-decimal
    /// length field, or a declared length that disagrees with the payload.
    #[error("malformed object: {0}")]
    MalformedObject(String),

    /// The framing tag is not one of `blob`, `tree`, `commit`, `tag`.
    #[error("unknown object type: {0}")]
    UnknownType(String),

    /// The framing tag is recognized but has no body representation in this
    /// core (`tree`, `commit`, `tag`).
    #[error("unsupported object type: {0}")]
    UnsupportedType(ObjectKind),

    /// The requested object does not exist in the store.
    #[error("object not found: {0}")]
    ObjectNotFound(ObjectId),

    /// Compression of the framed bytes failed.
    #[error("compression failed: {0}")]
    Compression(String),

    /// The stored bytes could not be decompressed.
    #[error("decompression failed: {0}")]
    Decompression(String),

    /// Error from the repository layout layer.
    #[error("repository error: {0}")]
    Repo(#[from] RepoError),

    /// I/O error from the underlying filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
