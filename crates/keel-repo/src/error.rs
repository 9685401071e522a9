use std::path::PathBuf;

use thiserror::Error;

/// Errors from repository operations.
#[derive(Debug, Error)]
pub enum RepoError {
    /// The init target exists but cannot hold a new repository.
    #[error("invalid init target {path}: {reason}")]
    InvalidTarget { path: PathBuf, reason: String },

    /// A path under the metadata directory exists but is not a directory.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// The repository configuration file does not exist.
    #[error("configuration file missing: {0}")]
    MissingConfig(PathBuf),

    /// The configuration file could not be parsed.
    #[error("malformed configuration: {0}")]
    ConfigParse(String),

    /// The configuration could not be serialized.
    #[error("cannot encode configuration: {0}")]
    ConfigEncode(String),

    /// The repository declares a format version this build does not support.
    #[error("unsupported repositoryformatversion {0}")]
    UnsupportedFormat(u32),

    /// No repository was found at or above the given path.
    #[error("no keel repository found at or above {0}")]
    NotFound(PathBuf),

    /// I/O error from the filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for repository operations.
pub type RepoResult<T> = Result<T, RepoError>;
