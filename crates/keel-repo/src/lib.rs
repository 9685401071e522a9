//! Repository layout, configuration, and discovery for keel.
//!
//! A keel repository is a working tree with a `.keel` metadata directory at
//! its root, analogous to git's `.git`. This crate owns everything about
//! that directory except object content: computing paths under it, reading
//! and writing the `config` file, creating the directory skeleton, and
//! finding an existing repository by walking up from an arbitrary path.
//!
//! # Modules
//!
//! - [`error`] — Error types for repository operations
//! - [`layout`] — Path arithmetic under the metadata directory
//! - [`config`] — The `[core]` key-value configuration file
//! - [`repository`] — [`Repository`] open / create / discover

pub mod config;
pub mod error;
pub mod layout;
pub mod repository;

pub use config::{CoreConfig, RepoConfig};
pub use error::{RepoError, RepoResult};
pub use layout::Layout;
pub use repository::{Repository, DEFAULT_BRANCH, META_DIR};
