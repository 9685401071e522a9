//! Content-addressed object storage for keel.
//!
//! This crate implements the hash-keyed object store at the heart of keel,
//! analogous to git's `.keel/objects/` directory. Every object is framed as
//! `<type> <decimal-length>\0<payload>`, identified by the BLAKE3 hash of
//! exactly those framed bytes, compressed, and stored at a path sharded on
//! the first two hex characters of its id.
//!
//! # Object Types
//!
//! Four type tags are recognized at the framing layer: `blob`, `tree`,
//! `commit`, and `tag`. Only [`Blob`] has a body representation in this
//! core; the other three are reserved tags, and reading such an object fails
//! with [`StoreError::UnsupportedType`] rather than producing an
//! uninterpretable value.
//!
//! # Storage Backends
//!
//! All backends implement the [`ObjectStore`] trait:
//!
//! - [`FsObjectStore`] — sharded, compressed files under a repository's
//!   `objects/` directory
//! - [`InMemoryObjectStore`] — `HashMap`-based store for tests and embedding
//!
//! # Design Rules
//!
//! 1. Objects are immutable once written (content-addressing guarantees
//!    this); nothing in this crate mutates or deletes a stored object.
//! 2. Rewriting an existing id is a no-op: identical framed content yields
//!    identical bytes and an identical id, so concurrent writers of the same
//!    object need no coordination.
//! 3. Nothing here is retried. Local filesystem failures surface
//!    immediately to the caller.

pub mod codec;
pub mod error;
pub mod fs;
pub mod memory;
pub mod object;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use fs::FsObjectStore;
pub use memory::InMemoryObjectStore;
pub use object::{Blob, Object, ObjectKind};
pub use traits::ObjectStore;
