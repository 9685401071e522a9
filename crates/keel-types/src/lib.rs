//! Foundation types for the keel object database.
//!
//! This crate provides the content-addressed identifier used throughout
//! keel. Every other keel crate depends on `keel-types`.
//!
//! # Key Types
//!
//! - [`ObjectId`] — Content-addressed identifier (BLAKE3 hash of an object's
//!   framed bytes)
//! - [`TypeError`] — Parse failures for identifiers

pub mod error;
pub mod object;

pub use error::TypeError;
pub use object::ObjectId;
