use std::fmt;
use std::str::FromStr;

use keel_types::ObjectId;

use crate::codec;
use crate::error::{StoreError, StoreResult};

/// The four type tags recognized at the framing layer.
///
/// This is a closed set: the codec matches on it exhaustively, so giving
/// `Tree`, `Commit`, or `Tag` a body parser later is a compile-checked
/// extension, not a runtime lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// Raw content; the only kind with a body representation in this core.
    Blob,
    /// Directory listing. Reserved: recognized tag, no body parser.
    Tree,
    /// Commit metadata. Reserved: recognized tag, no body parser.
    Commit,
    /// Annotated tag metadata. Reserved: recognized tag, no body parser.
    Tag,
}

impl ObjectKind {
    /// The tag as it appears in the framing header.
    pub fn tag_bytes(&self) -> &'static [u8] {
        match self {
            Self::Blob => b"blob",
            Self::Tree => b"tree",
            Self::Commit => b"commit",
            Self::Tag => b"tag",
        }
    }

    /// Parse a framing tag. Returns `None` for unrecognized tags.
    pub fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            b"blob" => Some(Self::Blob),
            b"tree" => Some(Self::Tree),
            b"commit" => Some(Self::Commit),
            b"tag" => Some(Self::Tag),
            _ => None,
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blob => write!(f, "blob"),
            Self::Tree => write!(f, "tree"),
            Self::Commit => write!(f, "commit"),
            Self::Tag => write!(f, "tag"),
        }
    }
}

impl FromStr for ObjectKind {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s.as_bytes()).ok_or_else(|| StoreError::UnknownType(s.to_string()))
    }
}

/// Raw content object.
///
/// The payload is opaque: a blob's framed form is its bytes, unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Blob {
    pub data: Vec<u8>,
}

impl Blob {
    /// Create a new blob from raw bytes.
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }
}

/// A decoded object: a closed variant type over the recognized kinds.
///
/// Only `Blob` is constructible. Decoding a `tree`, `commit`, or `tag`
/// object fails with [`StoreError::UnsupportedType`] instead of handing the
/// caller a body it cannot interpret.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Object {
    Blob(Blob),
}

impl Object {
    /// Construct the variant for `kind` from a raw payload.
    pub fn from_parts(kind: ObjectKind, payload: Vec<u8>) -> StoreResult<Self> {
        match kind {
            ObjectKind::Blob => Ok(Self::Blob(Blob::new(payload))),
            ObjectKind::Tree | ObjectKind::Commit | ObjectKind::Tag => {
                Err(StoreError::UnsupportedType(kind))
            }
        }
    }

    /// The kind of this object.
    pub fn kind(&self) -> ObjectKind {
        match self {
            Self::Blob(_) => ObjectKind::Blob,
        }
    }

    /// The raw payload bytes.
    pub fn payload(&self) -> &[u8] {
        match self {
            Self::Blob(blob) => &blob.data,
        }
    }

    /// The content-addressed id: the hash of this object's framed bytes.
    ///
    /// Pure; identical `(kind, payload)` always yields the identical id,
    /// whether or not the object has been persisted.
    pub fn id(&self) -> ObjectId {
        ObjectId::from_bytes(&codec::encode(self.kind(), self.payload()))
    }
}

impl From<Blob> for Object {
    fn from(blob: Blob) -> Self {
        Self::Blob(blob)
    }
}
