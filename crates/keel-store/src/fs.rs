use std::fs;
use std::path::PathBuf;

use keel_repo::{Layout, Repository};
use keel_types::ObjectId;
use tracing::debug;

use crate::codec;
use crate::error::{StoreError, StoreResult};
use crate::object::Object;
use crate::traits::ObjectStore;

/// Compression level for stored objects. zstd's default band; object files
/// are small and read-heavy, so there is no reason to go higher.
const COMPRESSION_LEVEL: i32 = 3;

/// Filesystem-backed object store.
///
/// Objects live under the repository's `objects/` directory, sharded by the
/// first two hex characters of the id: `objects/<id[0:2]>/<id[2:]>`. Each
/// file holds the zstd-compressed framed bytes. Files are written once and
/// never mutated or deleted by this layer; rewriting an existing id is a
/// safe no-op because the bytes would be identical.
pub struct FsObjectStore {
    layout: Layout,
}

impl FsObjectStore {
    /// Create a store bound to the given repository.
    pub fn new(repo: &Repository) -> Self {
        Self {
            layout: repo.layout(),
        }
    }

    /// The sharded path an object id maps to. Pure; no I/O.
    pub fn object_path(&self, id: &ObjectId) -> PathBuf {
        self.layout
            .resolve(&["objects", &id.shard_prefix(), &id.shard_suffix()])
    }
}

impl ObjectStore for FsObjectStore {
    fn write(&self, object: &Object) -> StoreResult<ObjectId> {
        let framed = codec::encode(object.kind(), object.payload());
        let id = ObjectId::from_bytes(&framed);

        // Identical content maps to an identical path holding identical
        // bytes, so an existing file never needs rewriting.
        if self.exists(&id)? {
            return Ok(id);
        }

        let path = self
            .layout
            .file_under(&["objects", &id.shard_prefix(), &id.shard_suffix()], true)?;
        let compressed = zstd::encode_all(framed.as_slice(), COMPRESSION_LEVEL)
            .map_err(|e| StoreError::Compression(e.to_string()))?;
        fs::write(&path, compressed)?;

        debug!(id = %id.short_hex(), kind = %object.kind(), size = object.payload().len(), "object written");
        Ok(id)
    }

    fn read(&self, id: &ObjectId) -> StoreResult<Object> {
        let path = self.object_path(id);
        if !path.is_file() {
            return Err(StoreError::ObjectNotFound(*id));
        }
        let compressed = fs::read(&path)?;
        let framed = zstd::decode_all(compressed.as_slice())
            .map_err(|e| StoreError::Decompression(e.to_string()))?;
        let (kind, payload) = codec::decode(&framed)?;
        Object::from_parts(kind, payload.to_vec())
    }

    fn exists(&self, id: &ObjectId) -> StoreResult<bool> {
        Ok(self.object_path(id).is_file())
    }
}
