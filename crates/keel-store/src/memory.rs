use std::collections::HashMap;
use std::sync::RwLock;

use keel_types::ObjectId;

use crate::error::{StoreError, StoreResult};
use crate::object::Object;
use crate::traits::ObjectStore;

/// In-memory, HashMap-based object store.
///
/// Intended for tests and embedding. All objects are held in memory behind a
/// `RwLock`; objects are cloned on read and write.
pub struct InMemoryObjectStore {
    objects: RwLock<HashMap<ObjectId, Object>>,
}

impl InMemoryObjectStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            objects: RwLock::new(HashMap::new()),
        }
    }

    /// Number of objects currently stored.
    pub fn len(&self) -> usize {
        self.objects.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.read().expect("lock poisoned").is_empty()
    }
}

impl Default for InMemoryObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectStore for InMemoryObjectStore {
    fn write(&self, object: &Object) -> StoreResult<ObjectId> {
        let id = object.id();
        let mut map = self.objects.write().expect("lock poisoned");
        // Idempotent: the same id always maps to the same content.
        map.entry(id).or_insert_with(|| object.clone());
        Ok(id)
    }

    fn read(&self, id: &ObjectId) -> StoreResult<Object> {
        let map = self.objects.read().expect("lock poisoned");
        map.get(id).cloned().ok_or(StoreError::ObjectNotFound(*id))
    }

    fn exists(&self, id: &ObjectId) -> StoreResult<bool> {
        let map = self.objects.read().expect("lock poisoned");
        Ok(map.contains_key(id))
    }
}

impl std::fmt::Debug for InMemoryObjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryObjectStore")
            .field("object_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{Blob, ObjectKind};

    fn blob(content: &[u8]) -> Object {
        Object::Blob(Blob::new(content.to_vec()))
    }

    #[test]
    fn write_and_read() {
        let store = InMemoryObjectStore::new();
        let id = store.write(&blob(b"hello")).unwrap();
        let read_back = store.read(&id).unwrap();
        assert_eq!(read_back.kind(), ObjectKind::Blob);
        assert_eq!(read_back.payload(), b"hello");
    }

    #[test]
    fn same_content_deduplicates() {
        let store = InMemoryObjectStore::new();
        let id1 = store.write(&blob(b"identical")).unwrap();
        let id2 = store.write(&blob(b"identical")).unwrap();
        assert_eq!(id1, id2);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn different_content_produces_different_ids() {
        let store = InMemoryObjectStore::new();
        let id1 = store.write(&blob(b"aaa")).unwrap();
        let id2 = store.write(&blob(b"bbb")).unwrap();
        assert_ne!(id1, id2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn read_missing_object() {
        let store = InMemoryObjectStore::new();
        let id = ObjectId::from_bytes(b"missing");
        let err = store.read(&id).unwrap_err();
        assert!(matches!(err, StoreError::ObjectNotFound(_)));
    }

    #[test]
    fn exists() {
        let store = InMemoryObjectStore::new();
        let obj = blob(b"here");
        assert!(!store.exists(&obj.id()).unwrap());
        store.write(&obj).unwrap();
        assert!(store.exists(&obj.id()).unwrap());
    }

    #[test]
    fn ids_match_the_fs_backend() {
        // Both backends derive ids from the framed bytes, so an id computed
        // against one is valid against the other.
        let store = InMemoryObjectStore::new();
        let id = store.write(&blob(b"hello")).unwrap();
        assert_eq!(id, ObjectId::from_bytes(b"blob 5\0hello"));
    }
}
