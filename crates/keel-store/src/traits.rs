use keel_types::ObjectId;

use crate::error::StoreResult;
use crate::object::Object;

/// Content-addressed object store.
///
/// All implementations must satisfy these invariants:
/// - Objects are immutable once written. Content-addressing guarantees this:
///   the same framed content always produces the same id.
/// - Writing an object that already exists is a no-op (idempotent).
/// - Concurrent reads are always safe (objects are immutable).
/// - All I/O errors are propagated, never silently ignored.
pub trait ObjectStore {
    /// Write an object and return its content-addressed id.
    fn write(&self, object: &Object) -> StoreResult<ObjectId>;

    /// Read an object by its content-addressed id.
    ///
    /// Fails with [`crate::StoreError::ObjectNotFound`] if absent.
    fn read(&self, id: &ObjectId) -> StoreResult<Object>;

    /// Check whether an object exists in the store.
    fn exists(&self, id: &ObjectId) -> StoreResult<bool>;
}
