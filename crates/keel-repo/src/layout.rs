use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RepoError, RepoResult};

/// Path arithmetic under a repository's metadata directory.
///
/// `Layout` never touches the worktree; every path it produces lives under
/// `.keel`. The only I/O it performs is existence checks and directory
/// creation. Directory creation uses `create_dir_all`, so two writers racing
/// to create the same shared parent both succeed.
#[derive(Clone, Debug)]
pub struct Layout {
    meta_dir: PathBuf,
}

impl Layout {
    /// Create a layout rooted at the given metadata directory.
    pub fn new(meta_dir: impl Into<PathBuf>) -> Self {
        Self {
            meta_dir: meta_dir.into(),
        }
    }

    /// The metadata directory this layout is rooted at.
    pub fn meta_dir(&self) -> &Path {
        &self.meta_dir
    }

    /// Join path segments under the metadata directory. Pure; no I/O.
    pub fn resolve(&self, segments: &[&str]) -> PathBuf {
        let mut path = self.meta_dir.clone();
        for segment in segments {
            path.push(segment);
        }
        path
    }

    /// Resolve a directory under the metadata directory, optionally creating
    /// it.
    ///
    /// Returns `Some(path)` if the directory exists (or was created),
    /// `Ok(None)` if it is absent and `create` is false, and
    /// [`RepoError::NotADirectory`] if the path exists but is not a
    /// directory.
    pub fn ensure_dir(&self, segments: &[&str], create: bool) -> RepoResult<Option<PathBuf>> {
        let path = self.resolve(segments);
        if path.exists() {
            if path.is_dir() {
                return Ok(Some(path));
            }
            return Err(RepoError::NotADirectory(path));
        }
        if create {
            fs::create_dir_all(&path)?;
            return Ok(Some(path));
        }
        Ok(None)
    }

    /// Resolve a file path under the metadata directory, first ensuring its
    /// parent directory exists when `create_parents` is set.
    ///
    /// For example, `file_under(&["refs", "heads", "master"], true)` creates
    /// `.keel/refs/heads/` if absent and returns the full file path.
    pub fn file_under(&self, segments: &[&str], create_parents: bool) -> RepoResult<PathBuf> {
        if let Some((_, parents)) = segments.split_last() {
            if !parents.is_empty() {
                self.ensure_dir(parents, create_parents)?;
            }
        }
        Ok(self.resolve(segments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> (tempfile::TempDir, Layout) {
        let dir = tempfile::tempdir().unwrap();
        let layout = Layout::new(dir.path().join(".keel"));
        (dir, layout)
    }

    #[test]
    fn resolve_joins_segments() {
        let (_dir, layout) = layout();
        let path = layout.resolve(&["objects", "ab", "cdef"]);
        assert_eq!(path, layout.meta_dir().join("objects/ab/cdef"));
    }

    #[test]
    fn resolve_performs_no_io() {
        let (_dir, layout) = layout();
        let path = layout.resolve(&["objects"]);
        assert!(!path.exists());
    }

    #[test]
    fn ensure_dir_absent_without_create() {
        let (_dir, layout) = layout();
        let result = layout.ensure_dir(&["refs", "heads"], false).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn ensure_dir_creates_intermediates() {
        let (_dir, layout) = layout();
        let path = layout.ensure_dir(&["refs", "heads"], true).unwrap().unwrap();
        assert!(path.is_dir());
    }

    #[test]
    fn ensure_dir_is_idempotent() {
        let (_dir, layout) = layout();
        let first = layout.ensure_dir(&["objects"], true).unwrap();
        let second = layout.ensure_dir(&["objects"], true).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn ensure_dir_rejects_file_in_the_way() {
        let (_dir, layout) = layout();
        fs::create_dir_all(layout.meta_dir()).unwrap();
        fs::write(layout.resolve(&["objects"]), b"not a dir").unwrap();
        let err = layout.ensure_dir(&["objects"], true).unwrap_err();
        assert!(matches!(err, RepoError::NotADirectory(_)));
    }

    #[test]
    fn file_under_creates_parent_dirs() {
        let (_dir, layout) = layout();
        let path = layout
            .file_under(&["refs", "remotes", "origin", "HEAD"], true)
            .unwrap();
        assert!(path.parent().unwrap().is_dir());
        assert!(!path.exists());
    }

    #[test]
    fn file_under_without_create_leaves_parents_absent() {
        let (_dir, layout) = layout();
        let path = layout.file_under(&["refs", "heads", "master"], false).unwrap();
        assert!(!path.parent().unwrap().exists());
    }

    #[test]
    fn file_under_top_level_file() {
        let (_dir, layout) = layout();
        let path = layout.file_under(&["HEAD"], false).unwrap();
        assert_eq!(path, layout.meta_dir().join("HEAD"));
    }
}
