use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::RepoConfig;
use crate::error::{RepoError, RepoResult};
use crate::layout::Layout;

/// Name of the metadata directory at the root of a worktree.
pub const META_DIR: &str = ".keel";

/// Branch that `HEAD` points at in a freshly created repository.
pub const DEFAULT_BRANCH: &str = "master";

const DESCRIPTION: &str =
    "Unnamed repository; edit this file 'description' to name the repository.\n";

/// An opened keel repository.
///
/// Holds the worktree path, the metadata directory path, and the parsed
/// configuration. Immutable for the lifetime of a process run; all mutable
/// state lives on disk.
#[derive(Clone, Debug)]
pub struct Repository {
    worktree: PathBuf,
    meta_dir: PathBuf,
    config: RepoConfig,
}

impl Repository {
    /// Open the repository whose worktree is at `worktree`.
    ///
    /// With `force = false` the metadata directory must exist, the config
    /// file must be present, and `repositoryformatversion` must be 0. With
    /// `force = true` validation is skipped; this is used during creation,
    /// before the config file exists.
    pub fn open(worktree: impl Into<PathBuf>, force: bool) -> RepoResult<Self> {
        let worktree = worktree.into();
        let meta_dir = worktree.join(META_DIR);

        if !force && !meta_dir.is_dir() {
            return Err(RepoError::NotFound(worktree));
        }

        let config_path = meta_dir.join("config");
        let config = if config_path.exists() {
            RepoConfig::read(&config_path)?
        } else if force {
            RepoConfig::default()
        } else {
            return Err(RepoError::MissingConfig(config_path));
        };

        if !force {
            let version = config.core.repositoryformatversion;
            if version != 0 {
                return Err(RepoError::UnsupportedFormat(version));
            }
        }

        Ok(Self {
            worktree,
            meta_dir,
            config,
        })
    }

    /// Create a new repository at `worktree`.
    ///
    /// The path may be absent (it is created) or an existing empty
    /// directory. Anything else fails with [`RepoError::InvalidTarget`].
    /// Writes the directory skeleton (`branches/`, `objects/`,
    /// `refs/tags/`, `refs/heads/`) and the three bootstrap files
    /// (`description`, `HEAD`, `config`).
    pub fn create(worktree: impl Into<PathBuf>) -> RepoResult<Self> {
        let repo = Self::open(worktree, true)?;

        if repo.worktree.exists() {
            if !repo.worktree.is_dir() {
                return Err(RepoError::InvalidTarget {
                    path: repo.worktree.clone(),
                    reason: "not a directory".into(),
                });
            }
            if fs::read_dir(&repo.worktree)?.next().is_some() {
                return Err(RepoError::InvalidTarget {
                    path: repo.worktree.clone(),
                    reason: "directory is not empty".into(),
                });
            }
        } else {
            fs::create_dir_all(&repo.worktree)?;
        }

        let layout = repo.layout();
        layout.ensure_dir(&["branches"], true)?;
        layout.ensure_dir(&["objects"], true)?;
        layout.ensure_dir(&["refs", "tags"], true)?;
        layout.ensure_dir(&["refs", "heads"], true)?;

        fs::write(layout.file_under(&["description"], false)?, DESCRIPTION)?;
        fs::write(
            layout.file_under(&["HEAD"], false)?,
            format!("ref: refs/heads/{DEFAULT_BRANCH}\n"),
        )?;
        repo.config
            .write(&layout.file_under(&["config"], false)?)?;

        debug!(worktree = %repo.worktree.display(), "repository created");
        Ok(repo)
    }

    /// Find the repository containing `start` by walking ancestor
    /// directories.
    ///
    /// The walk is iterative and terminates at the filesystem root (where a
    /// path has no parent distinct from itself). Without a match,
    /// `required = true` fails with [`RepoError::NotFound`] and
    /// `required = false` returns `Ok(None)`.
    pub fn discover(start: &Path, required: bool) -> RepoResult<Option<Self>> {
        let mut path = start.canonicalize()?;
        loop {
            if path.join(META_DIR).is_dir() {
                debug!(worktree = %path.display(), "repository discovered");
                return Self::open(path, false).map(Some);
            }
            match path.parent() {
                Some(parent) if parent != path => path = parent.to_path_buf(),
                _ => break,
            }
        }
        if required {
            Err(RepoError::NotFound(start.to_path_buf()))
        } else {
            Ok(None)
        }
    }

    /// The worktree root.
    pub fn worktree(&self) -> &Path {
        &self.worktree
    }

    /// The metadata directory (`<worktree>/.keel`).
    pub fn meta_dir(&self) -> &Path {
        &self.meta_dir
    }

    /// The parsed repository configuration.
    pub fn config(&self) -> &RepoConfig {
        &self.config
    }

    /// A [`Layout`] rooted at this repository's metadata directory.
    pub fn layout(&self) -> Layout {
        Layout::new(self.meta_dir.clone())
    }
}
