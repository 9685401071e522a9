use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RepoError, RepoResult};

/// The repository format version this build reads and writes.
pub const SUPPORTED_FORMAT_VERSION: u32 = 0;

/// On-disk repository configuration.
///
/// Stored as a `[core]` key-value file in the metadata directory. The format
/// is deliberately minimal: one section, three keys.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoConfig {
    pub core: CoreConfig,
}

/// The `[core]` section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreConfig {
    /// On-disk format version. Only version 0 is supported.
    pub repositoryformatversion: u32,
    /// Whether file mode changes are tracked (unused by this core).
    pub filemode: bool,
    /// Whether the repository has no working tree (unused by this core).
    pub bare: bool,
}

impl Default for RepoConfig {
    fn default() -> Self {
        Self {
            core: CoreConfig {
                repositoryformatversion: SUPPORTED_FORMAT_VERSION,
                filemode: false,
                bare: false,
            },
        }
    }
}

impl RepoConfig {
    /// Read and parse the configuration file at `path`.
    ///
    /// Fails with [`RepoError::MissingConfig`] if the file does not exist.
    pub fn read(path: &Path) -> RepoResult<Self> {
        if !path.exists() {
            return Err(RepoError::MissingConfig(path.to_path_buf()));
        }
        let text = fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| RepoError::ConfigParse(e.to_string()))
    }

    /// Serialize the configuration to `path`, overwriting any existing file.
    pub fn write(&self, path: &Path) -> RepoResult<()> {
        let text =
            toml::to_string(self).map_err(|e| RepoError::ConfigEncode(e.to_string()))?;
        fs::write(path, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RepoConfig::default();
        assert_eq!(config.core.repositoryformatversion, 0);
        assert!(!config.core.filemode);
        assert!(!config.core.bare);
    }

    #[test]
    fn write_then_read_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config");
        let config = RepoConfig::default();
        config.write(&path).unwrap();
        let read_back = RepoConfig::read(&path).unwrap();
        assert_eq!(config, read_back);
    }

    #[test]
    fn on_disk_format_is_a_core_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config");
        RepoConfig::default().write(&path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("[core]\n"));
        assert!(text.contains("repositoryformatversion = 0"));
        assert!(text.contains("filemode = false"));
        assert!(text.contains("bare = false"));
    }

    #[test]
    fn read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = RepoConfig::read(&dir.path().join("config")).unwrap_err();
        assert!(matches!(err, RepoError::MissingConfig(_)));
    }

    #[test]
    fn read_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config");
        fs::write(&path, "[core\nthis is not a config").unwrap();
        let err = RepoConfig::read(&path).unwrap_err();
        assert!(matches!(err, RepoError::ConfigParse(_)));
    }

    #[test]
    fn nonzero_version_survives_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config");
        let mut config = RepoConfig::default();
        config.core.repositoryformatversion = 7;
        config.write(&path).unwrap();
        let read_back = RepoConfig::read(&path).unwrap();
        assert_eq!(read_back.core.repositoryformatversion, 7);
    }
}
