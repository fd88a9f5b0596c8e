//! Mapping file discovery from multiple locations

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Project mapping file name, searched in the current directory and parents
pub const PROJECT_FILE: &str = ".crmsync.toml";

/// Mapping file locations in order of precedence
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigFiles {
    /// Explicitly requested file (highest precedence)
    pub explicit: Option<PathBuf>,
    /// Project file (.crmsync.toml)
    pub project: Option<PathBuf>,
    /// Global XDG file
    pub global: Option<PathBuf>,
}

impl ConfigFiles {
    /// Files in merge order, lowest precedence first
    pub fn in_merge_order(&self) -> impl Iterator<Item = &Path> {
        [&self.global, &self.project, &self.explicit]
            .into_iter()
            .filter_map(|p| p.as_deref())
    }
}

/// Mapping file discovery
pub struct ConfigDiscovery;

impl ConfigDiscovery {
    /// Discover all available mapping files
    ///
    /// # Errors
    ///
    /// Returns an error if `explicit_path` is given but does not exist.
    pub fn discover(explicit_path: Option<&Path>) -> Result<ConfigFiles> {
        let explicit = match explicit_path {
            Some(path) if path.is_file() => Some(path.to_path_buf()),
            Some(path) => anyhow::bail!("Mapping file not found: {}", path.display()),
            None => None,
        };

        let current_dir = std::env::current_dir().ok();
        let project = current_dir
            .as_deref()
            .and_then(|dir| Self::find_upwards(dir, PROJECT_FILE));

        Ok(ConfigFiles {
            explicit,
            project,
            global: Self::find_global_config(),
        })
    }

    /// Find a file in `start` or one of its parent directories
    pub fn find_upwards(start: &Path, name: &str) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(name))
            .find(|candidate| candidate.is_file())
    }

    /// Find global mappings in the XDG config directory
    fn find_global_config() -> Option<PathBuf> {
        let global = dirs::config_dir()?.join("crmsync").join("mappings.toml");
        global.is_file().then_some(global)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_discover_explicit_file() {
        let tmp = TempDir::new().unwrap();
        let explicit = tmp.path().join("custom.toml");
        fs::write(&explicit, "# mappings").unwrap();

        let files = ConfigDiscovery::discover(Some(explicit.as_path())).unwrap();

        assert_eq!(files.explicit, Some(explicit));
    }

    #[test]
    fn test_discover_explicit_file_missing() {
        let tmp = TempDir::new().unwrap();
        let explicit = tmp.path().join("nonexistent.toml");

        let result = ConfigDiscovery::discover(Some(explicit.as_path()));

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Mapping file not found"));
    }

    #[test]
    fn test_find_upwards_in_parent() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(tmp.path().join(PROJECT_FILE), "").unwrap();

        let found = ConfigDiscovery::find_upwards(&nested, PROJECT_FILE);

        assert_eq!(found, Some(tmp.path().join(PROJECT_FILE)));
    }

    #[test]
    fn test_find_upwards_prefers_nearest() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("project");
        fs::create_dir_all(&nested).unwrap();
        fs::write(tmp.path().join(PROJECT_FILE), "").unwrap();
        fs::write(nested.join(PROJECT_FILE), "").unwrap();

        let found = ConfigDiscovery::find_upwards(&nested, PROJECT_FILE);

        assert_eq!(found, Some(nested.join(PROJECT_FILE)));
    }

    #[test]
    fn test_merge_order() {
        let files = ConfigFiles {
            explicit: Some(PathBuf::from("explicit.toml")),
            project: None,
            global: Some(PathBuf::from("global.toml")),
        };

        let order: Vec<&Path> = files.in_merge_order().collect();

        assert_eq!(order, [Path::new("global.toml"), Path::new("explicit.toml")]);
    }

    // Note: discovery from the process working directory is not tested here
    // to avoid std::env::set_current_dir() races between tests.
}
