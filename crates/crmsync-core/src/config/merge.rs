//! Mapping file merging with precedence rules
//!
//! Files are applied from lowest to highest precedence. A mapping whose name
//! was already defined by an earlier file replaces that definition at its
//! original position; new names are appended. The resulting store order is
//! definition order.

use std::fs;
use std::path::Path;

use anyhow::Context;

use super::discovery::ConfigFiles;
use super::types::MappingFile;
use super::validation::ConfigValidator;
use crate::error::Result;
use crate::mapping::MemoryMappingStore;

/// Mapping file merger
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge mapping files with precedence rules
    ///
    /// Precedence order (highest to lowest):
    /// 1. Explicit file (`--mappings` / `CRMSYNC_MAPPINGS`)
    /// 2. `.crmsync.toml`
    /// 3. Global config
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read, parsed or validated.
    pub fn merge(files: &ConfigFiles) -> Result<MemoryMappingStore> {
        let mut store = MemoryMappingStore::new();

        for path in files.in_merge_order() {
            Self::merge_into(&mut store, path)?;
        }

        Ok(store)
    }

    /// Load a single mapping file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load_file(path: &Path) -> Result<MappingFile> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read mapping file: {}", path.display()))?;

        let file: MappingFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse mapping file: {}", path.display()))?;

        ConfigValidator::validate_file(&file)
            .with_context(|| format!("Invalid mapping file: {}", path.display()))?;

        Ok(file)
    }

    /// Load and merge a single file into the store
    fn merge_into(store: &mut MemoryMappingStore, path: &Path) -> Result<()> {
        let file = Self::load_file(path)?;

        for mapping in file.mappings {
            let name = mapping.name.clone();
            if store.insert(mapping).is_some() {
                tracing::debug!(mapping = %name, file = %path.display(), "mapping overridden");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::MappingStore;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_merge_no_files() {
        let store = ConfigMerger::merge(&ConfigFiles::default()).unwrap();

        assert!(store.is_empty());
    }

    #[test]
    fn test_merge_single_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("mappings.toml");
        fs::write(
            &file,
            r#"
[[mappings]]
name = "contact"
push = true

[[mappings]]
name = "account"
pull = true
"#,
        )
        .unwrap();

        let files = ConfigFiles {
            project: Some(file),
            ..ConfigFiles::default()
        };
        let store = ConfigMerger::merge(&files).unwrap();

        assert_eq!(store.names().collect::<Vec<_>>(), ["contact", "account"]);
    }

    #[test]
    fn test_merge_precedence_replaces_in_place() {
        let tmp = TempDir::new().unwrap();

        let global = tmp.path().join("global.toml");
        fs::write(
            &global,
            r#"
[[mappings]]
name = "contact"
push = true

[[mappings]]
name = "account"
push = true
"#,
        )
        .unwrap();

        let project = tmp.path().join("project.toml");
        fs::write(
            &project,
            r#"
[[mappings]]
name = "lead"
pull = true

[[mappings]]
name = "contact"
pull = true
"#,
        )
        .unwrap();

        let files = ConfigFiles {
            explicit: None,
            project: Some(project),
            global: Some(global),
        };
        let store = ConfigMerger::merge(&files).unwrap();

        assert_eq!(store.names().collect::<Vec<_>>(), ["contact", "account", "lead"]);

        let contact = store.load("contact").unwrap();
        assert!(!contact.push);
        assert!(contact.pull);
    }

    #[test]
    fn test_merge_unparseable_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("broken.toml");
        fs::write(&file, "[[mappings]\nname = ").unwrap();

        let files = ConfigFiles {
            explicit: Some(file),
            ..ConfigFiles::default()
        };
        let err = ConfigMerger::merge(&files).unwrap_err();

        assert!(err.to_string().contains("Failed to parse mapping file"));
    }
}
