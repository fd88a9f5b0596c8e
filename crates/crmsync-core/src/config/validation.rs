//! Mapping validation and error reporting

use std::collections::HashSet;

use super::types::MappingFile;
use crate::error::Result;
use crate::mapping::{MappingDefinition, MappingStore, MemoryMappingStore, Selector};

/// Mapping validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate one mapping file
    ///
    /// # Errors
    ///
    /// Returns an error if a definition is invalid or a name repeats.
    pub fn validate_file(file: &MappingFile) -> Result<()> {
        let mut seen = HashSet::new();

        for (idx, mapping) in file.mappings.iter().enumerate() {
            Self::validate_mapping(mapping)
                .map_err(|e| e.context(format!("Mapping #{} is invalid", idx + 1)))?;

            if !seen.insert(mapping.name.as_str()) {
                anyhow::bail!("Duplicate mapping name: {}", mapping.name);
            }
        }

        Ok(())
    }

    /// Validate every definition in a merged store
    ///
    /// # Errors
    ///
    /// Returns an error if any definition is invalid.
    pub fn validate_store(store: &MemoryMappingStore) -> Result<()> {
        for mapping in store.load_multiple().into_iter().flatten() {
            Self::validate_mapping(mapping)?;
        }
        Ok(())
    }

    /// Validate a single definition
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty, contains whitespace or is the
    /// reserved `ALL` sentinel, or an optional field is blank.
    pub fn validate_mapping(mapping: &MappingDefinition) -> Result<()> {
        if mapping.name.is_empty() {
            anyhow::bail!("Mapping name cannot be empty");
        }

        if mapping.name.chars().any(char::is_whitespace) {
            anyhow::bail!("Mapping name cannot contain whitespace: '{}'", mapping.name);
        }

        if Selector::is_all(&mapping.name) {
            anyhow::bail!(
                "Mapping name '{}' is reserved for selecting all mappings",
                mapping.name
            );
        }

        for (field, value) in [
            ("label", &mapping.label),
            ("remote_object", &mapping.remote_object),
            ("local_entity", &mapping.local_entity),
        ] {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                anyhow::bail!("Mapping {} has an empty {field}", mapping.name);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_of(mappings: Vec<MappingDefinition>) -> MappingFile {
        MappingFile { mappings }
    }

    #[test]
    fn test_validate_empty_file() {
        assert!(ConfigValidator::validate_file(&MappingFile::default()).is_ok());
    }

    #[test]
    fn test_validate_valid_file() {
        let mut contact = MappingDefinition::new("contact", true, false);
        contact.remote_object = Some("Contact".to_string());

        let file = file_of(vec![contact, MappingDefinition::new("account", false, true)]);

        assert!(ConfigValidator::validate_file(&file).is_ok());
    }

    #[test]
    fn test_validate_duplicate_names() {
        let file = file_of(vec![
            MappingDefinition::new("contact", true, false),
            MappingDefinition::new("contact", false, true),
        ]);

        let result = ConfigValidator::validate_file(&file);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Duplicate mapping name"));
    }

    #[test]
    fn test_validate_reserved_all_name() {
        for name in ["ALL", "all", "All"] {
            let result = ConfigValidator::validate_mapping(&MappingDefinition::new(name, true, true));

            assert!(result.is_err());
            assert!(result.unwrap_err().to_string().contains("reserved"));
        }
    }

    #[test]
    fn test_validate_empty_and_whitespace_names() {
        assert!(ConfigValidator::validate_mapping(&MappingDefinition::new("", true, true)).is_err());
        assert!(ConfigValidator::validate_mapping(&MappingDefinition::new("a b", true, true)).is_err());
    }

    #[test]
    fn test_validate_blank_remote_object() {
        let mut mapping = MappingDefinition::new("contact", true, false);
        mapping.remote_object = Some("  ".to_string());

        let result = ConfigValidator::validate_mapping(&mapping);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("empty remote_object"));
    }

    #[test]
    fn test_file_errors_name_the_position() {
        let file = file_of(vec![
            MappingDefinition::new("ok", true, false),
            MappingDefinition::new("", true, false),
        ]);

        let err = ConfigValidator::validate_file(&file).unwrap_err();

        assert!(format!("{err:#}").contains("Mapping #2 is invalid"));
    }
}
