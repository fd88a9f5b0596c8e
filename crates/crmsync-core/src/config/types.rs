//! Mapping file structure

use serde::{Deserialize, Serialize};

use crate::mapping::MappingDefinition;

/// Contents of one mapping file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MappingFile {
    /// Mapping definitions in file order
    #[serde(default)]
    pub mappings: Vec<MappingDefinition>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_file_default() {
        let file = MappingFile::default();
        assert!(file.mappings.is_empty());
    }

    #[test]
    fn test_parse_mapping_file() {
        let file: MappingFile = toml::from_str(
            r#"
[[mappings]]
name = "contact"
label = "User to Contact"
remote_object = "Contact"
local_entity = "user"
push = true

[[mappings]]
name = "account"
pull = true
"#,
        )
        .unwrap();

        assert_eq!(file.mappings.len(), 2);

        let contact = &file.mappings[0];
        assert_eq!(contact.name, "contact");
        assert_eq!(contact.display_label(), "User to Contact");
        assert_eq!(contact.remote_object.as_deref(), Some("Contact"));
        assert!(contact.push);
        assert!(!contact.pull);

        let account = &file.mappings[1];
        assert!(account.label.is_none());
        assert!(!account.push);
        assert!(account.pull);
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let result: Result<MappingFile, _> = toml::from_str(
            r#"
[[mappings]]
push = true
"#,
        );

        assert!(result.is_err());
    }
}
