//! Mapping file discovery, parsing, merging and validation
//!
//! This module handles:
//! - Mapping file discovery from multiple locations
//! - TOML parsing with serde
//! - Merging with precedence rules
//! - Validation and error reporting

mod discovery;
mod merge;
mod types;
mod validation;


pub use discovery::{ConfigDiscovery, ConfigFiles};
pub use merge::ConfigMerger;
pub use types::MappingFile;
pub use validation::ConfigValidator;

use std::path::Path;

use crate::error::Result;
use crate::mapping::MemoryMappingStore;

/// Environment variable naming an explicit mapping file
pub const MAPPINGS_ENV: &str = "CRMSYNC_MAPPINGS";

/// Coordinates discovery, merging and validation of mapping files
pub struct ConfigManager;

impl ConfigManager {
    /// Load and merge mappings from all discovered sources
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit path does not exist, or any mapping
    /// file is unreadable or invalid.
    pub fn load(explicit_path: Option<&Path>) -> Result<MemoryMappingStore> {
        let files = ConfigDiscovery::discover(explicit_path)?;
        Self::load_files(&files)
    }

    /// Merge and validate an already discovered set of files
    ///
    /// # Errors
    ///
    /// Returns an error if any mapping file is unreadable or invalid.
    pub fn load_files(files: &ConfigFiles) -> Result<MemoryMappingStore> {
        let store = ConfigMerger::merge(files)?;
        ConfigValidator::validate_store(&store)?;

        tracing::debug!(mappings = store.len(), "loaded mapping store");
        Ok(store)
    }
}
