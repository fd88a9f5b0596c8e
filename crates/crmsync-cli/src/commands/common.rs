//! Common types and utilities for command execution

use std::path::Path;

use anyhow::Context;
use crmsync_core::config::ConfigManager;
use crmsync_core::dispatch::DispatchPlan;
use crmsync_core::mapping::{Direction, MemoryMappingStore, Selector};
use crmsync_core::output::{self, OutputFormat};
use crmsync_core::resolver::MappingResolver;
use crmsync_core::selection::{MappingSelector, SelectError};

use crate::cli::OutputMode;
use crate::interactive::TerminalPrompter;

/// Execution options shared by all commands
pub struct CommandOptions<'a> {
    /// Prompt for missing or unusable arguments
    pub interactive: bool,
    /// Output format
    pub format: OutputFormat,
    /// Path to an explicit mapping file
    pub mappings_path: Option<&'a Path>,
}

impl<'a> CommandOptions<'a> {
    /// Create new command options
    ///
    /// Prompting is only enabled when requested and stderr is a terminal.
    #[must_use]
    pub fn new(
        allow_interaction: bool,
        format: OutputMode,
        mappings_path: Option<&'a Path>,
    ) -> Self {
        Self {
            interactive: allow_interaction && TerminalPrompter::is_available(),
            format: convert_output_mode(format),
            mappings_path,
        }
    }

    /// Load the mapping store from discovered files
    ///
    /// # Errors
    ///
    /// Returns an error if mapping files are missing or invalid.
    pub fn load_store(&self) -> anyhow::Result<MemoryMappingStore> {
        let store = ConfigManager::load(self.mappings_path).context("Failed to load mappings")?;

        tracing::debug!(count = store.len(), "loaded mappings");

        Ok(store)
    }
}

const fn convert_output_mode(mode: OutputMode) -> OutputFormat {
    match mode {
        OutputMode::Table => OutputFormat::Table,
        OutputMode::Json => OutputFormat::Json,
        OutputMode::Csv => OutputFormat::Csv,
    }
}

/// Collect a selector, resolve it and print the dispatch plan
///
/// A user abort at the prompt ends the command successfully.
///
/// # Errors
///
/// Returns an error if the selector is missing in non-interactive mode, or
/// resolution fails.
pub fn run_sync(
    direction: Direction,
    raw_selector: Option<&str>,
    options: &CommandOptions<'_>,
) -> anyhow::Result<()> {
    let store = options.load_store()?;

    let selector = if options.interactive {
        let all_label = format!("All {direction} mappings");
        let mut prompter = TerminalPrompter::new();
        match MappingSelector::new(&store).select(
            raw_selector,
            direction,
            "Choose a mapping",
            Some(all_label.as_str()),
            &mut prompter,
        ) {
            Ok(selector) => selector,
            Err(SelectError::Aborted) => {
                eprintln!("\nCancelled by user.");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }
    } else {
        let raw = raw_selector.with_context(|| {
            format!("A mapping name or {} is required when not running interactively", Selector::ALL)
        })?;
        Selector::parse(raw)
    };

    tracing::debug!(%direction, %selector, "resolving mappings");

    let mappings = MappingResolver::new(&store).resolve(&selector, direction)?;
    let plan = DispatchPlan::new(direction, &selector, &mappings)?;
    plan.announce();

    print!("{}", output::render_dispatch(&plan, options.format)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_mode_conversion() {
        assert_eq!(convert_output_mode(OutputMode::Table), OutputFormat::Table);
        assert_eq!(convert_output_mode(OutputMode::Json), OutputFormat::Json);
        assert_eq!(convert_output_mode(OutputMode::Csv), OutputFormat::Csv);
    }

    #[test]
    fn test_interaction_disabled_by_flag() {
        let options = CommandOptions::new(false, OutputMode::Table, None);

        assert!(!options.interactive);
    }
}
