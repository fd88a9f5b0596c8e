use anyhow::Context;
use crmsync_core::event::{self, WarningEvent};
use crmsync_core::mapping::{MappingDefinition, MappingStore};
use crmsync_core::output;
use crmsync_core::selection::{ObjectSelector, SelectError};

use super::common::CommandOptions;
use crate::interactive::TerminalPrompter;

pub struct Objects;

impl Objects {
    pub fn execute(object: Option<&str>, options: &CommandOptions<'_>) -> anyhow::Result<()> {
        tracing::debug!(?object, "executing objects command");

        let store = options.load_store()?;
        let catalog = store.remote_objects();

        let object = if options.interactive {
            let mut prompter = TerminalPrompter::new();
            match ObjectSelector::select(object, &catalog, "Choose a remote object", &mut prompter) {
                Ok(object) => object,
                Err(SelectError::Aborted) => {
                    eprintln!("\nCancelled by user.");
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            }
        } else {
            object
                .context("An object name is required when not running interactively")?
                .to_string()
        };

        let mappings: Vec<&MappingDefinition> = store
            .load_multiple()
            .into_iter()
            .flatten()
            .filter(|m| m.remote_object.as_deref() == Some(object.as_str()))
            .collect();

        if mappings.is_empty() {
            event::emit(&WarningEvent::new(format!("No mappings target object {object}.")));
        }

        print!("{}", output::render_mappings(&mappings, options.format)?);

        Ok(())
    }
}
