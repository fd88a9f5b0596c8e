use crmsync_core::mapping::{Direction, MappingDefinition, MappingStore};
use crmsync_core::output;

use super::common::CommandOptions;
use crate::cli::DirectionArg;

pub struct List;

impl List {
    pub fn execute(direction: Option<DirectionArg>, options: &CommandOptions<'_>) -> anyhow::Result<()> {
        let direction = Self::convert_direction(direction);

        tracing::debug!(%direction, "executing list command");

        let store = options.load_store()?;
        let mappings: Vec<&MappingDefinition> = store
            .load_for_direction(direction)
            .into_iter()
            .flatten()
            .collect();

        print!("{}", output::render_mappings(&mappings, options.format)?);

        Ok(())
    }

    const fn convert_direction(direction: Option<DirectionArg>) -> Direction {
        match direction {
            None => Direction::None,
            Some(DirectionArg::Push) => Direction::Push,
            Some(DirectionArg::Pull) => Direction::Pull,
        }
    }
}
