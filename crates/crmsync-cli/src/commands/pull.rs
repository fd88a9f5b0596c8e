use crmsync_core::mapping::Direction;

use super::common::{self, CommandOptions};

pub struct Pull;

impl Pull {
    pub fn execute(selector: Option<&str>, options: &CommandOptions<'_>) -> anyhow::Result<()> {
        tracing::debug!(?selector, "executing pull command");

        common::run_sync(Direction::Pull, selector, options)
    }
}
