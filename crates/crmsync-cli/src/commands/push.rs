use crmsync_core::mapping::Direction;

use super::common::{self, CommandOptions};

pub struct Push;

impl Push {
    pub fn execute(selector: Option<&str>, options: &CommandOptions<'_>) -> anyhow::Result<()> {
        tracing::debug!(?selector, "executing push command");

        common::run_sync(Direction::Push, selector, options)
    }
}
