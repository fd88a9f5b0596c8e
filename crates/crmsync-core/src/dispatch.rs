//! Dispatch planning for resolved mappings
//!
//! A plan pairs every resolved mapping with the direction it is dispatched
//! in. Executing the record-level push or pull happens outside this crate.

use serde::Serialize;

use crate::error::Result;
use crate::event::{self, NoticeEvent};
use crate::mapping::{Direction, MappingDefinition, Selector};

/// One unit of synchronization work
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncJob<'a> {
    /// Mapping name
    pub mapping: &'a str,
    /// Mapping label
    pub label: &'a str,
    /// Remote object type
    pub remote_object: Option<&'a str>,
    /// Local entity type
    pub local_entity: Option<&'a str>,
    /// Push or pull
    pub direction: Direction,
}

/// Jobs for one push or pull invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchPlan<'a> {
    /// Push or pull
    pub direction: Direction,
    /// Selector the mappings were resolved from
    pub selector: String,
    /// One job per mapping, in resolution order
    pub jobs: Vec<SyncJob<'a>>,
}

impl<'a> DispatchPlan<'a> {
    /// Build a plan for resolved mappings
    ///
    /// # Errors
    ///
    /// Returns an error if `direction` is [`Direction::None`].
    pub fn new(
        direction: Direction,
        selector: &Selector,
        mappings: &[&'a MappingDefinition],
    ) -> Result<Self> {
        if direction == Direction::None {
            anyhow::bail!("Dispatch requires a push or pull direction");
        }

        let jobs = mappings
            .iter()
            .map(|&mapping| SyncJob {
                mapping: &mapping.name,
                label: mapping.display_label(),
                remote_object: mapping.remote_object.as_deref(),
                local_entity: mapping.local_entity.as_deref(),
                direction,
            })
            .collect();

        Ok(Self {
            direction,
            selector: selector.to_string(),
            jobs,
        })
    }

    /// Log a notice for every job
    pub fn announce(&self) {
        for job in &self.jobs {
            let message = format!("Dispatching {} for mapping {}", job.direction, job.mapping);
            let mut notice = NoticeEvent::new(message).with_context("selector", &self.selector);
            if let Some(object) = job.remote_object {
                notice = notice.with_context("remote_object", object);
            }
            event::emit(&notice);
        }
    }

    /// One-line summary
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} {} job(s) dispatched for selector {}",
            self.jobs.len(),
            self.direction,
            self.selector
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_keeps_order() {
        let mut first = MappingDefinition::new("b", true, false);
        first.remote_object = Some("Account".to_string());
        let second = MappingDefinition::new("a", true, true);

        let plan = DispatchPlan::new(Direction::Push, &Selector::All, &[&first, &second]).unwrap();

        let names: Vec<&str> = plan.jobs.iter().map(|j| j.mapping).collect();
        assert_eq!(names, ["b", "a"]);
        assert_eq!(plan.jobs[0].remote_object, Some("Account"));
        assert_eq!(plan.jobs[1].label, "a");
        assert!(plan.jobs.iter().all(|j| j.direction == Direction::Push));
    }

    #[test]
    fn test_plan_requires_direction() {
        let mapping = MappingDefinition::new("a", true, true);

        let result = DispatchPlan::new(Direction::None, &Selector::All, &[&mapping]);

        assert!(result.is_err());
    }

    #[test]
    fn test_summary() {
        let mapping = MappingDefinition::new("contact", false, true);
        let plan =
            DispatchPlan::new(Direction::Pull, &Selector::Name("contact".to_string()), &[&mapping])
                .unwrap();

        assert_eq!(plan.summary(), "1 pull job(s) dispatched for selector contact");
        plan.announce();
    }
}
