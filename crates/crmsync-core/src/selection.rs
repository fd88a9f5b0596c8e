//! Interactive selection of mappings and remote objects
//!
//! Selection only fills in a missing or unusable selector by asking a
//! [`Prompter`]. Validation of the final selector is left to
//! [`MappingResolver`](crate::resolver::MappingResolver).

use thiserror::Error;

use crate::event::{self, WarningEvent};
use crate::mapping::{Direction, MappingStore, Selector};

/// One entry of a choice list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    /// Value returned when chosen
    pub key: String,
    /// Text shown to the user
    pub label: String,
}

impl ChoiceOption {
    /// Create an option
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }

    /// Create an option whose label is its key
    pub fn plain(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            label: key.clone(),
            key,
        }
    }
}

/// Presents a choice list to the user
pub trait Prompter {
    /// Ask the user to pick one of `options`
    ///
    /// Returns the chosen key, or `None` if the user aborted.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal interaction fails.
    fn choose(&mut self, message: &str, options: &[ChoiceOption]) -> anyhow::Result<Option<String>>;
}

/// Errors produced while collecting a selection
#[derive(Debug, Error)]
pub enum SelectError {
    /// The user cancelled the prompt
    #[error("Cancelled by user.")]
    Aborted,

    /// There was nothing to choose from
    #[error("No {what} available to choose from.")]
    NoCandidates {
        /// What was being chosen
        what: &'static str,
    },

    /// The prompter failed
    #[error("Prompt failed")]
    Prompt(#[source] anyhow::Error),
}

/// Collects a mapping selector, prompting when needed
pub struct MappingSelector<'s, S: MappingStore + ?Sized> {
    store: &'s S,
}

impl<'s, S: MappingStore + ?Sized> MappingSelector<'s, S> {
    /// Create a selector over a store
    #[must_use]
    pub const fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Produce a selector from raw input, prompting if it is missing or
    /// unusable for `direction`
    ///
    /// `all_option`, when set, adds an `ALL` choice with that label.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the user aborts
    /// - there are no candidates and no `ALL` choice
    /// - the prompter fails
    pub fn select(
        &self,
        raw: Option<&str>,
        direction: Direction,
        message: &str,
        all_option: Option<&str>,
        prompter: &mut dyn Prompter,
    ) -> Result<Selector, SelectError> {
        if let Some(name) = raw
            && let Some(selector) = self.usable(name, direction)
        {
            return Ok(selector);
        }

        let mut options: Vec<ChoiceOption> = self
            .store
            .load_for_direction(direction)
            .into_iter()
            .flatten()
            .map(|mapping| ChoiceOption::plain(mapping.name.as_str()))
            .collect();

        if let Some(label) = all_option {
            options.push(ChoiceOption::new(Selector::ALL, label));
        }

        if options.is_empty() {
            return Err(SelectError::NoCandidates { what: "mappings" });
        }

        let answer = prompter
            .choose(message, &options)
            .map_err(SelectError::Prompt)?
            .ok_or(SelectError::Aborted)?;

        Ok(Selector::parse(&answer))
    }

    /// Accept `name` as-is if it can be used for `direction`, warning otherwise
    fn usable(&self, name: &str, direction: Direction) -> Option<Selector> {
        if Selector::is_all(name) {
            return Some(Selector::All);
        }

        let warning = match self.store.load(name) {
            None => format!("Mapping {name} does not exist."),
            Some(mapping) if mapping.supports(direction) => {
                return Some(Selector::Name(name.to_string()));
            }
            Some(_) => format!("Mapping {name} does not {direction}."),
        };

        event::emit(&WarningEvent::new(warning).with_context("mapping", name));
        None
    }
}

/// Collects a remote object name, prompting when it is missing
pub struct ObjectSelector;

impl ObjectSelector {
    /// Return `raw` if given, otherwise ask the user to choose from `objects`
    ///
    /// A given name is not checked against `objects`.
    ///
    /// # Errors
    ///
    /// Returns an error if the user aborts, `objects` is empty, or the
    /// prompter fails.
    pub fn select(
        raw: Option<&str>,
        objects: &[&str],
        message: &str,
        prompter: &mut dyn Prompter,
    ) -> Result<String, SelectError> {
        if let Some(object) = raw {
            return Ok(object.to_string());
        }

        if objects.is_empty() {
            return Err(SelectError::NoCandidates {
                what: "remote objects",
            });
        }

        let options: Vec<ChoiceOption> = objects.iter().map(|o| ChoiceOption::plain(*o)).collect();

        prompter
            .choose(message, &options)
            .map_err(SelectError::Prompt)?
            .ok_or(SelectError::Aborted)
    }
}
