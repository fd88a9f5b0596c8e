//! Resolution of a selector and direction into mapping definitions
//!
//! The `ALL` selector silently filters out mappings that do not support the
//! requested direction, while a concrete name that does not support it is a
//! hard error. Callers relying on either behaviour should not assume the
//! other.

use thiserror::Error;

use crate::mapping::{Direction, MappingDefinition, MappingStore, Selector};

/// Errors produced while resolving mappings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No mapping with the given name exists
    #[error("Mapping {name} does not exist.")]
    NotFound {
        /// Requested mapping name
        name: String,
    },

    /// The mapping exists but is not configured for the direction
    #[error("Mapping {name} does not {direction}.")]
    DirectionMismatch {
        /// Requested mapping name
        name: String,
        /// Requested direction
        direction: Direction,
    },

    /// Nothing matched the selector and direction
    #[error("No {}mappings matched selector {selector}.", direction_prefix(.direction))]
    EmptyResult {
        /// Requested selector
        selector: Selector,
        /// Requested direction
        direction: Direction,
    },
}

const fn direction_prefix(direction: &Direction) -> &'static str {
    match direction {
        Direction::None => "",
        Direction::Push => "push ",
        Direction::Pull => "pull ",
    }
}

/// Resolves selectors against a mapping store
///
/// Stateless between calls; results borrow from the store.
pub struct MappingResolver<'s, S: MappingStore + ?Sized> {
    store: &'s S,
}

impl<'s, S: MappingStore + ?Sized> MappingResolver<'s, S> {
    /// Create a resolver over a store
    #[must_use]
    pub const fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Resolve a selector and direction into a non-empty list of mappings
    ///
    /// Results keep the store's order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - a concrete name is not in the store
    /// - a concrete mapping does not support the direction
    /// - nothing matched
    pub fn resolve(
        &self,
        selector: &Selector,
        direction: Direction,
    ) -> Result<Vec<&'s MappingDefinition>, ResolveError> {
        let slots = match selector {
            Selector::All => match direction {
                Direction::Pull => self.store.load_pull_mappings(),
                Direction::Push => self.store.load_push_mappings(),
                Direction::None => self.store.load_multiple(),
            },
            Selector::Name(name) => {
                let mapping = self
                    .store
                    .load(name)
                    .ok_or_else(|| ResolveError::NotFound { name: name.clone() })?;

                if direction != Direction::None && !mapping.supports(direction) {
                    return Err(ResolveError::DirectionMismatch {
                        name: name.clone(),
                        direction,
                    });
                }

                vec![Some(mapping)]
            }
        };

        let mappings: Vec<&'s MappingDefinition> = slots.into_iter().flatten().collect();

        if mappings.is_empty() {
            return Err(ResolveError::EmptyResult {
                selector: selector.clone(),
                direction,
            });
        }

        Ok(mappings)
    }

    /// Resolve mappings for push
    ///
    /// # Errors
    ///
    /// See [`MappingResolver::resolve`].
    pub fn resolve_push(&self, selector: &Selector) -> Result<Vec<&'s MappingDefinition>, ResolveError> {
        self.resolve(selector, Direction::Push)
    }

    /// Resolve mappings for pull
    ///
    /// # Errors
    ///
    /// See [`MappingResolver::resolve`].
    pub fn resolve_pull(&self, selector: &Selector) -> Result<Vec<&'s MappingDefinition>, ResolveError> {
        self.resolve(selector, Direction::Pull)
    }
}
