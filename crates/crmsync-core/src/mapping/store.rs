//! Mapping storage

use std::collections::HashMap;

use super::types::{Direction, MappingDefinition};

/// Read access to persisted mapping definitions
///
/// Multi-load methods return one slot per stored key, in store order. A slot
/// is `None` when the key no longer resolves to a definition.
pub trait MappingStore {
    /// Load a single mapping by exact name
    fn load(&self, name: &str) -> Option<&MappingDefinition>;

    /// Load every mapping
    fn load_multiple(&self) -> Vec<Option<&MappingDefinition>>;

    /// Load mappings configured for push
    fn load_push_mappings(&self) -> Vec<Option<&MappingDefinition>> {
        self.load_multiple()
            .into_iter()
            .filter(|slot| slot.is_none_or(MappingDefinition::does_push))
            .collect()
    }

    /// Load mappings configured for pull
    fn load_pull_mappings(&self) -> Vec<Option<&MappingDefinition>> {
        self.load_multiple()
            .into_iter()
            .filter(|slot| slot.is_none_or(MappingDefinition::does_pull))
            .collect()
    }

    /// Load mappings matching a direction constraint
    fn load_for_direction(&self, direction: Direction) -> Vec<Option<&MappingDefinition>> {
        match direction {
            Direction::None => self.load_multiple(),
            Direction::Push => self.load_push_mappings(),
            Direction::Pull => self.load_pull_mappings(),
        }
    }
}

/// Insertion-ordered in-memory mapping store
#[derive(Debug, Clone, Default)]
pub struct MemoryMappingStore {
    order: Vec<String>,
    by_name: HashMap<String, MappingDefinition>,
}

impl MemoryMappingStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from definitions in order
    ///
    /// A later definition with an already-seen name replaces the earlier one.
    #[must_use]
    pub fn from_definitions(definitions: impl IntoIterator<Item = MappingDefinition>) -> Self {
        let mut store = Self::new();
        for definition in definitions {
            store.insert(definition);
        }
        store
    }

    /// Insert a definition
    ///
    /// An existing definition with the same name is replaced in place and
    /// returned; otherwise the definition is appended.
    pub fn insert(&mut self, definition: MappingDefinition) -> Option<MappingDefinition> {
        let name = definition.name.clone();
        let previous = self.by_name.insert(name.clone(), definition);
        if previous.is_none() {
            self.order.push(name);
        }
        previous
    }

    /// Number of stored mappings
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the store holds no mappings
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Mapping names in store order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Distinct remote object types referenced by mappings, in store order
    #[must_use]
    pub fn remote_objects(&self) -> Vec<&str> {
        let mut objects: Vec<&str> = Vec::new();
        for mapping in self.load_multiple().into_iter().flatten() {
            if let Some(object) = mapping.remote_object.as_deref()
                && !objects.contains(&object)
            {
                objects.push(object);
            }
        }
        objects
    }
}

impl MappingStore for MemoryMappingStore {
    fn load(&self, name: &str) -> Option<&MappingDefinition> {
        self.by_name.get(name)
    }

    fn load_multiple(&self) -> Vec<Option<&MappingDefinition>> {
        self.order.iter().map(|name| self.by_name.get(name)).collect()
    }
}
