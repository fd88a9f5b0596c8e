//! Mapping definitions and the store they are loaded from
//!
//! This module holds:
//! - `MappingDefinition`, the named record with push/pull capability flags
//! - `Direction` and `Selector`, the inputs of a resolution
//! - the `MappingStore` trait and its in-memory implementation

mod store;
mod types;

pub use store::{MappingStore, MemoryMappingStore};
pub use types::{Direction, MappingDefinition, Selector};
