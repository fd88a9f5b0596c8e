//! # crmsync-core
//!
//! Core library for CRM mapping selection and synchronization dispatch.
//!
//! This library resolves which mapping definitions (local entity type to
//! remote CRM object type) a push or pull run applies to, collects missing
//! selections interactively through a pluggable prompter, and renders the
//! resulting dispatch plan.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Core error types for the crmsync library
pub mod error {
    /// Result type alias using `anyhow::Error`
    pub type Result<T> = anyhow::Result<T>;
}

/// Mapping definitions, directions, selectors and the mapping store
pub mod mapping;

/// Selector and direction resolution against a mapping store
pub mod resolver;

/// Interactive selection of mappings and remote objects
pub mod selection;

/// Mapping file discovery, loading and validation
pub mod config;

/// Log events carrying an exception, level, message and context
pub mod event;

/// Output rendering for mapping lists and dispatch reports
pub mod output;

/// Dispatch planning for resolved mappings
pub mod dispatch;
