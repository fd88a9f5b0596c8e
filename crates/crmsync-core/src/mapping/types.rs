//! Mapping types and structures

use std::fmt;

use serde::{Deserialize, Serialize};

/// Synchronization direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// No directional constraint
    #[default]
    None,
    /// Outbound, local to remote
    Push,
    /// Inbound, remote to local
    Pull,
}

impl Direction {
    /// Lowercase verb used in messages
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "any",
            Self::Push => "push",
            Self::Pull => "pull",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which mapping(s) an operation targets
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// Every mapping in the store
    All,
    /// A single mapping, matched exactly by name
    Name(String),
}

impl Selector {
    /// Sentinel spelling of [`Selector::All`]
    pub const ALL: &'static str = "ALL";

    /// Parse user input. `all` is matched case-insensitively, anything else
    /// is taken verbatim as a mapping name.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        if Self::is_all(input) {
            Self::All
        } else {
            Self::Name(input.to_string())
        }
    }

    /// Whether `input` spells the `ALL` sentinel
    #[must_use]
    pub fn is_all(input: &str) -> bool {
        input.eq_ignore_ascii_case(Self::ALL)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(Self::ALL),
            Self::Name(name) => f.write_str(name),
        }
    }
}

/// A mapping between a local entity type and a remote CRM object type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingDefinition {
    /// Unique machine name
    pub name: String,

    /// Human readable label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Remote object type, e.g. `Contact`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_object: Option<String>,

    /// Local entity type, e.g. `user`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_entity: Option<String>,

    /// Outbound synchronization enabled
    #[serde(default)]
    pub push: bool,

    /// Inbound synchronization enabled
    #[serde(default)]
    pub pull: bool,
}

impl MappingDefinition {
    /// Create a mapping with only a name and direction flags
    #[must_use]
    pub fn new(name: impl Into<String>, push: bool, pull: bool) -> Self {
        Self {
            name: name.into(),
            label: None,
            remote_object: None,
            local_entity: None,
            push,
            pull,
        }
    }

    /// Whether this mapping is configured for outbound sync
    #[must_use]
    pub const fn does_push(&self) -> bool {
        self.push
    }

    /// Whether this mapping is configured for inbound sync
    #[must_use]
    pub const fn does_pull(&self) -> bool {
        self.pull
    }

    /// Whether this mapping satisfies a direction constraint
    #[must_use]
    pub const fn supports(&self, direction: Direction) -> bool {
        match direction {
            Direction::None => true,
            Direction::Push => self.push,
            Direction::Pull => self.pull,
        }
    }

    /// Label, falling back to the name
    #[must_use]
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}
