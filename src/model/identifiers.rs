//! Identifier newtypes with smart constructors.
//!
//! Compendium entries are keyed by name; encounter instances by a numeric
//! id allocated by the session store. Raw constructors are never exported.

use std::fmt;

/// Name keying a compendium entry (e.g. `"Goblin"`).
///
/// Entry names are the stable identifiers of the compendium: filtering
/// matches against them and encounter instances reference their base entry
/// through one. The smart constructor rejects empty and whitespace-only
/// names; beyond that any text is accepted, since names come straight from
/// the source data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryName(String);

impl EntryName {
    /// Smart constructor: validates the name is not empty or whitespace-only.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidEntryName> {
        let s = raw.into();
        if s.trim().is_empty() {
            Err(InvalidEntryName::Empty)
        } else {
            Ok(Self(s))
        }
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of an encounter instance, unique within a session.
///
/// Allocated only by the encounter store from a monotonically increasing
/// counter: never reused while the session lives, never mutated after
/// creation. Two instances of the same base entry always carry distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(u64);

impl InstanceId {
    /// Construct from a raw counter value. Crate-internal: only the
    /// encounter store allocates ids.
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw numeric value, for display and logging.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ===== Error Types =====

/// Error from the [`EntryName`] smart constructor.
#[derive(Debug, Clone, thiserror::Error)]
pub enum InvalidEntryName {
    /// The name was empty or contained only whitespace.
    #[error("entry name cannot be empty")]
    Empty,
}

// ===== Tests =====
