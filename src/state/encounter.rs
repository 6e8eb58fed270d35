//! The encounter session store.
//!
//! A single mutable collection of encounter instances, each a lightweight
//! overlay on an immutable compendium entry: the instance holds the base
//! entry's key plus a sparse override map, never a deep mutable clone.
//! Mutation happens through exactly three operations — add, remove,
//! update — and each emits a `tracing` event, keeping every state
//! transition auditable and centrally located. The instance collection is
//! private; there is no other `&mut` path to it.

use crate::model::{Compendium, EncounterError, EntryName, InstanceId, Monster};
use std::borrow::Cow;

/// Sparse per-instance field edits.
///
/// Fields left `None` are untouched by a merge; set fields win over any
/// previously stored value (last-write-wins per field). The three fields
/// are the ones editable on an encounter card: the display name, the
/// rolled initiative, and current hit points. Values are kept as entered
/// text, since they round-trip through input fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstancePatch {
    /// Edited display name, when set.
    pub name: Option<String>,
    /// Rolled initiative, when set.
    pub initiative: Option<String>,
    /// Current hit points, when set.
    pub current_hp: Option<String>,
}

impl InstancePatch {
    /// An empty patch: merging it changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the display name.
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    /// Builder: set the initiative.
    pub fn initiative(mut self, value: impl Into<String>) -> Self {
        self.initiative = Some(value.into());
        self
    }

    /// Builder: set current hit points.
    pub fn current_hp(mut self, value: impl Into<String>) -> Self {
        self.current_hp = Some(value.into());
        self
    }

    /// Merge `other` into `self`, field by field, last write winning.
    pub fn merge(&mut self, other: InstancePatch) {
        if let Some(name) = other.name {
            self.name = Some(name);
        }
        if let Some(initiative) = other.initiative {
            self.initiative = Some(initiative);
        }
        if let Some(current_hp) = other.current_hp {
            self.current_hp = Some(current_hp);
        }
    }

    /// Whether every field is unset.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.initiative.is_none() && self.current_hp.is_none()
    }
}

/// One live combatant in the encounter: a base entry key plus overrides.
///
/// Multiple instances may share a base entry and evolve independently;
/// nothing here is ever written back into the compendium. The id is
/// assigned at creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncounterInstance {
    id: InstanceId,
    base: EntryName,
    overrides: InstancePatch,
}

impl EncounterInstance {
    /// The instance's session-unique id.
    pub fn id(&self) -> InstanceId {
        self.id
    }

    /// Key of the compendium entry this instance derives from.
    pub fn base(&self) -> &EntryName {
        &self.base
    }

    /// The raw override set.
    pub fn overrides(&self) -> &InstancePatch {
        &self.overrides
    }

    /// The base monster record, resolved against the compendium.
    ///
    /// `None` only if the compendium handed in differs from the one the
    /// instance was created against.
    pub fn base_entry<'c>(&self, compendium: &'c Compendium) -> Option<&'c Monster> {
        compendium.monster(self.base.as_str())
    }

    /// Effective display name: the override when present, else the base
    /// entry's key.
    pub fn display_name(&self) -> &str {
        self.overrides.name.as_deref().unwrap_or(self.base.as_str())
    }

    /// Effective initiative. Initiative has no base value; unset means
    /// not yet rolled.
    pub fn initiative(&self) -> Option<&str> {
        self.overrides.initiative.as_deref()
    }

    /// Effective current hit points: the override when present, else the
    /// base entry's hit point total.
    pub fn current_hp<'a>(&'a self, base: &'a Monster) -> Cow<'a, str> {
        match self.overrides.current_hp.as_deref() {
            Some(hp) => Cow::Borrowed(hp),
            None => base.hp.leading(),
        }
    }
}

/// The encounter session: instances plus the id allocator.
///
/// Process-wide shared state in the application; all mutation funnels
/// through [`add_instance`](Self::add_instance),
/// [`remove_instance`](Self::remove_instance), and
/// [`update_instance`](Self::update_instance).
#[derive(Debug, Clone, Default)]
pub struct EncounterState {
    instances: Vec<EncounterInstance>,
    next_id: u64,
}

impl EncounterState {
    /// An empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an instance derived from the named compendium monster.
    ///
    /// Allocates a fresh id — never previously used in this session —
    /// and appends an instance with empty overrides. The base entry is
    /// copied by key, not by value; the compendium is not touched.
    ///
    /// # Errors
    ///
    /// A name with no compendium entry is a caller contract violation and
    /// fails fast with [`EncounterError::UnknownEntry`].
    pub fn add_instance(
        &mut self,
        compendium: &Compendium,
        name: &str,
    ) -> Result<InstanceId, EncounterError> {
        let base = EntryName::new(name).map_err(|_| EncounterError::UnknownEntry {
            name: name.to_string(),
        })?;
        if compendium.monster(base.as_str()).is_none() {
            return Err(EncounterError::UnknownEntry {
                name: name.to_string(),
            });
        }

        self.next_id += 1;
        let id = InstanceId::from_raw(self.next_id);
        self.instances.push(EncounterInstance {
            id,
            base,
            overrides: InstancePatch::new(),
        });
        tracing::debug!(%id, entry = name, "instance added to encounter");
        Ok(id)
    }

    /// Remove the instance with the given id.
    ///
    /// Silently does nothing when the id is absent: the UI may race a
    /// removal against its own teardown.
    pub fn remove_instance(&mut self, id: InstanceId) {
        let before = self.instances.len();
        self.instances.retain(|instance| instance.id != id);
        if self.instances.len() < before {
            tracing::debug!(%id, "instance removed from encounter");
        } else {
            tracing::trace!(%id, "remove ignored; instance already absent");
        }
    }

    /// Merge field edits into an instance's overrides.
    ///
    /// Partial updates: fields unset in `patch` are untouched; set fields
    /// overwrite. Silently does nothing when the id is absent.
    pub fn update_instance(&mut self, id: InstanceId, patch: InstancePatch) {
        match self.instances.iter_mut().find(|instance| instance.id == id) {
            Some(instance) => {
                tracing::debug!(%id, ?patch, "instance updated");
                instance.overrides.merge(patch);
            }
            None => {
                tracing::trace!(%id, "update ignored; instance absent");
            }
        }
    }

    /// The instance with the given id, if present.
    pub fn instance(&self, id: InstanceId) -> Option<&EncounterInstance> {
        self.instances.iter().find(|instance| instance.id == id)
    }

    /// Whether an instance with the given id is present.
    pub fn contains(&self, id: InstanceId) -> bool {
        self.instance(id).is_some()
    }

    /// Instances in insertion order.
    pub fn instances(&self) -> &[EncounterInstance] {
        &self.instances
    }

    /// Number of live instances.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether the session has no instances.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "encounter_tests.rs"]
mod tests;
