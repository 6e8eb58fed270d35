//! Field-edit staging for encounter instances.
//!
//! Edits are staged locally while a field is being typed into and reach
//! the encounter store only on a commit point: the confirm key, the
//! editing surface losing focus, or the edit session ending outright.
//! One store update per editing burst instead of one per keystroke, and
//! no edit is silently dropped when editing ends — [`close`] commits
//! whatever is still staged.
//!
//! [`close`]: EditSession::close

use super::encounter::{EncounterState, InstancePatch};
use crate::model::InstanceId;
use std::mem;

/// The editable fields on an encounter card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    /// The instance's display name.
    Name,
    /// Rolled initiative.
    Initiative,
    /// Current hit points.
    CurrentHp,
}

/// An open editing session against one encounter instance.
///
/// Holds staged field values invisible to the rest of the session until a
/// commit point, plus the name field's "currently being renamed" flag.
/// Every commit clears the rename flag; the staged patch is consumed by
/// the commit that flushes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    instance: InstanceId,
    pending: InstancePatch,
    renaming: bool,
}

impl EditSession {
    /// Open an edit session for an instance.
    pub fn begin(instance: InstanceId) -> Self {
        Self {
            instance,
            pending: InstancePatch::new(),
            renaming: false,
        }
    }

    /// The instance this session edits.
    pub fn instance(&self) -> InstanceId {
        self.instance
    }

    /// The staged, uncommitted patch.
    pub fn pending(&self) -> &InstancePatch {
        &self.pending
    }

    /// Whether the name field is currently being renamed.
    pub fn is_renaming(&self) -> bool {
        self.renaming
    }

    /// Enter name-editing mode (an explicit click on the name).
    pub fn begin_rename(&mut self) {
        self.renaming = true;
    }

    /// Stage a field value locally. Not yet visible to the store.
    pub fn stage(&mut self, field: EditField, value: impl Into<String>) {
        let value = value.into();
        match field {
            EditField::Name => self.pending.name = Some(value),
            EditField::Initiative => self.pending.initiative = Some(value),
            EditField::CurrentHp => self.pending.current_hp = Some(value),
        }
    }

    /// Commit on the confirm key: flush staged edits, leave rename mode.
    /// The session stays open for further edits.
    pub fn confirm(&mut self, store: &mut EncounterState) {
        self.commit(store);
    }

    /// Commit on focus loss to anything other than the editing surface.
    /// Same effect as [`confirm`](Self::confirm).
    pub fn blur(&mut self, store: &mut EncounterState) {
        self.commit(store);
    }

    /// End the editing lifetime, committing anything still staged.
    ///
    /// Consumes the session: once the owning card unmounts or the
    /// instance leaves the view, nothing further can be staged.
    pub fn close(mut self, store: &mut EncounterState) {
        self.commit(store);
    }

    fn commit(&mut self, store: &mut EncounterState) {
        self.renaming = false;
        let patch = mem::take(&mut self.pending);
        if !patch.is_empty() {
            store.update_instance(self.instance, patch);
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "edit_session_tests.rs"]
mod tests;
