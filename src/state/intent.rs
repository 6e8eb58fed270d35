//! Intent dispatch: the single routing point for user intents.
//!
//! Views never mutate state directly; they describe what the user did as
//! an [`Intent`] and hand it to [`handle_intent`]. Each intent runs
//! synchronously to completion before the next is processed, so ordering
//! guarantees (cache invalidation before the next view read, edit flush
//! before removal) hold structurally.

use super::app_state::{AppState, CompendiumTab};
use super::edit_session::{EditField, EditSession};
use super::encounter::InstancePatch;
use crate::model::{EncounterError, InstanceId};

/// A user intent, as dispatched by a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Switch to a tab. Ends any open edit session (the cards unmount).
    SelectTab(CompendiumTab),
    /// Replace a table's filter text.
    SetFilterText {
        /// The tab whose table is filtered.
        tab: CompendiumTab,
        /// The new filter text.
        text: String,
    },
    /// Click a table's column header, advancing its sort cycle.
    SortBy {
        /// The tab whose table is sorted.
        tab: CompendiumTab,
        /// The clicked column.
        column: String,
    },
    /// Add an encounter instance derived from the named monster.
    AddInstance {
        /// Compendium key of the base entry.
        entry: String,
    },
    /// Remove an encounter instance. Flushes a matching open edit
    /// session first, then removes; absent ids are a no-op.
    RemoveInstance {
        /// Id of the instance to remove.
        id: InstanceId,
    },
    /// Merge field values directly into an instance's overrides.
    UpdateInstance {
        /// Id of the instance to update.
        id: InstanceId,
        /// The fields to merge.
        patch: InstancePatch,
    },
    /// Click an instance's name, entering rename mode.
    BeginRename {
        /// Id of the instance being renamed.
        id: InstanceId,
    },
    /// Type into one of an instance's editable fields.
    StageEdit {
        /// Id of the instance being edited.
        id: InstanceId,
        /// Which field received input.
        field: EditField,
        /// The field's current text.
        value: String,
    },
    /// Press the confirm key while editing.
    ConfirmEdit,
    /// The editing surface lost focus to something other than itself.
    BlurEdit,
}

/// Route one intent into the state.
///
/// # Errors
///
/// Only [`Intent::AddInstance`] can fail, and only on a caller contract
/// violation ([`EncounterError::UnknownEntry`]). Everything else degrades
/// to a no-op by design.
pub fn handle_intent(state: &mut AppState, intent: Intent) -> Result<(), EncounterError> {
    match intent {
        Intent::SelectTab(tab) => {
            // Leaving the encounter tab unmounts the cards, ending any
            // edit session's lifetime: staged edits must be flushed, not
            // dropped.
            if tab != CompendiumTab::Encounter {
                if let Some(edit) = state.edit.take() {
                    edit.close(&mut state.encounter);
                }
            }
            state.tab = tab;
        }
        Intent::SetFilterText { tab, text } => {
            if let Some(table) = state.table_mut(tab) {
                table.set_filter_text(text);
            }
        }
        Intent::SortBy { tab, column } => {
            if let Some(table) = state.table_mut(tab) {
                table.sort_by(&column);
            }
        }
        Intent::AddInstance { entry } => {
            state.add_to_encounter(&entry)?;
        }
        Intent::RemoveInstance { id } => {
            // Commit-before-remove, made explicit: a staged edit in the
            // same tick as the removal is flushed into the store first.
            if let Some(edit) = state.edit.take_if(|edit| edit.instance() == id) {
                edit.close(&mut state.encounter);
            }
            state.encounter.remove_instance(id);
        }
        Intent::UpdateInstance { id, patch } => {
            state.encounter.update_instance(id, patch);
        }
        Intent::BeginRename { id } => {
            ensure_edit_session(state, id);
            if let Some(edit) = state.edit.as_mut() {
                edit.begin_rename();
            }
        }
        Intent::StageEdit { id, field, value } => {
            ensure_edit_session(state, id);
            if let Some(edit) = state.edit.as_mut() {
                edit.stage(field, value);
            }
        }
        Intent::ConfirmEdit => {
            if let Some(edit) = state.edit.as_mut() {
                edit.confirm(&mut state.encounter);
            }
        }
        Intent::BlurEdit => {
            if let Some(edit) = state.edit.as_mut() {
                edit.blur(&mut state.encounter);
            }
        }
    }
    Ok(())
}

/// Make sure the open edit session targets `id`, closing (and thereby
/// committing) a session on a different instance first. Ignored for ids
/// not in the encounter — the card may already be unmounting.
fn ensure_edit_session(state: &mut AppState, id: InstanceId) {
    if let Some(edit) = state.edit.take_if(|edit| edit.instance() != id) {
        edit.close(&mut state.encounter);
    }
    if state.edit.is_none() && state.encounter.contains(id) {
        state.edit = Some(EditSession::begin(id));
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "intent_tests.rs"]
mod tests;
