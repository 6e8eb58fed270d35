//! Application state root.
//!
//! `AppState` owns the compendium, one table view state per browsable
//! tab, the encounter session, and the (at most one) open edit session.
//! All state transitions are synchronous and run to completion inside a
//! single intent dispatch; there is no deferred work.

use super::edit_session::EditSession;
use super::encounter::EncounterState;
use crate::model::{Compendium, EncounterError, InstanceId};
use crate::view_state::{MeasureConfig, TableViewState};

/// Which tab is selected. Sum type — exactly one.
///
/// The three compendium tabs each carry a filterable, sortable table; the
/// encounter tab shows the live instance cards and has no table state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompendiumTab {
    /// The monster table.
    Monsters,
    /// The race table.
    Races,
    /// The spell table.
    Spells,
    /// The active encounter.
    Encounter,
}

/// Root application state.
///
/// The compendium is private and reachable only by shared reference:
/// nothing above the loader can mutate it. The encounter collection is
/// likewise only reachable through [`EncounterState`]'s three named
/// operations.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The loaded reference data. Read-only after construction.
    compendium: Compendium,

    /// Currently selected tab.
    pub tab: CompendiumTab,

    /// Filter/sort/measurement state for the monster table.
    pub monsters: TableViewState,

    /// Filter/sort/measurement state for the race table.
    pub races: TableViewState,

    /// Filter/sort/measurement state for the spell table.
    pub spells: TableViewState,

    /// The live encounter session.
    pub encounter: EncounterState,

    /// The open edit session, when an instance card is being edited.
    /// At most one field-editing surface has focus at a time.
    pub edit: Option<EditSession>,
}

impl AppState {
    /// Create state around a loaded compendium, using default
    /// measurement config for every table.
    pub fn new(compendium: Compendium) -> Self {
        Self::with_config(compendium, &MeasureConfig::default())
    }

    /// Create state with an explicit measurement config.
    pub fn with_config(compendium: Compendium, measure: &MeasureConfig) -> Self {
        Self {
            compendium,
            tab: CompendiumTab::Monsters,
            monsters: TableViewState::from_config(measure),
            races: TableViewState::from_config(measure),
            spells: TableViewState::from_config(measure),
            encounter: EncounterState::new(),
            edit: None,
        }
    }

    /// Shared reference to the compendium.
    pub fn compendium(&self) -> &Compendium {
        &self.compendium
    }

    /// Table state for a tab; `None` for the encounter tab.
    pub fn table(&self, tab: CompendiumTab) -> Option<&TableViewState> {
        match tab {
            CompendiumTab::Monsters => Some(&self.monsters),
            CompendiumTab::Races => Some(&self.races),
            CompendiumTab::Spells => Some(&self.spells),
            CompendiumTab::Encounter => None,
        }
    }

    /// Mutable table state for a tab; `None` for the encounter tab.
    pub fn table_mut(&mut self, tab: CompendiumTab) -> Option<&mut TableViewState> {
        match tab {
            CompendiumTab::Monsters => Some(&mut self.monsters),
            CompendiumTab::Races => Some(&mut self.races),
            CompendiumTab::Spells => Some(&mut self.spells),
            CompendiumTab::Encounter => None,
        }
    }

    /// Add an encounter instance derived from the named monster.
    ///
    /// Thin wrapper splitting the compendium/encounter borrow so callers
    /// outside this module can stay on the accessor API.
    ///
    /// # Errors
    ///
    /// Fails fast with [`EncounterError::UnknownEntry`] for a name not in
    /// the compendium.
    pub fn add_to_encounter(&mut self, name: &str) -> Result<InstanceId, EncounterError> {
        self.encounter.add_instance(&self.compendium, name)
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
