//! State layer (pure).
//!
//! All state transitions are synchronous functions testable without any
//! rendering layer. Mutation of the encounter collection is funneled
//! through the three named store operations; everything else is derived.

pub mod app_state;
pub mod edit_session;
pub mod encounter;
pub mod intent;
pub mod list_view;

pub use app_state::{AppState, CompendiumTab};
pub use edit_session::{EditField, EditSession};
pub use encounter::{EncounterInstance, EncounterState, InstancePatch};
pub use intent::{handle_intent, Intent};
pub use list_view::{next_sort, ListViewState, SortDirection, SortOrder};
