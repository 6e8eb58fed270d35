//! Error taxonomy.
//!
//! Structured errors via `thiserror`, composing with `?` through `From`
//! conversions. The core has no fallible I/O of its own: compendium
//! loading can fail on bad input, and the encounter store fails fast on a
//! caller passing an unknown base entry. Everything else degrades to
//! silent no-ops by design (removing or updating an absent instance,
//! sorting on a column some rows lack).

use thiserror::Error;

/// Top-level error for embedders, wrapping every failure mode the crate
/// can produce. Domain errors convert in via `From`, so application code
/// can hold a single error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Compendium data could not be loaded.
    #[error("failed to load compendium: {0}")]
    Compendium(#[from] CompendiumError),

    /// An encounter operation violated its caller contract.
    #[error("encounter operation failed: {0}")]
    Encounter(#[from] EncounterError),

    /// Configuration file was present but unusable.
    #[error("failed to load configuration: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Logging could not be initialized.
    #[error("failed to initialize logging: {0}")]
    Logging(#[from] crate::logging::LoggingError),
}

/// Failure loading compendium data.
///
/// Fatal for the loader: without a compendium there is nothing to browse.
/// Distinguishes transport failure from malformed content so callers can
/// report the right thing.
#[derive(Debug, Error)]
pub enum CompendiumError {
    /// The source was not valid compendium JSON.
    #[error("invalid compendium JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Reading the source failed.
    #[error("failed to read compendium source: {0}")]
    Io(#[from] std::io::Error),
}

/// Caller-contract violations in the encounter store.
///
/// Note the asymmetry with absent instance ids: removing or updating an
/// instance that is already gone is a silent no-op (the UI may race a
/// removal against teardown), but adding from a base entry that does not
/// exist indicates a programming error in the caller and is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncounterError {
    /// `add_instance` was called with a name not present in the compendium.
    #[error("no compendium entry named {name:?}")]
    UnknownEntry {
        /// The name that failed to resolve.
        name: String,
    },
}

// ===== Tests =====
