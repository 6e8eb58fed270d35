//! Row measurement cache for the virtualized table.
//!
//! Rendering a cell is the expensive step, so measured heights are
//! memoized per `(row, column)` position. A cached height is only valid
//! while the row index still refers to the same logical entry; any filter
//! or sort change can move entries between indices, so the owning table
//! state clears this cache wholesale before either change becomes
//! observable. No partial invalidation is attempted.

use serde::Deserialize;
use std::collections::HashMap;

/// Default minimum row height in pixels.
const DEFAULT_MIN_HEIGHT: u16 = 25;

/// Configuration for the measurement cache.
///
/// Loaded from the config file's `[measure]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MeasureConfig {
    /// Smallest height any row may measure to (default: 25).
    pub min_height: u16,
}

impl Default for MeasureConfig {
    fn default() -> Self {
        Self {
            min_height: DEFAULT_MIN_HEIGHT,
        }
    }
}

/// Memoized cell heights keyed by `(row, column)` in the current view.
///
/// `measure_with` is idempotent: the measurer runs at most once per
/// position until [`clear_all`](Self::clear_all) discards everything.
#[derive(Debug, Clone)]
pub struct MeasureCache {
    heights: HashMap<(usize, usize), u16>,
    min_height: u16,
}

impl MeasureCache {
    /// Create a cache with the given minimum height.
    pub fn new(min_height: u16) -> Self {
        Self {
            heights: HashMap::new(),
            min_height,
        }
    }

    /// Create from config.
    pub fn from_config(config: &MeasureConfig) -> Self {
        Self::new(config.min_height)
    }

    /// The configured minimum height.
    pub fn min_height(&self) -> u16 {
        self.min_height
    }

    /// Height of the cell, measuring it on first request.
    ///
    /// Returns the cached value when present; otherwise invokes the
    /// measurer once, clamps its result to the minimum height, stores it,
    /// and returns it.
    pub fn measure_with(
        &mut self,
        row: usize,
        column: usize,
        measurer: impl FnOnce() -> u16,
    ) -> u16 {
        let min = self.min_height;
        *self
            .heights
            .entry((row, column))
            .or_insert_with(|| measurer().max(min))
    }

    /// Cached height of the cell, if it has been measured.
    pub fn get(&self, row: usize, column: usize) -> Option<u16> {
        self.heights.get(&(row, column)).copied()
    }

    /// Whether the cell has a cached measurement.
    pub fn has(&self, row: usize, column: usize) -> bool {
        self.heights.contains_key(&(row, column))
    }

    /// Height of a whole row: the tallest measured cell in it, or the
    /// minimum height while the row is unmeasured.
    pub fn row_height(&self, row: usize) -> u16 {
        self.heights
            .iter()
            .filter(|((r, _), _)| *r == row)
            .map(|(_, height)| *height)
            .max()
            .unwrap_or(self.min_height)
    }

    /// Discard every cached measurement.
    pub fn clear_all(&mut self) {
        self.heights.clear();
    }

    /// Number of cached cell measurements.
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    /// Whether nothing has been measured since the last clear.
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }
}

impl Default for MeasureCache {
    fn default() -> Self {
        Self::from_config(&MeasureConfig::default())
    }
}

// ===== Tests =====
