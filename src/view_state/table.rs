//! Per-table view state: filter/sort state plus measurement bookkeeping.
//!
//! `TableViewState` is the seam between the pure query engine and the
//! virtualized rendering layer. It owns the one invariant that makes row
//! measurement caching safe: the measurement cache and the offset index
//! are cleared *inside* [`set_filter_text`](TableViewState::set_filter_text)
//! and [`sort_by`](TableViewState::sort_by), before the new list state can
//! be observed. Those two entry points are the only operations that can
//! change which entry occupies a given row index, so they are the only
//! invalidation triggers.

use super::measure::{MeasureCache, MeasureConfig};
use super::offsets::RowOffsets;
use super::query::{query, TableRow};
use crate::state::list_view::{ListViewState, SortOrder};

/// View state for one filterable, sortable, virtualized table.
#[derive(Debug, Clone)]
pub struct TableViewState {
    list: ListViewState,
    measures: MeasureCache,
    offsets: RowOffsets,
}

impl TableViewState {
    /// Fresh table state with default measurement config.
    pub fn new() -> Self {
        Self::from_config(&MeasureConfig::default())
    }

    /// Fresh table state with the given measurement config.
    pub fn from_config(config: &MeasureConfig) -> Self {
        Self {
            list: ListViewState::new(),
            measures: MeasureCache::from_config(config),
            offsets: RowOffsets::default(),
        }
    }

    /// Current filter text.
    pub fn filter_text(&self) -> &str {
        self.list.query()
    }

    /// Current sort order, `None` for natural order.
    pub fn sort(&self) -> Option<&SortOrder> {
        self.list.sort()
    }

    /// Replace the filter text.
    ///
    /// Invalidates all cached measurements first: filtering changes which
    /// entry sits at each row index.
    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        self.invalidate();
        let text = text.into();
        tracing::debug!(filter = %text, "filter text changed");
        self.list.set_query(text);
    }

    /// Advance the tri-state sort cycle for a clicked column header.
    ///
    /// Invalidates all cached measurements first: reordering moves entries
    /// between row indices.
    pub fn sort_by(&mut self, column: &str) {
        self.invalidate();
        self.list.sort_by(column);
        tracing::debug!(column, sort = ?self.list.sort(), "sort cycled");
    }

    /// The ordered, filtered view of `rows` under the current state.
    ///
    /// Pure with respect to `rows`; the source is never reordered.
    pub fn view<'a, R: TableRow>(&self, rows: impl IntoIterator<Item = &'a R>) -> Vec<&'a R> {
        query(rows, self.list.query(), self.list.sort())
    }

    /// Size the offset index to the current view's row count.
    ///
    /// Call after recomputing the view. Unmeasured rows are seeded at the
    /// minimum height; rows measured since the last invalidation keep
    /// their measured heights.
    pub fn ensure_rows(&mut self, count: usize) {
        if self.offsets.len() == count {
            return;
        }
        self.offsets.clear();
        for row in 0..count {
            self.offsets.push(self.measures.row_height(row));
        }
    }

    /// Measure one cell, memoized per `(row, column)` position.
    ///
    /// The measurer runs only on the first request since the last
    /// invalidation. The row's entry in the offset index is refreshed so
    /// scroll math sees the new height immediately.
    pub fn measure_cell(
        &mut self,
        row: usize,
        column: usize,
        measurer: impl FnOnce() -> u16,
    ) -> u16 {
        let height = self.measures.measure_with(row, column, measurer);
        if row < self.offsets.len() {
            self.offsets.set(row, self.measures.row_height(row));
        }
        height
    }

    /// Whether a cell has been measured since the last invalidation.
    pub fn is_measured(&self, row: usize, column: usize) -> bool {
        self.measures.has(row, column)
    }

    /// Height of a row: tallest measured cell, or the minimum height.
    pub fn row_height(&self, row: usize) -> u16 {
        self.measures.row_height(row)
    }

    /// Vertical offset at which a tracked row starts.
    ///
    /// # Panics
    ///
    /// Panics if `row` is outside the tracked row count.
    pub fn offset_of_row(&self, row: usize) -> usize {
        self.offsets.offset_of(row)
    }

    /// Row covering a vertical scroll offset, `None` past the end.
    pub fn row_at_offset(&self, offset: usize) -> Option<usize> {
        self.offsets.row_at(offset)
    }

    /// Total height of all tracked rows.
    pub fn total_height(&self) -> usize {
        self.offsets.total()
    }

    /// Number of rows currently tracked by the offset index.
    pub fn tracked_rows(&self) -> usize {
        self.offsets.len()
    }

    /// Clear measurements and offsets. Runs synchronously inside the two
    /// state changes that can reshape the view.
    fn invalidate(&mut self) {
        self.measures.clear_all();
        self.offsets.clear();
    }
}

impl Default for TableViewState {
    fn default() -> Self {
        Self::new()
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
