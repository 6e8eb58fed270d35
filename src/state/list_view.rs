//! List view state: filter text and tri-state column sort.
//!
//! The sort control cycles three ways rather than toggling two: repeated
//! clicks on one column go ascending, then descending, then back to the
//! natural (unsorted) order. The cycle is modeled as a pure transition
//! function over `Option<SortOrder>` so the table can be unit-tested
//! without any rendering layer.

/// Direction of an active column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest key first.
    Ascending,
    /// Largest key first.
    Descending,
}

/// An active sort: which column, which direction.
///
/// Absence of a `SortOrder` (the `None` state) means natural order — the
/// source collection's own iteration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    /// Column the sort is keyed on.
    pub column: String,
    /// Current direction.
    pub direction: SortDirection,
}

impl SortOrder {
    /// Ascending sort on a column.
    pub fn ascending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Descending sort on a column.
    pub fn descending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// Next sort state after a click on a column header.
///
/// The cycle, per column:
/// - natural → ascending
/// - ascending → descending
/// - descending → natural (sort cleared entirely)
///
/// Clicking a different column while any sort is active abandons the old
/// cycle and restarts at ascending on the new column.
pub fn next_sort(current: Option<&SortOrder>, clicked: &str) -> Option<SortOrder> {
    match current {
        Some(order) if order.column == clicked => match order.direction {
            SortDirection::Ascending => Some(SortOrder::descending(clicked)),
            SortDirection::Descending => None,
        },
        _ => Some(SortOrder::ascending(clicked)),
    }
}

/// Filter and sort state for one table.
///
/// Derived, not persisted: the ordered view is recomputed from the source
/// collection plus this state on every read. Mutation goes through
/// [`set_query`](Self::set_query) and [`sort_by`](Self::sort_by) so the
/// owning table state can hook cache invalidation onto both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListViewState {
    query: String,
    sort: Option<SortOrder>,
}

impl ListViewState {
    /// Fresh state: empty filter, natural order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current filter text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current sort, `None` for natural order.
    pub fn sort(&self) -> Option<&SortOrder> {
        self.sort.as_ref()
    }

    /// Replace the filter text.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Advance the sort cycle for a clicked column header.
    pub fn sort_by(&mut self, column: &str) {
        self.sort = next_sort(self.sort.as_ref(), column);
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "list_view_tests.rs"]
mod tests;
