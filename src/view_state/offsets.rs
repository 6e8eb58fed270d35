//! Row offset index: O(log n) scroll math over measured row heights.
//!
//! A virtualized table needs two lookups on every frame: where a row
//! starts vertically, and which row covers a given scroll offset. Both are
//! prefix-sum queries over the per-row heights, kept in a Fenwick tree so
//! a single row's re-measurement is an O(log n) update instead of a
//! rebuild.

/// Prefix sums over row heights.
///
/// Rows are indexed from zero in view order. Row `i` covers the
/// half-open vertical range `[offset_of(i), offset_of(i) + height_i)`.
#[derive(Debug, Clone)]
pub struct RowOffsets {
    /// Fenwick tree backing storage; exposed API is 0-indexed.
    tree: Vec<isize>,
    /// Number of rows currently tracked (`len <= tree.len()`).
    len: usize,
}

impl RowOffsets {
    /// Create an index with pre-allocated capacity for `capacity` rows.
    pub fn new(capacity: usize) -> Self {
        Self {
            tree: vec![0; capacity],
            len: 0,
        }
    }

    /// Append a row with the given height.
    pub fn push(&mut self, height: u16) {
        if self.len >= self.tree.len() {
            self.tree.resize(self.tree.len().max(1) * 2, 0);
        }
        let row = self.len;
        self.len += 1;
        fenwick::array::update(&mut self.tree, row, height as isize);
    }

    /// Replace the height of an existing row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= len()`.
    pub fn set(&mut self, row: usize, height: u16) {
        assert!(row < self.len, "row {} out of bounds (len: {})", row, self.len);
        let current = self.end_of(row) - self.offset_of(row);
        let delta = height as isize - current as isize;
        if delta != 0 {
            fenwick::array::update(&mut self.tree, row, delta);
        }
    }

    /// Vertical offset at which the row starts.
    ///
    /// # Panics
    ///
    /// Panics if `row >= len()`.
    pub fn offset_of(&self, row: usize) -> usize {
        assert!(row < self.len, "row {} out of bounds (len: {})", row, self.len);
        if row == 0 {
            0
        } else {
            self.end_of(row - 1)
        }
    }

    /// Row covering the given vertical offset, or `None` past the end.
    pub fn row_at(&self, offset: usize) -> Option<usize> {
        if self.is_empty() || offset >= self.total() {
            return None;
        }
        // First row whose inclusive prefix sum exceeds the offset.
        let mut low = 0;
        let mut high = self.len;
        while low < high {
            let mid = low + (high - low) / 2;
            if self.end_of(mid) > offset {
                high = mid;
            } else {
                low = mid + 1;
            }
        }
        Some(low)
    }

    /// Total height of all rows.
    pub fn total(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.end_of(self.len - 1)
        }
    }

    /// Number of rows tracked.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no rows are tracked.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop every row, retaining allocated capacity.
    ///
    /// Zeroes the whole backing tree: updates propagate to parent nodes
    /// past `len`, so a partial wipe would leak stale sums into rows
    /// pushed after the clear.
    pub fn clear(&mut self) {
        for slot in self.tree.iter_mut() {
            *slot = 0;
        }
        self.len = 0;
    }

    /// Inclusive prefix sum: total height of rows `0..=row`.
    fn end_of(&self, row: usize) -> usize {
        fenwick::array::prefix_sum(&self.tree, row).max(0) as usize
    }
}

impl Default for RowOffsets {
    fn default() -> Self {
        Self::new(0)
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_index_has_no_rows() {
        let offsets = RowOffsets::new(8);
        assert_eq!(offsets.len(), 0);
        assert_eq!(offsets.total(), 0);
        assert_eq!(offsets.row_at(0), None);
    }

    #[test]
    fn offsets_accumulate_heights() {
        let mut offsets = RowOffsets::new(8);
        offsets.push(10);
        offsets.push(25);
        offsets.push(40);

        assert_eq!(offsets.offset_of(0), 0);
        assert_eq!(offsets.offset_of(1), 10);
        assert_eq!(offsets.offset_of(2), 35);
        assert_eq!(offsets.total(), 75);
    }

    #[test]
    fn row_at_resolves_interior_and_boundary_offsets() {
        let mut offsets = RowOffsets::new(8);
        offsets.push(10); // [0..10)
        offsets.push(20); // [10..30)
        offsets.push(15); // [30..45)

        assert_eq!(offsets.row_at(0), Some(0));
        assert_eq!(offsets.row_at(9), Some(0));
        assert_eq!(offsets.row_at(10), Some(1));
        assert_eq!(offsets.row_at(29), Some(1));
        assert_eq!(offsets.row_at(30), Some(2));
        assert_eq!(offsets.row_at(44), Some(2));
        assert_eq!(offsets.row_at(45), None, "total offset is past the last row");
    }

    #[test]
    fn set_adjusts_following_offsets() {
        let mut offsets = RowOffsets::new(8);
        offsets.push(10);
        offsets.push(20);
        offsets.push(15);

        offsets.set(1, 50);

        assert_eq!(offsets.offset_of(2), 60);
        assert_eq!(offsets.total(), 75);
    }

    #[test]
    fn push_grows_past_initial_capacity() {
        let mut offsets = RowOffsets::new(1);
        for _ in 0..10 {
            offsets.push(5);
        }
        assert_eq!(offsets.len(), 10);
        assert_eq!(offsets.total(), 50);
    }

    #[test]
    fn clear_then_refill_with_more_rows_stays_consistent() {
        let mut offsets = RowOffsets::new(8);
        offsets.push(10);
        offsets.push(10);
        offsets.push(10);
        offsets.clear();

        for _ in 0..5 {
            offsets.push(20);
        }

        assert_eq!(offsets.total(), 100, "no stale parent sums survive a clear");
        for row in 0..5 {
            assert_eq!(offsets.offset_of(row), row * 20);
        }
    }

    #[test]
    fn clear_resets_and_allows_reuse() {
        let mut offsets = RowOffsets::new(4);
        offsets.push(10);
        offsets.push(10);
        offsets.clear();
        assert!(offsets.is_empty());
        assert_eq!(offsets.total(), 0);

        offsets.push(7);
        assert_eq!(offsets.len(), 1);
        assert_eq!(offsets.total(), 7);
        assert_eq!(offsets.offset_of(0), 0);
    }

    proptest! {
        /// Start offset of each row equals the sum of all preceding heights.
        #[test]
        fn prop_offset_is_sum_of_preceding(heights in prop::collection::vec(1u16..=200, 1..40)) {
            let mut offsets = RowOffsets::new(heights.len());
            for &h in &heights {
                offsets.push(h);
            }
            let mut expected = 0usize;
            for (row, &h) in heights.iter().enumerate() {
                prop_assert_eq!(offsets.offset_of(row), expected);
                expected += h as usize;
            }
            prop_assert_eq!(offsets.total(), expected);
        }

        /// Every offset inside a row's range resolves back to that row.
        #[test]
        fn prop_row_at_inverts_offset_of(heights in prop::collection::vec(1u16..=100, 1..30)) {
            let mut offsets = RowOffsets::new(heights.len());
            for &h in &heights {
                offsets.push(h);
            }
            for row in 0..offsets.len() {
                let start = offsets.offset_of(row);
                prop_assert_eq!(offsets.row_at(start), Some(row));
            }
        }

        /// After `set`, the row's height reads back exactly.
        #[test]
        fn prop_set_updates_single_row(
            heights in prop::collection::vec(1u16..=100, 1..30),
            row in 0usize..30,
            new_height in 1u16..=100,
        ) {
            let mut offsets = RowOffsets::new(heights.len());
            for &h in &heights {
                offsets.push(h);
            }
            if row < offsets.len() {
                offsets.set(row, new_height);
                let measured = if row + 1 < offsets.len() {
                    offsets.offset_of(row + 1) - offsets.offset_of(row)
                } else {
                    offsets.total() - offsets.offset_of(row)
                };
                prop_assert_eq!(measured, new_height as usize);
            }
        }
    }
}
