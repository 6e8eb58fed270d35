//! View-state layer: querying, measurement, and scroll math.
//!
//! Everything here is derived state, recomputed from the compendium plus
//! the list state on demand. Nothing in this layer renders; a shell feeds
//! it measurements and reads back ordered views and offsets.
//!
//! # Module structure
//!
//! - `query`: the pure filter/sort engine and the [`query::TableRow`] trait
//! - `measure`: `(row, column)` height memoization with bulk invalidation
//! - `offsets`: Fenwick-tree prefix sums for O(log n) scroll lookups
//! - `table`: per-table owner tying the three together

pub mod measure;
pub mod offsets;
pub mod query;
pub mod table;

pub use measure::{MeasureCache, MeasureConfig};
pub use offsets::RowOffsets;
pub use query::{query, TableRow};
pub use table::TableViewState;
