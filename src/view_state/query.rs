//! The list query engine: pure filtering and sorting over table rows.
//!
//! `query` is a pure function of its inputs. It never mutates the source
//! collection; the ordered view it returns borrows the rows. Column values
//! are coerced to text and compared case-insensitively, the way the
//! on-screen table presents them.

use crate::model::{Monster, Race, Spell};
use crate::state::list_view::{SortDirection, SortOrder};
use std::borrow::Cow;
use std::cmp::Ordering;

/// A row presentable in a filterable, sortable table.
///
/// `display_name` doubles as the filter target and the default sort key.
/// `column_text` returns the textual sort key for a named column, or
/// `None` when the row has nothing in that column — such rows compare
/// equal to one another and keep their natural relative order.
pub trait TableRow {
    /// The row's display name; what the filter matches against.
    fn display_name(&self) -> &str;

    /// Textual value of the named column, when the row has one.
    fn column_text(&self, column: &str) -> Option<Cow<'_, str>>;
}

/// Filter and order a collection of rows.
///
/// Filtering keeps a row iff `filter` is empty or the display name
/// contains it case-insensitively (plain substring, no tokenization).
///
/// Sorting is stable: rows with equal keys keep their relative order from
/// the natural sequence. With no explicit sort, rows order ascending by
/// display name. Rows missing the sort column compare equal to each other
/// and sort after rows that have it; `Descending` reverses the entire
/// comparison.
pub fn query<'a, R: TableRow>(
    rows: impl IntoIterator<Item = &'a R>,
    filter: &str,
    sort: Option<&SortOrder>,
) -> Vec<&'a R> {
    let needle = filter.to_lowercase();
    let filtered = rows
        .into_iter()
        .filter(|row| needle.is_empty() || row.display_name().to_lowercase().contains(&needle));

    let (column, direction) = match sort {
        Some(order) => (order.column.as_str(), order.direction),
        None => ("", SortDirection::Ascending),
    };

    // Sort keys are precomputed so the comparator allocates nothing.
    let mut keyed: Vec<(Option<String>, &R)> = filtered
        .map(|row| {
            let key = if column.is_empty() {
                Some(row.display_name().to_lowercase())
            } else {
                row.column_text(column).map(|text| text.to_lowercase())
            };
            (key, row)
        })
        .collect();

    keyed.sort_by(|(a, _), (b, _)| {
        let ordering = match (a, b) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    keyed.into_iter().map(|(_, row)| row).collect()
}

// ===== Row implementations =====

impl TableRow for Monster {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn column_text(&self, column: &str) -> Option<Cow<'_, str>> {
        match column {
            "name" => Some(Cow::Borrowed(self.name.as_str())),
            "size" => Some(Cow::Borrowed(self.size.as_str())),
            "cr" => Some(Cow::Owned(self.cr.to_string())),
            "ac" => Some(Cow::Owned(self.ac.to_string())),
            "hp" => Some(Cow::Owned(self.hp.to_string())),
            "type" => self.kind.as_deref().map(Cow::Borrowed),
            "alignment" => self.alignment.as_deref().map(Cow::Borrowed),
            _ => None,
        }
    }
}

impl TableRow for Race {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn column_text(&self, column: &str) -> Option<Cow<'_, str>> {
        match column {
            "name" => Some(Cow::Borrowed(self.name.as_str())),
            "size" => self.size.as_deref().map(Cow::Borrowed),
            "speed" => self.speed.as_ref().map(|s| Cow::Owned(s.to_string())),
            "ability" => self.ability.as_deref().map(Cow::Borrowed),
            "proficiency" => self.proficiency.as_deref().map(Cow::Borrowed),
            _ => None,
        }
    }
}

impl TableRow for Spell {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn column_text(&self, column: &str) -> Option<Cow<'_, str>> {
        match column {
            "name" => Some(Cow::Borrowed(self.name.as_str())),
            "level" => Some(Cow::Owned(self.level.to_string())),
            "classes" => self.classes.as_deref().map(Cow::Borrowed),
            "time" => self.time.as_deref().map(Cow::Borrowed),
            "duration" => self.duration.as_deref().map(Cow::Borrowed),
            "range" => self.range.as_deref().map(Cow::Borrowed),
            "components" => self.components.as_deref().map(Cow::Borrowed),
            "school" => self.school.as_deref().map(Cow::Borrowed),
            _ => None,
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
