//! Unit tests for the query engine.

use super::*;
use crate::state::list_view::SortOrder;

/// Minimal row type exercising the engine without the full record types.
struct Item {
    name: &'static str,
    group: Option<&'static str>,
}

impl Item {
    fn new(name: &'static str, group: Option<&'static str>) -> Self {
        Self { name, group }
    }
}

impl TableRow for Item {
    fn display_name(&self) -> &str {
        self.name
    }

    fn column_text(&self, column: &str) -> Option<Cow<'_, str>> {
        match column {
            "name" => Some(Cow::Borrowed(self.name)),
            "group" => self.group.map(Cow::Borrowed),
            _ => None,
        }
    }
}

fn names<'a>(view: &[&'a Item]) -> Vec<&'a str> {
    view.iter().map(|item| item.name).collect()
}

// ===== Filtering =====

#[test]
fn empty_filter_includes_every_row() {
    let items = vec![Item::new("Goblin", None), Item::new("Owlbear", None)];
    let view = query(&items, "", None);
    assert_eq!(view.len(), 2);
}

#[test]
fn filter_is_case_insensitive_substring() {
    let items = vec![
        Item::new("Goblin", None),
        Item::new("Owlbear", None),
        Item::new("Ghoul", None),
    ];
    let view = query(&items, "G", None);
    assert_eq!(names(&view), vec!["Ghoul", "Goblin"]);

    let view = query(&items, "OWL", None);
    assert_eq!(names(&view), vec!["Owlbear"]);
}

#[test]
fn filter_matches_interior_substring() {
    let items = vec![Item::new("Hobgoblin", None), Item::new("Ogre", None)];
    let view = query(&items, "goblin", None);
    assert_eq!(names(&view), vec!["Hobgoblin"]);
}

#[test]
fn no_matches_yields_empty_view() {
    let items = vec![Item::new("Goblin", None)];
    let view = query(&items, "dragon", None);
    assert!(view.is_empty());
}

// ===== Default ordering =====

#[test]
fn no_sort_defaults_to_ascending_display_name() {
    let items = vec![
        Item::new("Owlbear", None),
        Item::new("Ghoul", None),
        Item::new("Goblin", None),
    ];
    let view = query(&items, "", None);
    assert_eq!(names(&view), vec!["Ghoul", "Goblin", "Owlbear"]);
}

// ===== Explicit sorting =====

#[test]
fn ascending_and_descending_reverse_each_other() {
    let items = vec![
        Item::new("Goblin", Some("b")),
        Item::new("Owlbear", Some("c")),
        Item::new("Ghoul", Some("a")),
    ];
    let asc = query(&items, "", Some(&SortOrder::ascending("group")));
    assert_eq!(names(&asc), vec!["Ghoul", "Goblin", "Owlbear"]);
    let desc = query(&items, "", Some(&SortOrder::descending("group")));
    assert_eq!(names(&desc), vec!["Owlbear", "Goblin", "Ghoul"]);
}

#[test]
fn sort_compares_case_insensitively() {
    let items = vec![Item::new("b-item", Some("B")), Item::new("a-item", Some("a"))];
    let view = query(&items, "", Some(&SortOrder::ascending("group")));
    assert_eq!(names(&view), vec!["a-item", "b-item"]);
}

#[test]
fn equal_keys_keep_natural_relative_order() {
    let items = vec![
        Item::new("third", Some("same")),
        Item::new("first", Some("same")),
        Item::new("second", Some("same")),
    ];
    let view = query(&items, "", Some(&SortOrder::ascending("group")));
    assert_eq!(
        names(&view),
        vec!["third", "first", "second"],
        "stable sort must preserve the pre-sort sequence for ties"
    );
}

#[test]
fn rows_missing_the_column_sort_after_present_rows() {
    let items = vec![
        Item::new("blank-one", None),
        Item::new("keyed", Some("a")),
        Item::new("blank-two", None),
    ];
    let view = query(&items, "", Some(&SortOrder::ascending("group")));
    assert_eq!(
        names(&view),
        vec!["keyed", "blank-one", "blank-two"],
        "missing values are mutual ties placed after present values"
    );
}

#[test]
fn unknown_column_degrades_to_natural_order() {
    let items = vec![
        Item::new("second", None),
        Item::new("first", None),
    ];
    let view = query(&items, "", Some(&SortOrder::ascending("no-such-column")));
    assert_eq!(names(&view), vec!["second", "first"]);
}

// ===== Record rows =====

#[test]
fn monster_rows_sort_by_challenge_rating_text() {
    let compendium = crate::model::Compendium::from_json_str(
        r#"{
            "monsters": {
                "Owlbear": {
                    "name": "Owlbear", "cr": 3, "ac": 13, "hp": 59, "size": "L",
                    "str": 20, "dex": 12, "con": 17, "int": 3, "wis": 12, "cha": 7
                },
                "Goblin": {
                    "name": "Goblin", "cr": "1/4", "ac": 15, "hp": 7, "size": "S",
                    "str": 8, "dex": 14, "con": 10, "int": 10, "wis": 8, "cha": 8
                }
            }
        }"#,
    )
    .expect("valid compendium");

    let view = query(compendium.monsters(), "", Some(&SortOrder::ascending("cr")));
    let view_names: Vec<&str> = view.iter().map(|m| m.name.as_str()).collect();
    // Text coercion: "1/4" < "3" lexicographically.
    assert_eq!(view_names, vec!["Goblin", "Owlbear"]);
}

#[test]
fn query_does_not_mutate_the_source() {
    let items = vec![Item::new("b", None), Item::new("a", None)];
    let _ = query(&items, "", None);
    assert_eq!(items[0].name, "b", "source order untouched by sorting");
    assert_eq!(items[1].name, "a");
}
