//! Compendium entry records.
//!
//! The compendium's JSON form descends from an XML conversion, so field
//! shapes are irregular: one-element lists appear as bare objects
//! ([`OneOrMany`]) and numeric fields sometimes arrive as annotated text
//! like `"12 (natural armor)"` ([`Scalar`]). The record types here absorb
//! that irregularity at the deserialization boundary so everything above
//! the model sees uniform accessors.
//!
//! Entries are immutable once loaded. Nothing in this module carries an
//! instance identifier; per-session mutable state lives in the encounter
//! store, layered over these records by reference.

use serde::Deserialize;
use std::borrow::Cow;
use std::fmt;

// ===== Scalar =====

/// A value that the source data encodes either as a number or as text.
///
/// Armor class, hit points, challenge rating, and speed all appear in both
/// shapes (`13`, `"13 (natural armor)"`, `"1/4"`, `"30 ft."`). Tabular
/// display wants just the leading token; card display wants the full text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Plain integer value.
    Int(i64),
    /// Plain floating-point value (fractional challenge ratings).
    Float(f64),
    /// Textual value, possibly annotated (`"135 (18d10+36)"`).
    Text(String),
}

impl Scalar {
    /// The leading token of the value: everything before the first space.
    ///
    /// For numeric variants this is the full rendered number. Used by the
    /// stat row, which shows `"12"` for `"12 (natural armor)"`.
    pub fn leading(&self) -> Cow<'_, str> {
        match self {
            Scalar::Int(n) => Cow::Owned(n.to_string()),
            Scalar::Float(x) => Cow::Owned(x.to_string()),
            Scalar::Text(s) => match s.split_whitespace().next() {
                Some(first) => Cow::Borrowed(first),
                None => Cow::Borrowed(""),
            },
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(n) => write!(f, "{n}"),
            Scalar::Float(x) => write!(f, "{x}"),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Int(n)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

// ===== OneOrMany =====

/// A field the source data encodes as either a bare value or a list.
///
/// The XML-to-JSON conversion collapses one-element lists, so `"action"`
/// on a monster may be a single object or an array of them. `iter()`
/// presents both shapes uniformly.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    /// A single bare value.
    One(T),
    /// A list of values.
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Iterate over the contained values, one or many.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            OneOrMany::One(item) => std::slice::from_ref(item).iter(),
            OneOrMany::Many(items) => items.iter(),
        }
    }

    /// Number of contained values.
    pub fn len(&self) -> usize {
        match self {
            OneOrMany::One(_) => 1,
            OneOrMany::Many(items) => items.len(),
        }
    }

    /// True when no values are contained (an empty source list).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A named block of rules text: an action, reaction, trait, or legendary
/// action on a monster, or a racial trait.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NameTextPair {
    /// Block heading (e.g. `"Multiattack"`).
    pub name: String,
    /// Body text of the block.
    pub text: String,
}

// ===== Monster =====

/// An immutable monster record.
///
/// Fields mirror the compendium source. Ability scores are raw values;
/// modifiers are derived via [`crate::model::ability_modifier`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Monster {
    /// Monster name; the compendium key.
    pub name: String,
    /// Portrait image, when the source provides one.
    #[serde(rename = "imageURL", default)]
    pub image_url: Option<String>,
    /// Challenge rating (`"1/4"`, `3`, ...).
    pub cr: Scalar,
    /// Armor class, possibly annotated.
    pub ac: Scalar,
    /// Hit points, possibly annotated with the hit dice expression.
    pub hp: Scalar,
    /// Passive perception.
    #[serde(default)]
    pub passive: Option<Scalar>,
    /// Size category (`"M"`, `"L"`, ...).
    pub size: String,
    /// Movement speeds.
    #[serde(default)]
    pub speed: Option<Scalar>,
    /// Strength score.
    #[serde(rename = "str")]
    pub strength: i32,
    /// Dexterity score.
    #[serde(rename = "dex")]
    pub dexterity: i32,
    /// Constitution score.
    #[serde(rename = "con")]
    pub constitution: i32,
    /// Intelligence score.
    #[serde(rename = "int")]
    pub intelligence: i32,
    /// Wisdom score.
    #[serde(rename = "wis")]
    pub wisdom: i32,
    /// Charisma score.
    #[serde(rename = "cha")]
    pub charisma: i32,
    /// Skill bonuses.
    #[serde(default)]
    pub skill: Option<String>,
    /// Senses (darkvision etc.).
    #[serde(default)]
    pub senses: Option<String>,
    /// Alignment text.
    #[serde(default)]
    pub alignment: Option<String>,
    /// Languages spoken.
    #[serde(default)]
    pub languages: Option<String>,
    /// Creature type line.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Flavor description.
    #[serde(default)]
    pub description: Option<String>,
    /// Actions.
    #[serde(default)]
    pub action: Option<OneOrMany<NameTextPair>>,
    /// Reactions.
    #[serde(default)]
    pub reaction: Option<OneOrMany<NameTextPair>>,
    /// Legendary actions.
    #[serde(default)]
    pub legendary: Option<OneOrMany<NameTextPair>>,
    /// Passive traits.
    #[serde(rename = "trait", default)]
    pub traits: Option<OneOrMany<NameTextPair>>,
    /// Saving throw bonuses.
    #[serde(default)]
    pub save: Option<String>,
    /// Damage resistances.
    #[serde(default)]
    pub resist: Option<String>,
    /// Damage vulnerabilities.
    #[serde(default)]
    pub vulnerable: Option<String>,
    /// Damage immunities.
    #[serde(default)]
    pub immune: Option<String>,
    /// Condition immunities.
    #[serde(rename = "conditionImmune", default)]
    pub condition_immune: Option<String>,
    /// Known/prepared spells.
    #[serde(default)]
    pub spells: Option<String>,
    /// Spell slots.
    #[serde(default)]
    pub slots: Option<String>,
}

// ===== Race =====

/// An immutable race record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Race {
    /// Race name; the compendium key.
    pub name: String,
    /// Size category.
    #[serde(default)]
    pub size: Option<String>,
    /// Base walking speed.
    #[serde(default)]
    pub speed: Option<Scalar>,
    /// Ability score adjustments (`"Dex 2"`).
    #[serde(default)]
    pub ability: Option<String>,
    /// Granted proficiencies.
    #[serde(default)]
    pub proficiency: Option<String>,
    /// Racial traits.
    #[serde(rename = "trait", default)]
    pub traits: Option<OneOrMany<NameTextPair>>,
}

// ===== Spell =====

/// An immutable spell record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Spell {
    /// Spell name; the compendium key.
    pub name: String,
    /// Spell level (0 for cantrips).
    pub level: Scalar,
    /// Classes with access to the spell.
    #[serde(default)]
    pub classes: Option<String>,
    /// Casting time.
    #[serde(default)]
    pub time: Option<String>,
    /// Duration.
    #[serde(default)]
    pub duration: Option<String>,
    /// Range.
    #[serde(default)]
    pub range: Option<String>,
    /// Components (V, S, M ...).
    #[serde(default)]
    pub components: Option<String>,
    /// School of magic.
    #[serde(default)]
    pub school: Option<String>,
    /// Rules text, one or more paragraphs.
    pub text: OneOrMany<String>,
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_deserializes_int_float_and_text() {
        let n: Scalar = serde_json::from_str("13").expect("int");
        assert_eq!(n, Scalar::Int(13));
        let x: Scalar = serde_json::from_str("0.25").expect("float");
        assert_eq!(x, Scalar::Float(0.25));
        let s: Scalar = serde_json::from_str("\"12 (natural armor)\"").expect("text");
        assert_eq!(s, Scalar::Text("12 (natural armor)".into()));
    }

    #[test]
    fn scalar_leading_strips_annotation() {
        assert_eq!(Scalar::from("135 (18d10+36)").leading(), "135");
        assert_eq!(Scalar::from(13).leading(), "13");
        assert_eq!(Scalar::from("").leading(), "");
    }

    #[test]
    fn one_or_many_iterates_bare_value() {
        let one: OneOrMany<String> = serde_json::from_str("\"a line\"").expect("bare");
        assert_eq!(one.len(), 1);
        assert_eq!(one.iter().next().map(String::as_str), Some("a line"));
    }

    #[test]
    fn one_or_many_iterates_list() {
        let many: OneOrMany<String> = serde_json::from_str(r#"["a", "b"]"#).expect("list");
        assert_eq!(many.len(), 2);
        let collected: Vec<&str> = many.iter().map(String::as_str).collect();
        assert_eq!(collected, vec!["a", "b"]);
    }

    #[test]
    fn monster_deserializes_irregular_fields() {
        let json = r#"{
            "name": "Goblin",
            "cr": "1/4",
            "ac": "15 (leather armor, shield)",
            "hp": "7 (2d6)",
            "passive": 9,
            "size": "S",
            "speed": "30 ft.",
            "str": 8, "dex": 14, "con": 10, "int": 10, "wis": 8, "cha": 8,
            "alignment": "neutral evil",
            "type": "humanoid (goblinoid)",
            "action": {"name": "Scimitar", "text": "Melee Weapon Attack: +4 to hit."}
        }"#;
        let goblin: Monster = serde_json::from_str(json).expect("valid monster");
        assert_eq!(goblin.name, "Goblin");
        assert_eq!(goblin.ac.leading(), "15");
        assert_eq!(goblin.cr, Scalar::Text("1/4".into()));
        assert_eq!(goblin.kind.as_deref(), Some("humanoid (goblinoid)"));
        let actions = goblin.action.expect("has actions");
        assert_eq!(actions.len(), 1);
        assert_eq!(actions.iter().next().map(|a| a.name.as_str()), Some("Scimitar"));
    }

    #[test]
    fn spell_text_accepts_single_paragraph() {
        let json = r#"{
            "name": "Mage Hand",
            "level": 0,
            "school": "C",
            "text": "A spectral, floating hand appears."
        }"#;
        let spell: Spell = serde_json::from_str(json).expect("valid spell");
        assert_eq!(spell.level, Scalar::Int(0));
        assert_eq!(spell.text.len(), 1);
    }

    #[test]
    fn race_traits_accept_list() {
        let json = r#"{
            "name": "Hill Dwarf",
            "size": "M",
            "speed": 25,
            "ability": "Con 2, Wis 1",
            "trait": [
                {"name": "Darkvision", "text": "You can see in dim light."},
                {"name": "Dwarven Resilience", "text": "Advantage on saves vs poison."}
            ]
        }"#;
        let race: Race = serde_json::from_str(json).expect("valid race");
        assert_eq!(race.traits.as_ref().map(OneOrMany::len), Some(2));
        assert_eq!(race.speed, Some(Scalar::Int(25)));
    }
}
