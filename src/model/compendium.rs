//! The compendium: read-only keyed collections of reference entries.
//!
//! Loaded once from JSON, then only ever read. Iteration order of each
//! collection is the source's insertion order; the list engine treats that
//! as the "natural" (unsorted) order, so the maps must preserve it.

use super::entry::{Monster, Race, Scalar, Spell};
use super::error::CompendiumError;
use indexmap::IndexMap;
use serde::Deserialize;
use std::io::Read;

/// Read-only reference collections, keyed by entry name.
///
/// The compendium is owned by whoever loads it and handed to the rest of
/// the system by shared reference. Encounter instances reference entries
/// by key and are never written back here; nothing in this type mutates
/// after loading.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Compendium {
    /// Monsters, keyed by name.
    #[serde(default)]
    monsters: IndexMap<String, Monster>,
    /// Races, keyed by name.
    #[serde(default)]
    races: IndexMap<String, Race>,
    /// Spells, keyed by name.
    #[serde(default)]
    spells: IndexMap<String, Spell>,
}

impl Compendium {
    /// Load a compendium from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, CompendiumError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a compendium from a reader producing JSON.
    pub fn from_reader(reader: impl Read) -> Result<Self, CompendiumError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Insert a monster under its own name. Used while assembling the
    /// compendium; existing entries with the same name are replaced.
    pub fn insert_monster(&mut self, monster: Monster) {
        self.monsters.insert(monster.name.clone(), monster);
    }

    /// Insert a race under its own name.
    pub fn insert_race(&mut self, race: Race) {
        self.races.insert(race.name.clone(), race);
    }

    /// Insert a spell under its own name.
    pub fn insert_spell(&mut self, spell: Spell) {
        self.spells.insert(spell.name.clone(), spell);
    }

    /// Look up a monster by name.
    pub fn monster(&self, name: &str) -> Option<&Monster> {
        self.monsters.get(name)
    }

    /// Look up a race by name.
    pub fn race(&self, name: &str) -> Option<&Race> {
        self.races.get(name)
    }

    /// Look up a spell by name.
    pub fn spell(&self, name: &str) -> Option<&Spell> {
        self.spells.get(name)
    }

    /// Monsters in natural (insertion) order.
    pub fn monsters(&self) -> impl Iterator<Item = &Monster> {
        self.monsters.values()
    }

    /// Races in natural (insertion) order.
    pub fn races(&self) -> impl Iterator<Item = &Race> {
        self.races.values()
    }

    /// Spells in natural (insertion) order.
    pub fn spells(&self) -> impl Iterator<Item = &Spell> {
        self.spells.values()
    }
}

// ===== Derived lookups =====

/// Experience points awarded for defeating a monster of the given
/// challenge rating. `rating` is the textual CR (`"1/4"`, `"3"`); returns
/// `None` for ratings outside the published 0–30 table.
pub fn experience_for_rating(rating: &str) -> Option<u32> {
    let xp = match rating {
        "0" => 10,
        "1/8" => 25,
        "1/4" => 50,
        "1/2" => 100,
        "1" => 200,
        "2" => 450,
        "3" => 700,
        "4" => 1_100,
        "5" => 1_800,
        "6" => 2_300,
        "7" => 2_900,
        "8" => 3_900,
        "9" => 5_000,
        "10" => 5_900,
        "11" => 7_200,
        "12" => 8_400,
        "13" => 10_000,
        "14" => 11_500,
        "15" => 13_000,
        "16" => 15_000,
        "17" => 18_000,
        "18" => 20_000,
        "19" => 22_000,
        "20" => 25_000,
        "21" => 33_000,
        "22" => 41_000,
        "23" => 50_000,
        "24" => 62_000,
        "25" => 75_000,
        "26" => 90_000,
        "27" => 105_000,
        "28" => 120_000,
        "29" => 135_000,
        "30" => 155_000,
        _ => return None,
    };
    Some(xp)
}

/// Experience for a challenge rating in its [`Scalar`] form, as stored on
/// a monster record.
pub fn experience_for(cr: &Scalar) -> Option<u32> {
    experience_for_rating(cr.leading().as_ref())
}

/// Ability modifier derived from a raw ability score: `(score - 10) / 2`,
/// rounded toward negative infinity (a score of 7 gives -2).
pub fn ability_modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

/// Signed rendering of an ability modifier for the stat row: non-negative
/// modifiers carry an explicit `+`.
pub fn modifier_text(modifier: i32) -> String {
    if modifier >= 0 {
        format!("+{modifier}")
    } else {
        modifier.to_string()
    }
}

impl Monster {
    /// The six ability scores in display order, labeled.
    pub fn abilities(&self) -> [(&'static str, i32); 6] {
        [
            ("Str", self.strength),
            ("Dex", self.dexterity),
            ("Con", self.constitution),
            ("Int", self.intelligence),
            ("Wis", self.wisdom),
            ("Cha", self.charisma),
        ]
    }

    /// Experience awarded for this monster's challenge rating, when the
    /// rating is on the published table.
    pub fn experience(&self) -> Option<u32> {
        experience_for(&self.cr)
    }
}

// ===== Tests =====
