//! The NPC record.
//!
//! This is the persisted document shape. Field names on the wire follow the
//! historical document schema (`lvl`, `weaponattacks`, `raregear`), so a few
//! fields carry explicit renames on top of the camelCase default.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::{NpcId, UserId};
use crate::value_objects::{Affinity, AttributeName, Die, Element};

use super::{Attack, Spell, TextEntry, WeaponAttack};

/// Lowest level the sheet accepts.
pub const MIN_LEVEL: u8 = 5;
/// Highest level the sheet accepts.
pub const MAX_LEVEL: u8 = 60;

/// NPC species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Beast,
    Construct,
    Demon,
    Elemental,
    Humanoid,
    Monster,
    Plant,
    Undead,
}

/// Threat rank. Elites and champions are tougher versions of the same sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    Soldier,
    Elite,
    Champion,
}

impl Default for Rank {
    fn default() -> Self {
        Self::Soldier
    }
}

/// The four attribute dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attributes {
    pub dexterity: Die,
    pub insight: Die,
    pub might: Die,
    pub will: Die,
}

impl Attributes {
    pub fn new(dexterity: Die, insight: Die, might: Die, will: Die) -> Self {
        Self {
            dexterity,
            insight,
            might,
            will,
        }
    }

    /// Resolve an attribute name to its current die.
    pub fn get(&self, name: AttributeName) -> Die {
        match name {
            AttributeName::Dexterity => self.dexterity,
            AttributeName::Insight => self.insight,
            AttributeName::Might => self.might,
            AttributeName::Will => self.will,
        }
    }
}

/// Flat sheet bonuses bought with skill points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extra {
    #[serde(default)]
    pub hp: i32,
    #[serde(default)]
    pub mp: i32,
    #[serde(default)]
    pub def: i32,
    #[serde(default)]
    pub m_def: i32,
    #[serde(default)]
    pub init: i32,
    #[serde(default)]
    pub precision: i32,
    #[serde(default)]
    pub magic: i32,
}

/// A persisted NPC document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Npc {
    pub id: NpcId,
    /// Owner identity. Never changed by the edit session.
    pub uid: UserId,
    pub name: String,
    #[serde(rename = "lvl")]
    pub level: u8,
    pub species: Species,
    #[serde(default)]
    pub rank: Rank,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub traits: String,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub published: bool,
    /// Derived at publish time; never edited directly.
    #[serde(default)]
    pub search_string: Vec<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub attributes: Attributes,
    /// Damage types with a non-normal reaction. Absent key means normal.
    #[serde(default)]
    pub affinities: BTreeMap<Element, Affinity>,
    #[serde(default)]
    pub extra: Extra,
    #[serde(default)]
    pub attacks: Vec<Attack>,
    #[serde(default, rename = "weaponattacks")]
    pub weapon_attacks: Vec<WeaponAttack>,
    #[serde(default)]
    pub spells: Vec<Spell>,
    #[serde(default)]
    pub actions: Vec<TextEntry>,
    #[serde(default)]
    pub special: Vec<TextEntry>,
    #[serde(default, rename = "raregear")]
    pub rare_gear: Vec<TextEntry>,
    #[serde(default)]
    pub notes: Vec<TextEntry>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Npc {
    pub fn new(uid: UserId, name: impl Into<String>) -> Self {
        Self {
            id: NpcId::new(),
            uid,
            name: name.into(),
            level: MIN_LEVEL,
            species: Species::Humanoid,
            rank: Rank::default(),
            description: String::new(),
            traits: String::new(),
            created_by: String::new(),
            language: String::new(),
            published: false,
            search_string: Vec::new(),
            published_at: None,
            attributes: Attributes::default(),
            affinities: BTreeMap::new(),
            extra: Extra::default(),
            attacks: Vec::new(),
            weapon_attacks: Vec::new(),
            spells: Vec::new(),
            actions: Vec::new(),
            special: Vec::new(),
            rare_gear: Vec::new(),
            notes: Vec::new(),
            tags: Vec::new(),
        }
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn with_species(mut self, species: Species) -> Self {
        self.species = species;
        self
    }

    pub fn with_rank(mut self, rank: Rank) -> Self {
        self.rank = rank;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_traits(mut self, traits: impl Into<String>) -> Self {
        self.traits = traits.into();
        self
    }

    pub fn with_created_by(mut self, created_by: impl Into<String>) -> Self {
        self.created_by = created_by.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_affinity(mut self, element: Element, affinity: Affinity) -> Self {
        self.affinities.insert(element, affinity);
        self
    }

    pub fn with_attack(mut self, attack: Attack) -> Self {
        self.attacks.push(attack);
        self
    }

    pub fn with_weapon_attack(mut self, attack: WeaponAttack) -> Self {
        self.weapon_attacks.push(attack);
        self
    }

    pub fn with_spell(mut self, spell: Spell) -> Self {
        self.spells.push(spell);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Schema validation applied at the store boundary on every write.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&self.level) {
            return Err(DomainError::validation(format!(
                "level {} outside {}..={}",
                self.level, MIN_LEVEL, MAX_LEVEL
            )));
        }
        if self.tags.iter().any(|t| t.is_empty()) {
            return Err(DomainError::validation("empty tag"));
        }
        Ok(())
    }

    /// A fresh copy of this sheet for `new_owner`: new identity, unpublished,
    /// every other field kept. Used by the duplicate action.
    pub fn duplicated(&self, new_owner: UserId) -> Npc {
        let mut copy = self.clone();
        copy.id = NpcId::new();
        copy.uid = new_owner;
        copy.published = false;
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goblin() -> Npc {
        Npc::new(UserId::new(), "Goblin").with_attack(Attack::new(
            "Bite",
            AttributeName::Dexterity,
            AttributeName::Might,
            Element::Physical,
        ))
    }

    #[test]
    fn wire_shape_uses_historical_field_names() {
        let npc = goblin()
            .with_created_by("gm")
            .with_weapon_attack(WeaponAttack::new(
                "Rusty Sword",
                crate::entities::Weapon {
                    name: "Sword".to_string(),
                    attr1: AttributeName::Dexterity,
                    attr2: AttributeName::Might,
                    precision: 1,
                    damage: 6,
                    damage_type: Element::Physical,
                },
            ));

        let json = serde_json::to_value(&npc).expect("serialize");
        assert!(json.get("lvl").is_some());
        assert!(json.get("weaponattacks").is_some());
        assert!(json.get("createdBy").is_some());
        assert!(json.get("searchString").is_some());
        assert!(json.get("publishedAt").is_some());
        assert!(json.get("level").is_none());
    }

    #[test]
    fn minimal_document_deserializes_with_defaults() {
        let json = format!(
            r#"{{
                "id": "{}",
                "uid": "{}",
                "name": "Skeleton",
                "lvl": 10,
                "species": "undead"
            }}"#,
            NpcId::new(),
            UserId::new()
        );
        let npc: Npc = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(npc.rank, Rank::Soldier);
        assert!(!npc.published);
        assert!(npc.attacks.is_empty());
        assert!(npc.search_string.is_empty());
        assert!(npc.published_at.is_none());
    }

    #[test]
    fn validate_rejects_out_of_range_level() {
        let npc = goblin().with_level(61);
        assert!(npc.validate().is_err());
        let npc = goblin().with_level(60);
        assert!(npc.validate().is_ok());
    }

    #[test]
    fn duplicated_changes_identity_and_unpublishes() {
        let mut source = goblin().with_description("green and mean");
        source.published = true;
        source.search_string = vec!["goblin".to_string()];

        let new_owner = UserId::new();
        let copy = source.duplicated(new_owner);

        assert_ne!(copy.id, source.id);
        assert_eq!(copy.uid, new_owner);
        assert!(!copy.published);
        assert_eq!(copy.name, source.name);
        assert_eq!(copy.description, source.description);
        assert_eq!(copy.attacks, source.attacks);
        // Stale until the next publish, by design of the publish transition.
        assert_eq!(copy.search_string, source.search_string);
    }

    #[test]
    fn attribute_lookup_follows_name() {
        let attrs = Attributes::new(Die::D10, Die::D8, Die::D6, Die::D12);
        assert_eq!(attrs.get(AttributeName::Dexterity), Die::D10);
        assert_eq!(attrs.get(AttributeName::Will), Die::D12);
    }
}
