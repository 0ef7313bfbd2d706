//! Base and weapon attacks.

use serde::{Deserialize, Serialize};

use crate::value_objects::{AttributeName, Element};

/// Whether an attack is made in melee or at range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttackRange {
    Melee,
    Distance,
}

impl Default for AttackRange {
    fn default() -> Self {
        Self::Melee
    }
}

/// A natural attack rolled directly on two attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attack {
    pub name: String,
    #[serde(default)]
    pub range: AttackRange,
    pub attr1: AttributeName,
    pub attr2: AttributeName,
    pub damage_type: Element,
    /// Deals extra damage (costs a skill point on the sheet).
    #[serde(default)]
    pub extra_damage: bool,
    /// Rider effects, free-form.
    #[serde(default)]
    pub special: Vec<String>,
}

impl Attack {
    pub fn new(
        name: impl Into<String>,
        attr1: AttributeName,
        attr2: AttributeName,
        damage_type: Element,
    ) -> Self {
        Self {
            name: name.into(),
            range: AttackRange::Melee,
            attr1,
            attr2,
            damage_type,
            extra_damage: false,
            special: Vec::new(),
        }
    }

    pub fn with_range(mut self, range: AttackRange) -> Self {
        self.range = range;
        self
    }

    pub fn with_extra_damage(mut self) -> Self {
        self.extra_damage = true;
        self
    }

    pub fn with_special(mut self, effect: impl Into<String>) -> Self {
        self.special.push(effect.into());
        self
    }
}

/// An equipped weapon an NPC attacks with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weapon {
    pub name: String,
    pub attr1: AttributeName,
    pub attr2: AttributeName,
    /// Flat accuracy bonus of the weapon itself.
    #[serde(default)]
    pub precision: i32,
    /// Flat damage added on top of the high roll.
    #[serde(default)]
    pub damage: i32,
    pub damage_type: Element,
}

/// An attack made with an equipped weapon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponAttack {
    pub name: String,
    pub weapon: Weapon,
    #[serde(default)]
    pub extra_damage: bool,
    #[serde(default)]
    pub special: Vec<String>,
}

impl WeaponAttack {
    pub fn new(name: impl Into<String>, weapon: Weapon) -> Self {
        Self {
            name: name.into(),
            weapon,
            extra_damage: false,
            special: Vec::new(),
        }
    }

    pub fn with_extra_damage(mut self) -> Self {
        self.extra_damage = true;
        self
    }

    pub fn with_special(mut self, effect: impl Into<String>) -> Self {
        self.special.push(effect.into());
        self
    }
}
