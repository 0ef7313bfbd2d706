//! Damage types and elemental affinities.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A damage type an attack deals or an affinity applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Physical,
    Wind,
    Bolt,
    Dark,
    Earth,
    Fire,
    Ice,
    Light,
    Poison,
}

impl Element {
    /// All damage types, in sheet display order.
    pub fn all() -> [Element; 9] {
        [
            Self::Physical,
            Self::Wind,
            Self::Bolt,
            Self::Dark,
            Self::Earth,
            Self::Fire,
            Self::Ice,
            Self::Light,
            Self::Poison,
        ]
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Physical => "physical",
            Self::Wind => "wind",
            Self::Bolt => "bolt",
            Self::Dark => "dark",
            Self::Earth => "earth",
            Self::Fire => "fire",
            Self::Ice => "ice",
            Self::Light => "light",
            Self::Poison => "poison",
        };
        write!(f, "{name}")
    }
}

/// How an NPC reacts to a damage type. Absent means normal damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Affinity {
    Vulnerable,
    Resistant,
    Immune,
    Absorb,
}

impl Affinity {
    /// Damage multiplier applied to incoming damage of the affine type.
    pub fn multiplier(self) -> f32 {
        match self {
            Self::Vulnerable => 2.0,
            Self::Resistant => 0.5,
            Self::Immune => 0.0,
            Self::Absorb => -1.0,
        }
    }
}
