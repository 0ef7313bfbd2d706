//! NPC spells.

use serde::{Deserialize, Serialize};

use crate::value_objects::AttributeName;

/// A spell known by an NPC.
///
/// Cost and duration are kept as free text: the sheet allows values like
/// `"10 x T"` or `"Scene"` that carry no further structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spell {
    pub name: String,
    pub attr1: AttributeName,
    pub attr2: AttributeName,
    /// Mind point cost, e.g. `"10"` or `"5 x T"`.
    #[serde(default)]
    pub mp: String,
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub effect: String,
    /// Offensive spells roll a magic check; utility spells do not.
    #[serde(default)]
    pub offensive: bool,
}

impl Spell {
    pub fn new(name: impl Into<String>, attr1: AttributeName, attr2: AttributeName) -> Self {
        Self {
            name: name.into(),
            attr1,
            attr2,
            mp: String::new(),
            target: String::new(),
            duration: String::new(),
            effect: String::new(),
            offensive: false,
        }
    }

    pub fn offensive(mut self) -> Self {
        self.offensive = true;
        self
    }

    pub fn with_cost(mut self, mp: impl Into<String>) -> Self {
        self.mp = mp.into();
        self
    }

    pub fn with_effect(mut self, effect: impl Into<String>) -> Self {
        self.effect = effect.into();
        self
    }
}
