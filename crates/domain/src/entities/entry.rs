//! Named free-form sheet entries.

use serde::{Deserialize, Serialize};

/// A named rule text on the sheet. Actions, special rules, rare gear, and
/// notes all share this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextEntry {
    pub name: String,
    #[serde(default)]
    pub effect: String,
}

impl TextEntry {
    pub fn new(name: impl Into<String>, effect: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            effect: effect.into(),
        }
    }
}
