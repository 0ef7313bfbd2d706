//! Application settings.

use serde::{Deserialize, Serialize};

/// Collection name the NPC documents historically live in.
pub const DEFAULT_NPC_COLLECTION: &str = "npc-personal";

/// Host-configurable settings for the edit session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    /// Store collection new NPC documents are inserted into.
    pub npc_collection: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            npc_collection: DEFAULT_NPC_COLLECTION.to_string(),
        }
    }
}
