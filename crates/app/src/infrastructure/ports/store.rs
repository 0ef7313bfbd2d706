//! Document store port.

use async_trait::async_trait;
use tokio::sync::broadcast;

use fultimator_domain::{Npc, NpcId};

use super::error::StoreError;

/// Remote document store for NPC sheets.
///
/// Writes are always whole-document overwrites; there is no patch API and no
/// revision check, so the last write to land wins. `watch` delivers the
/// latest stored document whenever it changes remotely (including changes
/// caused by this process's own writes).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NpcStore: Send + Sync {
    /// Fetch a document by id. `Ok(None)` means the id does not exist.
    async fn get(&self, id: NpcId) -> Result<Option<Npc>, StoreError>;

    /// Replace the document at `id` with `npc` in its entirety.
    async fn overwrite(&self, id: NpcId, npc: &Npc) -> Result<(), StoreError>;

    /// Insert `npc` as a new document in `collection`; the store assigns and
    /// returns the authoritative identifier.
    async fn insert(&self, collection: &str, npc: &Npc) -> Result<NpcId, StoreError>;

    /// Subscribe to remote changes of the document at `id`.
    fn watch(&self, id: NpcId) -> broadcast::Receiver<Npc>;
}
