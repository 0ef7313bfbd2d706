//! In-memory document store.
//!
//! Reference adapter for the [`NpcStore`] port. Used directly by the test
//! suite and usable as a scratch backend for offline work. Documents are
//! validated against the schema on every write, the way a real backend's
//! security rules would.

use dashmap::DashMap;
use tokio::sync::broadcast;

use async_trait::async_trait;
use fultimator_domain::{Npc, NpcId};

use super::ports::{NpcStore, StoreError};

/// Buffered change notifications per document. Stale watchers lag rather
/// than block writers.
const WATCH_BUFFER: usize = 16;

/// Thread-safe in-memory [`NpcStore`].
#[derive(Default)]
pub struct InMemoryNpcStore {
    docs: DashMap<NpcId, Npc>,
    watchers: DashMap<NpcId, broadcast::Sender<Npc>>,
}

impl InMemoryNpcStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a document in place without notifying watchers. Fixture setup.
    pub fn seed(&self, npc: Npc) {
        self.docs.insert(npc.id, npc);
    }

    fn sender(&self, id: NpcId) -> broadcast::Sender<Npc> {
        self.watchers
            .entry(id)
            .or_insert_with(|| broadcast::channel(WATCH_BUFFER).0)
            .clone()
    }

    fn notify(&self, doc: &Npc) {
        if let Some(sender) = self.watchers.get(&doc.id) {
            // No receivers is fine; watch is opt-in.
            let _ = sender.send(doc.clone());
        }
    }
}

#[async_trait]
impl NpcStore for InMemoryNpcStore {
    async fn get(&self, id: NpcId) -> Result<Option<Npc>, StoreError> {
        Ok(self.docs.get(&id).map(|doc| doc.value().clone()))
    }

    async fn overwrite(&self, id: NpcId, npc: &Npc) -> Result<(), StoreError> {
        npc.validate()
            .map_err(|e| StoreError::Rejected(e.to_string()))?;

        // The document lives at `id` regardless of what the payload claims.
        let mut doc = npc.clone();
        doc.id = id;

        self.docs.insert(id, doc.clone());
        self.notify(&doc);
        Ok(())
    }

    async fn insert(&self, collection: &str, npc: &Npc) -> Result<NpcId, StoreError> {
        npc.validate()
            .map_err(|e| StoreError::Rejected(e.to_string()))?;

        let id = NpcId::new();
        let mut doc = npc.clone();
        doc.id = id;

        tracing::debug!(%id, collection, "inserted npc document");
        self.docs.insert(id, doc);
        Ok(id)
    }

    fn watch(&self, id: NpcId) -> broadcast::Receiver<Npc> {
        self.sender(id).subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fultimator_domain::UserId;

    fn npc(name: &str) -> Npc {
        Npc::new(UserId::new(), name)
    }

    #[tokio::test]
    async fn overwrite_then_get_round_trips() {
        let store = InMemoryNpcStore::new();
        let doc = npc("Goblin");
        store.overwrite(doc.id, &doc).await.expect("overwrite");

        let loaded = store.get(doc.id).await.expect("get");
        assert_eq!(loaded, Some(doc));
    }

    #[tokio::test]
    async fn get_unknown_id_is_none() {
        let store = InMemoryNpcStore::new();
        assert_eq!(store.get(NpcId::new()).await.expect("get"), None);
    }

    #[tokio::test]
    async fn overwrite_rejects_invalid_schema() {
        let store = InMemoryNpcStore::new();
        let doc = npc("Goblin").with_level(99);

        let result = store.overwrite(doc.id, &doc).await;
        assert!(matches!(result, Err(StoreError::Rejected(_))));
        assert_eq!(store.get(doc.id).await.expect("get"), None);
    }

    #[tokio::test]
    async fn insert_assigns_a_fresh_identifier() {
        let store = InMemoryNpcStore::new();
        let doc = npc("Goblin");

        let new_id = store.insert("npc-personal", &doc).await.expect("insert");
        assert_ne!(new_id, doc.id);

        let stored = store.get(new_id).await.expect("get").expect("stored");
        assert_eq!(stored.id, new_id);
        assert_eq!(stored.name, doc.name);
    }

    #[tokio::test]
    async fn watchers_observe_overwrites() {
        let store = InMemoryNpcStore::new();
        let doc = npc("Goblin");
        let mut watcher = store.watch(doc.id);

        store.overwrite(doc.id, &doc).await.expect("overwrite");

        let seen = watcher.recv().await.expect("notification");
        assert_eq!(seen, doc);
    }

    #[tokio::test]
    async fn seed_does_not_notify() {
        let store = InMemoryNpcStore::new();
        let doc = npc("Goblin");
        let mut watcher = store.watch(doc.id);

        store.seed(doc.clone());

        assert!(matches!(
            watcher.try_recv(),
            Err(broadcast::error::TryRecvError::Empty)
        ));
        assert_eq!(store.get(doc.id).await.expect("get"), Some(doc));
    }
}
