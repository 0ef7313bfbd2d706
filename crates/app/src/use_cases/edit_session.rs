//! The NPC edit session.
//!
//! Owns the local draft of one remotely stored sheet. The presentation layer
//! renders the draft, calls the field setters as the user types, and invokes
//! the actions (save, publish, unpublish, duplicate, share, export). All
//! collaborators arrive through ports at construction time.
//!
//! Persistence is always a whole-document overwrite of the draft. Saving
//! commits the draft into the session only when the store accepts the write;
//! a rejected write leaves the draft dirty so the action can be retried.

use std::collections::BTreeMap;
use std::sync::Arc;

use url::Url;

use fultimator_domain::{
    publish_eligibility, search_tokens, Affinity, Attack, Attributes, Element, Extra, Npc, NpcId,
    PublishBlocker, Rank, Species, Spell, TextEntry, UserId, WeaponAttack,
};

use crate::infrastructure::ports::{ClipboardPort, ClockPort, IdentityPort, NpcStore, StoreError};
use crate::infrastructure::settings::AppSettings;

use super::export::{export_npc, ExportArtifact};

/// Error type for session actions.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The record has not arrived from the store yet.
    #[error("NPC is not loaded yet")]
    NotLoaded,
    /// The record id does not exist in the store.
    #[error("NPC not found")]
    NotFound,
    /// The session has been closed.
    #[error("Session is closed")]
    Closed,
    /// No authenticated user is available for an owner-gated action.
    #[error("No signed-in user")]
    NotSignedIn,
    /// The acting user does not own this record.
    #[error("Only the owner may do this")]
    NotOwner,
    /// The draft fails the publish eligibility gate.
    #[error(transparent)]
    NotPublishable(#[from] PublishBlocker),
    /// The share location cannot carry a path segment.
    #[error("Share location cannot hold an NPC link")]
    InvalidShareLocation,
    /// The host clipboard refused the share link.
    #[error("Clipboard error: {0}")]
    Clipboard(String),
    /// The draft could not be serialized for export.
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// The store refused or failed an operation.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Externally observable session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// No record yet; the draft does not exist.
    Loading,
    /// Draft equals the last-persisted record.
    Clean,
    /// Draft has unsaved edits.
    Dirty,
    /// Torn down; all actions are rejected.
    Closed,
}

enum SessionState {
    Loading,
    Open { record: Npc, draft: Npc, dirty: bool },
    Closed,
}

/// Edit session for a single NPC document.
pub struct EditSession {
    store: Arc<dyn NpcStore>,
    identity: Arc<dyn IdentityPort>,
    clock: Arc<dyn ClockPort>,
    settings: AppSettings,
    npc_id: NpcId,
    state: SessionState,
}

impl EditSession {
    /// Open a session on `npc_id`. The session starts in `Loading`; call
    /// [`load`](Self::load) or feed it the first change notification.
    pub fn new(
        store: Arc<dyn NpcStore>,
        identity: Arc<dyn IdentityPort>,
        clock: Arc<dyn ClockPort>,
        settings: AppSettings,
        npc_id: NpcId,
    ) -> Self {
        Self {
            store,
            identity,
            clock,
            settings,
            npc_id,
            state: SessionState::Loading,
        }
    }

    pub fn npc_id(&self) -> NpcId {
        self.npc_id
    }

    pub fn status(&self) -> SessionStatus {
        match &self.state {
            SessionState::Loading => SessionStatus::Loading,
            SessionState::Open { dirty: false, .. } => SessionStatus::Clean,
            SessionState::Open { dirty: true, .. } => SessionStatus::Dirty,
            SessionState::Closed => SessionStatus::Closed,
        }
    }

    pub fn is_dirty(&self) -> bool {
        matches!(self.state, SessionState::Open { dirty: true, .. })
    }

    /// The current draft, once the record has arrived.
    pub fn draft(&self) -> Option<&Npc> {
        match &self.state {
            SessionState::Open { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Why the publish button is disabled, if it is.
    pub fn publish_blocker(&self) -> Option<PublishBlocker> {
        self.draft().and_then(|draft| publish_eligibility(draft).err())
    }

    /// Fetch the record and initialize a clean draft from it.
    ///
    /// A missing id is reported but leaves the session in `Loading`; there is
    /// no distinct error state for it.
    pub async fn load(&mut self) -> Result<(), SessionError> {
        if matches!(self.state, SessionState::Closed) {
            return Err(SessionError::Closed);
        }
        match self.store.get(self.npc_id).await? {
            Some(record) => {
                self.apply_remote(record);
                Ok(())
            }
            None => {
                tracing::warn!(npc_id = %self.npc_id, "npc does not exist");
                Err(SessionError::NotFound)
            }
        }
    }

    /// Accept a remote change notification.
    ///
    /// The incoming record wins over any unsaved edits: the draft is reset to
    /// it and the dirty flag cleared. Applying the same record twice is a
    /// no-op the second time.
    pub fn apply_remote(&mut self, incoming: Npc) {
        if matches!(self.state, SessionState::Closed) {
            tracing::debug!(npc_id = %self.npc_id, "change notification after close ignored");
            return;
        }
        if incoming.id != self.npc_id {
            tracing::warn!(
                npc_id = %self.npc_id,
                incoming = %incoming.id,
                "change notification for a different document ignored"
            );
            return;
        }
        if self.is_dirty() {
            tracing::warn!(npc_id = %self.npc_id, "remote change discards unsaved draft");
        }
        self.state = SessionState::Open {
            record: incoming.clone(),
            draft: incoming,
            dirty: false,
        };
    }

    /// Replace the draft wholesale. This is the sole mutation path; the field
    /// setters below all come through here.
    ///
    /// The record identity (`id`, `uid`) and the publish-derived fields
    /// (`published`, `search_string`, `published_at`) are re-asserted from
    /// the current draft: only the publish/unpublish transitions may move
    /// them.
    pub fn update_draft(&mut self, next: Npc) {
        let SessionState::Open { draft, dirty, .. } = &mut self.state else {
            tracing::warn!(npc_id = %self.npc_id, "edit before load dropped");
            return;
        };
        let mut next = next;
        next.id = draft.id;
        next.uid = draft.uid;
        next.published = draft.published;
        next.search_string = draft.search_string.clone();
        next.published_at = draft.published_at;

        *draft = next;
        *dirty = true;
        tracing::debug!(npc_id = %self.npc_id, "draft updated");
    }

    fn edit(&mut self, apply: impl FnOnce(&mut Npc)) {
        let Some(current) = self.draft() else {
            tracing::warn!(npc_id = %self.npc_id, "edit before load dropped");
            return;
        };
        let mut next = current.clone();
        apply(&mut next);
        self.update_draft(next);
    }

    pub fn set_name(&mut self, name: String) {
        self.edit(|npc| npc.name = name);
    }

    pub fn set_level(&mut self, level: u8) {
        self.edit(|npc| npc.level = level);
    }

    pub fn set_species(&mut self, species: Species) {
        self.edit(|npc| npc.species = species);
    }

    pub fn set_rank(&mut self, rank: Rank) {
        self.edit(|npc| npc.rank = rank);
    }

    pub fn set_description(&mut self, description: String) {
        self.edit(|npc| npc.description = description);
    }

    pub fn set_traits(&mut self, traits: String) {
        self.edit(|npc| npc.traits = traits);
    }

    pub fn set_created_by(&mut self, created_by: String) {
        self.edit(|npc| npc.created_by = created_by);
    }

    pub fn set_language(&mut self, language: String) {
        self.edit(|npc| npc.language = language);
    }

    pub fn set_attributes(&mut self, attributes: Attributes) {
        self.edit(|npc| npc.attributes = attributes);
    }

    pub fn set_affinities(&mut self, affinities: BTreeMap<Element, Affinity>) {
        self.edit(|npc| npc.affinities = affinities);
    }

    pub fn set_extra(&mut self, extra: Extra) {
        self.edit(|npc| npc.extra = extra);
    }

    pub fn set_attacks(&mut self, attacks: Vec<Attack>) {
        self.edit(|npc| npc.attacks = attacks);
    }

    pub fn set_weapon_attacks(&mut self, weapon_attacks: Vec<WeaponAttack>) {
        self.edit(|npc| npc.weapon_attacks = weapon_attacks);
    }

    pub fn set_spells(&mut self, spells: Vec<Spell>) {
        self.edit(|npc| npc.spells = spells);
    }

    pub fn set_actions(&mut self, actions: Vec<TextEntry>) {
        self.edit(|npc| npc.actions = actions);
    }

    pub fn set_special(&mut self, special: Vec<TextEntry>) {
        self.edit(|npc| npc.special = special);
    }

    pub fn set_rare_gear(&mut self, rare_gear: Vec<TextEntry>) {
        self.edit(|npc| npc.rare_gear = rare_gear);
    }

    pub fn set_notes(&mut self, notes: Vec<TextEntry>) {
        self.edit(|npc| npc.notes = notes);
    }

    pub fn set_tags(&mut self, tags: Vec<String>) {
        self.edit(|npc| npc.tags = tags);
    }

    /// Persist the whole draft at the record's id.
    ///
    /// On success the draft becomes the new clean record. On failure the
    /// draft stays dirty and the error is returned for retry.
    pub async fn save(&mut self) -> Result<(), SessionError> {
        let outgoing = self.open_draft()?.clone();
        match self.store.overwrite(self.npc_id, &outgoing).await {
            Ok(()) => {
                self.commit(outgoing);
                tracing::debug!(npc_id = %self.npc_id, "draft saved");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(npc_id = %self.npc_id, error = %e, "save rejected; draft kept");
                Err(e.into())
            }
        }
    }

    /// Publish the draft to the compendium.
    ///
    /// Owner-only; the eligibility gate must pass. One overwrite carries the
    /// flag flip, the recomputed search tokens, and the publish timestamp.
    pub async fn publish(&mut self) -> Result<(), SessionError> {
        let draft = self.open_draft()?;
        let actor = self.current_user()?;
        if actor != draft.uid {
            return Err(SessionError::NotOwner);
        }
        publish_eligibility(draft)?;

        let mut next = draft.clone();
        next.published = true;
        next.search_string = search_tokens(&next.name);
        next.published_at = Some(self.clock.now());

        match self.store.overwrite(self.npc_id, &next).await {
            Ok(()) => {
                tracing::info!(npc_id = %self.npc_id, "npc published");
                self.commit(next);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(npc_id = %self.npc_id, error = %e, "publish rejected; draft kept");
                Err(e.into())
            }
        }
    }

    /// Withdraw the record from the compendium.
    ///
    /// Owner-only. The draft is persisted as-is with the flag lowered;
    /// search tokens and the publish timestamp keep their previous values.
    pub async fn unpublish(&mut self) -> Result<(), SessionError> {
        let draft = self.open_draft()?;
        let actor = self.current_user()?;
        if actor != draft.uid {
            return Err(SessionError::NotOwner);
        }

        let mut next = draft.clone();
        next.published = false;

        match self.store.overwrite(self.npc_id, &next).await {
            Ok(()) => {
                tracing::info!(npc_id = %self.npc_id, "npc unpublished");
                self.commit(next);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(npc_id = %self.npc_id, error = %e, "unpublish rejected; draft kept");
                Err(e.into())
            }
        }
    }

    /// Copy the draft into a brand-new unpublished record owned by the acting
    /// user, and return the new identifier for redirection.
    ///
    /// Anyone signed in may duplicate, owner or not. The session and its
    /// draft are untouched either way.
    pub async fn duplicate(&self) -> Result<NpcId, SessionError> {
        let draft = self.open_draft()?;
        let actor = self.current_user()?;

        let copy = draft.duplicated(actor);
        match self
            .store
            .insert(&self.settings.npc_collection, &copy)
            .await
        {
            Ok(new_id) => {
                tracing::info!(npc_id = %self.npc_id, %new_id, "npc duplicated");
                Ok(new_id)
            }
            Err(e) => {
                tracing::warn!(npc_id = %self.npc_id, error = %e, "duplicate rejected");
                Err(e.into())
            }
        }
    }

    /// The shareable link for this record: the current location with the
    /// record id appended.
    pub fn share_link(&self, location: &Url) -> Result<Url, SessionError> {
        let mut link = location.clone();
        link.path_segments_mut()
            .map_err(|()| SessionError::InvalidShareLocation)?
            .pop_if_empty()
            .push(&self.npc_id.to_string());
        Ok(link)
    }

    /// Put the share link on the host clipboard. No draft interaction.
    pub fn share(
        &self,
        location: &Url,
        clipboard: &dyn ClipboardPort,
    ) -> Result<Url, SessionError> {
        let link = self.share_link(location)?;
        clipboard
            .write_text(link.as_str())
            .map_err(|e| SessionError::Clipboard(e.to_string()))?;
        tracing::debug!(npc_id = %self.npc_id, "share link copied");
        Ok(link)
    }

    /// Serialize the draft as a downloadable JSON artifact.
    pub fn export(&self) -> Result<ExportArtifact, SessionError> {
        let draft = self.open_draft()?;
        export_npc(draft).map_err(|e| SessionError::Serialization(e.to_string()))
    }

    /// Tear the session down. Unsaved edits are lost; in-flight persists are
    /// not cancelled, and any late notification is ignored.
    pub fn close(&mut self) {
        if !matches!(self.state, SessionState::Closed) {
            tracing::info!(npc_id = %self.npc_id, dirty = self.is_dirty(), "session closed");
        }
        self.state = SessionState::Closed;
    }

    fn open_draft(&self) -> Result<&Npc, SessionError> {
        match &self.state {
            SessionState::Open { draft, .. } => Ok(draft),
            SessionState::Loading => Err(SessionError::NotLoaded),
            SessionState::Closed => Err(SessionError::Closed),
        }
    }

    fn current_user(&self) -> Result<UserId, SessionError> {
        self.identity.current_user().ok_or(SessionError::NotSignedIn)
    }

    fn commit(&mut self, persisted: Npc) {
        if let SessionState::Open {
            record,
            draft,
            dirty,
        } = &mut self.state
        {
            *record = persisted.clone();
            *draft = persisted;
            *dirty = false;
        }
    }
}
