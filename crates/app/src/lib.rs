//! Fultimator application layer.
//!
//! Hosts the NPC edit session: the state machine that owns a local draft of a
//! remotely stored sheet, plus the ports it talks through and a reference
//! in-memory store adapter. The presentation layer renders the draft and
//! calls into [`use_cases::EditSession`]; everything infrastructural reaches
//! the session through the port traits in [`infrastructure::ports`].

pub mod infrastructure;
pub mod use_cases;

pub use infrastructure::clock::SystemClock;
pub use infrastructure::memory::InMemoryNpcStore;
pub use infrastructure::ports::{ClipboardPort, ClockPort, IdentityPort, NpcStore, StoreError};
pub use infrastructure::settings::AppSettings;
pub use use_cases::{
    export_npc, EditSession, ExportArtifact, Keymap, SessionError, SessionStatus, SheetAction,
};
