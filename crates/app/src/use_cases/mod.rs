//! Application use cases.

mod edit_session;
mod export;
mod shortcuts;

pub use edit_session::{EditSession, SessionError, SessionStatus};
pub use export::{export_npc, ExportArtifact};
pub use shortcuts::{ChordParseError, KeyChord, Keymap, SheetAction};
