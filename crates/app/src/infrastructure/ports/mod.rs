//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the app layer. Everything else is
//! concrete types. Ports exist for:
//! - Document store access (could swap the in-memory adapter for a real
//!   document database client)
//! - Identity (who is editing, for ownership checks)
//! - Clock (publish timestamps, injectable for tests)
//! - Clipboard (share links land outside the process)

mod error;
mod external;
mod store;
mod testing;

pub use error::StoreError;
pub use external::{ClipboardPort, IdentityPort};
pub use store::NpcStore;
pub use testing::ClockPort;

#[cfg(test)]
pub use external::{MockClipboardPort, MockIdentityPort};
#[cfg(test)]
pub use store::MockNpcStore;
#[cfg(test)]
pub use testing::MockClockPort;
