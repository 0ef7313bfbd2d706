//! Ports for the identity provider and the host clipboard.

use fultimator_domain::UserId;

/// Who is currently signed in.
#[cfg_attr(test, mockall::automock)]
pub trait IdentityPort: Send + Sync {
    /// `None` when nobody is signed in.
    fn current_user(&self) -> Option<UserId>;
}

/// Sink for share links.
#[cfg_attr(test, mockall::automock)]
pub trait ClipboardPort: Send + Sync {
    fn write_text(&self, text: &str) -> anyhow::Result<()>;
}
