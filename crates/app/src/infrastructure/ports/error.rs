//! Error type shared by store ports.

/// Failure of a document store operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The requested document does not exist.
    #[error("Not found")]
    NotFound,
    /// The store refused the write (permissions, schema validation).
    #[error("Write rejected: {0}")]
    Rejected(String),
    /// The document could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),
}
