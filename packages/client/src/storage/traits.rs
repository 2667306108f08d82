use async_trait::async_trait;

use super::error::StorageError;

/// Name of the single durable key holding the admin token.
pub const SESSION_KEY: &str = "sessionKey";

/// Durable client storage for the admin session token.
///
/// Holds at most one token. Writes only happen from serialized user actions,
/// so implementations need no cross-writer coordination.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read the persisted token, if any. An empty token counts as absent.
    async fn load(&self) -> Result<Option<String>, StorageError>;

    /// Persist `token`, replacing any previous one.
    async fn save(&self, token: &str) -> Result<(), StorageError>;

    /// Remove the persisted token. Clearing an empty store is not an error.
    async fn clear(&self) -> Result<(), StorageError>;
}
