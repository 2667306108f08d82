use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::error::StorageError;
use super::traits::SessionStore;

/// In-process session store. Clones share the same slot, so a second
/// controller built from a clone sees the first one's session.
#[derive(Clone, Default)]
pub struct MemorySessionStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(token.into()))),
        }
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self) -> Result<Option<String>, StorageError> {
        let slot = self.slot.lock().await;
        Ok(slot.clone().filter(|token| !token.is_empty()))
    }

    async fn save(&self, token: &str) -> Result<(), StorageError> {
        *self.slot.lock().await = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        *self.slot.lock().await = None;
        Ok(())
    }
}
