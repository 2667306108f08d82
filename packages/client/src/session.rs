use std::fmt;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::storage::{SessionStore, StorageError};

/// In-memory view of the admin session.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AdminSession {
    pub token: Option<String>,
}

impl AdminSession {
    pub fn is_active(&self) -> bool {
        self.token.is_some()
    }
}

impl fmt::Debug for AdminSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminSession")
            .field("active", &self.is_active())
            .finish()
    }
}

/// Tracks admin authentication on top of durable session storage.
///
/// Authenticated iff a token was found in storage at startup or was set by a
/// successful login since. Only an explicit [`SessionGate::clear`] ends it.
/// Storage I/O never runs while the in-memory session is locked.
pub struct SessionGate {
    store: Arc<dyn SessionStore>,
    session: Mutex<AdminSession>,
}

impl SessionGate {
    /// Restore the session from storage. An unreadable store starts
    /// unauthenticated.
    pub async fn restore(store: Arc<dyn SessionStore>) -> Self {
        let token = match store.load().await {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "Could not read stored session, starting signed out");
                None
            }
        };
        if token.is_some() {
            info!("Restored admin session from storage");
        }
        Self {
            store,
            session: Mutex::new(AdminSession { token }),
        }
    }

    pub async fn is_authenticated(&self) -> bool {
        self.session.lock().await.is_active()
    }

    pub async fn token(&self) -> Option<String> {
        self.session.lock().await.token.clone()
    }

    pub async fn session(&self) -> AdminSession {
        self.session.lock().await.clone()
    }

    /// Persist `token`, then mark the session active.
    ///
    /// The in-memory session is active even when persisting fails; the error
    /// is returned so the caller can report it.
    pub async fn establish(&self, token: String) -> Result<(), StorageError> {
        let persisted = self.store.save(&token).await;
        self.session.lock().await.token = Some(token);
        persisted
    }

    /// Drop the session in memory, then clear the persisted token.
    pub async fn clear(&self) -> Result<(), StorageError> {
        self.session.lock().await.token = None;
        self.store.clear().await
    }
}
