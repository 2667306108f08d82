pub mod api;
pub mod config;
pub mod controller;
pub mod dashboard;
pub mod error;
pub mod forms;
pub mod notice;
pub mod outcome;
pub mod page;
pub mod presenter;
pub mod session;
pub mod storage;

use std::sync::Arc;
use std::time::Duration;

pub use api::{HttpReviewApi, ReviewApi};
pub use config::ClientConfig;
pub use controller::{Screen, ViewController};
pub use dashboard::{AdminDashboard, DashboardState, DashboardView};
pub use error::{ClientError, Result};
pub use notice::{Notice, Notifier};
pub use outcome::SubmissionOutcome;
pub use page::Page;
pub use presenter::{ResultLine, ResultView, Tone, present};
pub use session::{AdminSession, SessionGate};
pub use storage::{FileSessionStore, MemorySessionStore, SessionStore, StorageError};

/// Build a controller wired to the HTTP API and the on-disk session store.
pub async fn connect(config: &ClientConfig) -> Result<ViewController> {
    let api = Arc::new(HttpReviewApi::new(&config.api)?);
    let store = Arc::new(FileSessionStore::new(config.session.path.clone()));
    Ok(ViewController::new(
        api,
        store,
        Duration::from_millis(config.notice.dismiss_ms),
    )
    .await)
}
