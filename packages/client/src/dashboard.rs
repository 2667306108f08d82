use std::fmt;
use std::sync::Arc;

use common::ApplicationRecord;
use tracing::{instrument, warn};

use crate::api::ReviewApi;
use crate::error::ClientError;
use crate::presenter::{ResultLine, detail_lines};

const LOAD_FAILED: &str = "Failed to load applications, the session may have expired.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardState {
    Loading,
    Ready(Vec<ApplicationRecord>),
    /// `auth_expired` is set when the token was rejected. The session itself
    /// is left alone; the user decides whether to log in again.
    Failed { message: String, auth_expired: bool },
}

/// Admin review list. Fetches with the session token once mounted.
pub struct AdminDashboard {
    api: Arc<dyn ReviewApi>,
    token: String,
    state: DashboardState,
}

impl AdminDashboard {
    pub fn mount(api: Arc<dyn ReviewApi>, token: String) -> Self {
        Self {
            api,
            token,
            state: DashboardState::Loading,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    #[instrument(skip(self))]
    pub async fn load(&mut self) -> &DashboardState {
        self.state = DashboardState::Loading;
        self.state = match self.api.applications(&self.token).await {
            Ok(records) => DashboardState::Ready(records),
            Err(e) => {
                warn!(error = %e, "Failed to load admin application list");
                let auth_expired = matches!(e, ClientError::AuthExpired(_));
                let message = match e {
                    ClientError::AuthExpired(_) | ClientError::Status(_) => LOAD_FAILED.to_string(),
                    other => other.to_string(),
                };
                DashboardState::Failed {
                    message,
                    auth_expired,
                }
            }
        };
        &self.state
    }

    pub fn view(&self) -> DashboardView {
        match &self.state {
            DashboardState::Loading => DashboardView::Loading,
            DashboardState::Failed { message, .. } => DashboardView::Failed {
                message: message.clone(),
            },
            DashboardState::Ready(records) if records.is_empty() => DashboardView::Empty,
            DashboardState::Ready(records) => {
                DashboardView::Entries(records.iter().map(DashboardEntry::from).collect())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardEntry {
    pub heading: String,
    pub status: String,
    pub lines: Vec<ResultLine>,
}

impl From<&ApplicationRecord> for DashboardEntry {
    fn from(record: &ApplicationRecord) -> Self {
        let mut lines = vec![ResultLine::Field {
            label: "Name",
            value: record.name.clone().unwrap_or_default(),
        }];
        lines.extend(detail_lines(record));
        Self {
            heading: format!("{} (ID: {})", record.kind.label(), record.id),
            status: record.status.clone(),
            lines,
        }
    }
}

/// What the dashboard screen shows. `Failed` always offers a re-login action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardView {
    Loading,
    Failed { message: String },
    Empty,
    Entries(Vec<DashboardEntry>),
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => writeln!(f, "Loading..."),
            Self::Failed { message } => writeln!(f, "Error: {message}"),
            Self::Empty => writeln!(f, "There are no applications to review."),
            Self::Entries(entries) => {
                for entry in entries {
                    writeln!(f, "{}", entry.heading)?;
                    writeln!(f, "  Status: {}", entry.status)?;
                    for line in &entry.lines {
                        writeln!(f, "  {line}")?;
                    }
                }
                Ok(())
            }
        }
    }
}
