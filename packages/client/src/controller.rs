use std::sync::Arc;
use std::time::Duration;

use common::{Application, LoginRequest};
use tokio::sync::Mutex;
use tracing::{debug, error, info, instrument, warn};

use crate::api::ReviewApi;
use crate::dashboard::AdminDashboard;
use crate::error::Result;
use crate::notice::{Notice, Notifier};
use crate::outcome::SubmissionOutcome;
use crate::page::Page;
use crate::presenter::{ResultView, present};
use crate::session::{AdminSession, SessionGate};
use crate::storage::SessionStore;

pub const LOGIN_SUCCEEDED: &str = "Admin login succeeded.";
pub const LOGIN_FAILED: &str = "Login failed, please check the password.";
pub const SIGNED_OUT: &str = "Signed out of the admin account.";
pub const ENTERING_ADMIN_LOGIN: &str = "Entering admin login.";

struct ViewState {
    page: Page,
    outcome: Option<SubmissionOutcome>,
}

impl ViewState {
    fn navigate(&mut self, page: Page) {
        if page == Page::StatusResult {
            if self.outcome.is_none() {
                debug!("No outcome to show, falling back to home");
                self.page = Page::Home;
                return;
            }
        } else {
            self.outcome = None;
        }
        debug!(from = %self.page, to = %page, "Navigating");
        self.page = page;
    }

    fn show_result(&mut self, outcome: SubmissionOutcome) {
        debug!(outcome = outcome.tag(), "Showing result");
        self.outcome = Some(outcome);
        self.navigate(Page::StatusResult);
    }
}

/// What to draw for the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Home,
    QuizApply,
    CompApply,
    StatusQuery,
    StatusResult(ResultView),
    AdminLogin,
    /// Admin content; carries the token the dashboard fetches with.
    AdminDashboard { token: String },
    /// Nothing to render, e.g. the dashboard page without a session.
    Blank,
}

/// Owns the page, the current outcome and the admin session.
///
/// All transitions go through this type. Pipelines take `&self`, so several
/// may be in flight at once; each applies its result when its request
/// resolves, and the last one to resolve decides what is shown. The view
/// state is only locked to apply a result, never across network or storage
/// I/O.
pub struct ViewController {
    api: Arc<dyn ReviewApi>,
    state: Mutex<ViewState>,
    gate: SessionGate,
    notifier: Notifier,
}

impl ViewController {
    /// Start on the home page, restoring any persisted admin session.
    pub async fn new(
        api: Arc<dyn ReviewApi>,
        store: Arc<dyn SessionStore>,
        notice_window: Duration,
    ) -> Self {
        Self {
            api,
            state: Mutex::new(ViewState {
                page: Page::Home,
                outcome: None,
            }),
            gate: SessionGate::restore(store).await,
            notifier: Notifier::new(notice_window),
        }
    }

    pub fn api(&self) -> Arc<dyn ReviewApi> {
        Arc::clone(&self.api)
    }

    pub async fn current_page(&self) -> Page {
        self.state.lock().await.page
    }

    pub async fn outcome(&self) -> Option<SubmissionOutcome> {
        self.state.lock().await.outcome.clone()
    }

    pub async fn session(&self) -> AdminSession {
        self.gate.session().await
    }

    pub async fn is_authenticated(&self) -> bool {
        self.gate.is_authenticated().await
    }

    pub async fn notice(&self) -> Option<Notice> {
        self.notifier.current().await
    }

    /// Hide the visible notice once it has been shown.
    pub async fn dismiss_notice(&self) {
        self.notifier.dismiss().await;
    }

    /// Navigation bar entries. The dashboard is listed only while signed in.
    pub async fn nav_items(&self) -> Vec<Page> {
        let mut items = Page::PUBLIC_NAV.to_vec();
        if self.is_authenticated().await {
            items.push(Page::AdminDashboard);
        }
        items
    }

    pub async fn screen(&self) -> Screen {
        let state = self.state.lock().await;
        match state.page {
            Page::Home => Screen::Home,
            Page::QuizApply => Screen::QuizApply,
            Page::CompApply => Screen::CompApply,
            Page::StatusQuery => Screen::StatusQuery,
            Page::StatusResult => match &state.outcome {
                Some(outcome) => Screen::StatusResult(present(outcome)),
                None => Screen::Blank,
            },
            Page::AdminLogin => Screen::AdminLogin,
            Page::AdminDashboard => match self.gate.token().await {
                Some(token) => Screen::AdminDashboard { token },
                None => Screen::Blank,
            },
        }
    }

    /// Switch pages. Leaving for any page other than the result page drops
    /// the current outcome; entering the result page without one goes home.
    pub async fn navigate(&self, page: Page) {
        self.state.lock().await.navigate(page);
    }

    pub async fn set_outcome(&self, outcome: SubmissionOutcome) {
        self.state.lock().await.outcome = Some(outcome);
    }

    /// Replace the admin session. `None` signs out without navigating.
    pub async fn set_session(&self, token: Option<String>) -> Result<()> {
        match token {
            Some(token) => self.gate.establish(token).await?,
            None => self.gate.clear().await?,
        }
        Ok(())
    }

    /// Submit an application and show the result page either way.
    #[instrument(skip(self, application), fields(endpoint = %application.endpoint()))]
    pub async fn submit(&self, application: Application) {
        let outcome = match self.api.apply(&application).await {
            Ok(receipt) => {
                info!(id = %receipt.id, "Application submitted");
                SubmissionOutcome::Success { id: receipt.id }
            }
            Err(e) => {
                warn!(error = %e, "Application submission failed");
                SubmissionOutcome::Error
            }
        };
        self.state.lock().await.show_result(outcome);
    }

    /// Look up an application and show the result page either way.
    #[instrument(skip(self))]
    pub async fn query(&self, id: &str) {
        let outcome = match self.api.status(id).await {
            Ok(data) => SubmissionOutcome::QuerySuccess {
                id: data.id.clone(),
                data,
            },
            Err(e) => {
                warn!(error = %e, "Status query failed");
                SubmissionOutcome::QueryError
            }
        };
        self.state.lock().await.show_result(outcome);
    }

    /// Log in as admin. Failure leaves the page as is and only shows a notice.
    #[instrument(skip(self, password))]
    pub async fn admin_login(&self, password: &str) {
        let request = LoginRequest {
            password: password.to_string(),
        };
        match self.api.login(&request).await {
            Ok(response) => {
                if let Err(e) = self.gate.establish(response.session_key).await {
                    error!(error = %e, "Failed to persist admin session");
                }
                self.state.lock().await.navigate(Page::AdminDashboard);
                info!("Admin logged in");
                self.notifier.show(LOGIN_SUCCEEDED).await;
            }
            Err(e) => {
                warn!(error = %e, "Admin login failed");
                self.notifier.show(LOGIN_FAILED).await;
            }
        }
    }

    /// Sign out: clear the stored token, reset the flag and go home.
    ///
    /// The in-memory session and page change even if clearing storage fails;
    /// that failure is returned as [`crate::ClientError::Storage`].
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<()> {
        let cleared = self.gate.clear().await;
        self.state.lock().await.navigate(Page::Home);
        if let Err(e) = &cleared {
            error!(error = %e, "Failed to clear stored admin session");
        }
        self.notifier.show(SIGNED_OUT).await;
        Ok(cleared?)
    }

    /// Hidden shortcut to the admin login page.
    pub async fn open_admin_login(&self) {
        self.navigate(Page::AdminLogin).await;
        self.notifier.show(ENTERING_ADMIN_LOGIN).await;
    }

    /// Mount the dashboard for the current session. `None` without a session.
    pub async fn mount_dashboard(&self) -> Option<AdminDashboard> {
        let token = self.gate.token().await?;
        Some(AdminDashboard::mount(self.api(), token))
    }
}
