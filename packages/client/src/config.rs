use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

use crate::error::Result;

/// Remote API settings.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds. Default: 15.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://hackerapi.mr-onion-blog.fun/api".into()
}
fn default_timeout_secs() -> u64 {
    15
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Where the admin session token is persisted.
#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    #[serde(default = "default_session_path")]
    pub path: PathBuf,
}

fn default_session_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("openrev")
        .join("session.json")
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            path: default_session_path(),
        }
    }
}

/// Transient notice settings.
#[derive(Debug, Deserialize, Clone)]
pub struct NoticeConfig {
    /// How long a notice stays visible. Default: 3000.
    #[serde(default = "default_dismiss_ms")]
    pub dismiss_ms: u64,
}

fn default_dismiss_ms() -> u64 {
    3000
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            dismiss_ms: default_dismiss_ms(),
        }
    }
}

/// Client application configuration.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub notice: NoticeConfig,
}

impl ClientConfig {
    pub fn load() -> Result<Self> {
        let config_path =
            std::env::var("OPENREV_CONFIG").unwrap_or_else(|_| "config/config".to_string());
        Self::load_from(&config_path)
    }

    /// Load from `path` (extension optional), then apply `OPENREV__*` overrides.
    ///
    /// Failures surface as [`crate::ClientError::Config`].
    pub fn load_from(path: &str) -> Result<Self> {
        let s = Config::builder()
            .set_default("api.base_url", default_base_url())?
            .set_default("api.timeout_secs", default_timeout_secs() as i64)?
            .set_default("notice.dismiss_ms", default_dismiss_ms() as i64)?
            .add_source(File::with_name(path).required(false))
            // e.g. OPENREV__API__BASE_URL
            .add_source(Environment::with_prefix("OPENREV").separator("__"))
            .build()?;

        Ok(s.try_deserialize()?)
    }
}
