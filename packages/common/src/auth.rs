use serde::{Deserialize, Serialize};
use std::fmt;

/// Request body for `POST /admin/login`.
#[derive(Clone, Serialize)]
pub struct LoginRequest {
    pub password: String,
}

// Keep the password out of logs and panic messages.
impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful admin login response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque session token, presented later as a bearer credential.
    #[serde(rename = "sessionKey")]
    pub session_key: String,
}
