use std::time::Duration;

use async_trait::async_trait;
use common::{Application, ApplicationRecord, LoginRequest, LoginResponse, SubmitReceipt};
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::{ClientError, Result};

/// The remote review API, one method per endpoint.
///
/// Any non-2xx response is a failure regardless of its body.
#[async_trait]
pub trait ReviewApi: Send + Sync {
    /// `POST /apply-quiz` or `POST /apply-comp`, depending on the application.
    async fn apply(&self, application: &Application) -> Result<SubmitReceipt>;

    /// `GET /status/{id}`.
    async fn status(&self, id: &str) -> Result<ApplicationRecord>;

    /// `POST /admin/login`.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse>;

    /// `GET /admin/applications` with the token as a bearer credential.
    ///
    /// 401 and 403 map to [`ClientError::AuthExpired`].
    async fn applications(&self, token: &str) -> Result<Vec<ApplicationRecord>>;
}

/// [`ReviewApi`] over HTTP/JSON.
#[derive(Clone)]
pub struct HttpReviewApi {
    client: Client,
    base_url: Url,
}

impl HttpReviewApi {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url =
            Url::parse(&config.base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(config.base_url.clone()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Append path segments to the base URL. Each segment is percent-encoded.
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Fail on non-2xx, otherwise decode the JSON body.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::Status(status.as_u16()));
    }
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

#[async_trait]
impl ReviewApi for HttpReviewApi {
    async fn apply(&self, application: &Application) -> Result<SubmitReceipt> {
        let path = application.endpoint().path();
        let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
        let url = self.url(&segments)?;
        debug!(%url, "Submitting application");

        let response = self.client.post(url).json(application).send().await?;
        read_json(response).await
    }

    async fn status(&self, id: &str) -> Result<ApplicationRecord> {
        let url = self.url(&["status", id])?;
        debug!(%url, "Querying application status");

        let response = self.client.get(url).send().await?;
        read_json(response).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        let url = self.url(&["admin", "login"])?;

        let response = self.client.post(url).json(request).send().await?;
        read_json(response).await
    }

    async fn applications(&self, token: &str) -> Result<Vec<ApplicationRecord>> {
        let url = self.url(&["admin", "applications"])?;

        let response = self.client.get(url).bearer_auth(token).send().await?;
        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(ClientError::AuthExpired(response.status().as_u16()))
            }
            _ => read_json(response).await,
        }
    }
}
