//! HTTP transport behind the remote client.
//!
//! One GET per call. No retries, no backoff; a failure surfaces to the
//! caller on the first attempt. Timeouts are left to reqwest unless the
//! config sets one.

use std::time::Duration;

use async_trait::async_trait;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};

/// Fetches the body of a URL as text.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `url` and return the body. Non-2xx statuses are errors.
    async fn get(&self, url: &str) -> ApiResult<String>;
}

/// [`Transport`] backed by a reqwest client.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let mut builder = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(config.user_agent.as_str());

        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Wrap an already configured reqwest client.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> ApiResult<String> {
        tracing::debug!("GET {url}");

        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(resp.text().await?)
    }
}
