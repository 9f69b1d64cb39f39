use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use super::traits::Transport;
use super::types::ApiRequest;
use crate::app::Config;
use crate::constants::{API_KEY_HEADER, HTTP_REQUEST_TIMEOUT_SECS};
use crate::utils::DeepClawError;

/// HTTP transport talking to a DeepClaw server over reqwest
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport for the given base URL
    pub fn new(base_url: &str) -> Result<Self, DeepClawError> {
        Ok(Self {
            client: Client::builder()
                .timeout(Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS))
                .build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, DeepClawError> {
        Self::new(&config.url)
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, DeepClawError> {
        let url = self.url_for(&request.path);
        debug!(method = request.method.as_str(), %url, "sending request");

        let mut builder = self
            .client
            .request(request.method.into(), &url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(key) = &request.api_key {
            builder = builder.header(API_KEY_HEADER, key);
        }

        if let Some(body) = &request.body {
            let bytes = serde_json::to_vec(body).map_err(DeepClawError::EncodeError)?;
            builder = builder.body(bytes);
        }

        let response = builder.send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), "received response");

        // Error statuses carry JSON bodies too; decode both the same way
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|source| DeepClawError::DecodeError {
            status: status.as_u16(),
            source,
        })
    }
}
