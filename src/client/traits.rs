use async_trait::async_trait;
use serde_json::Value;

use super::types::ApiRequest;
use crate::utils::DeepClawError;

/// Core trait for anything that can carry an API request to the service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one request and return the decoded JSON body
    ///
    /// HTTP error statuses are not errors here: their JSON bodies come back
    /// through the same path as successful ones.
    async fn send(&self, request: ApiRequest) -> Result<Value, DeepClawError>;
}
