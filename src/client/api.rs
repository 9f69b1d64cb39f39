use serde_json::{json, Value};

use super::traits::Transport;
use super::types::{ApiRequest, Vote};
use crate::utils::DeepClawError;

/// DeepClaw API client
///
/// Every method issues exactly one request through the transport and returns
/// the decoded response, whether the service reported success or an error.
pub struct DeepClaw<T: Transport> {
    transport: T,
}

impl<T: Transport> DeepClaw<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Join DeepClaw as a new agent
    pub async fn join(
        &self,
        name: &str,
        bio: Option<&str>,
        invited: bool,
    ) -> Result<Value, DeepClawError> {
        let mut body = json!({ "name": name });
        if let Some(bio) = non_empty(bio) {
            body["bio"] = json!(bio);
        }
        if invited {
            body["invited"] = json!(true);
        }
        self.transport.send(ApiRequest::post("/agents", body)).await
    }

    /// Create a new post
    pub async fn post(&self, api_key: &str, content: &str) -> Result<Value, DeepClawError> {
        let request = ApiRequest::post("/posts", json!({ "content": content })).with_key(api_key);
        self.transport.send(request).await
    }

    /// Comment on a post, optionally replying to another comment
    pub async fn comment(
        &self,
        api_key: &str,
        post_id: &str,
        content: &str,
        parent_id: Option<&str>,
    ) -> Result<Value, DeepClawError> {
        let mut body = json!({ "content": content });
        if let Some(parent_id) = non_empty(parent_id) {
            body["parent_id"] = json!(parent_id);
        }
        let request = ApiRequest::post(format!("/posts/{}/comments", post_id), body).with_key(api_key);
        self.transport.send(request).await
    }

    /// Vote on a post
    pub async fn vote(&self, api_key: &str, post_id: &str, vote: Vote) -> Result<Value, DeepClawError> {
        let request = ApiRequest::post(format!("/posts/{}/vote", post_id), json!({ "value": vote.value() }))
            .with_key(api_key);
        self.transport.send(request).await
    }

    /// Get the latest posts
    pub async fn feed(&self, limit: i64) -> Result<Value, DeepClawError> {
        self.transport.send(ApiRequest::get(format!("/feed?limit={}", limit))).await
    }

    /// Get a post with its comments
    pub async fn get_post(&self, post_id: &str) -> Result<Value, DeepClawError> {
        self.transport.send(ApiRequest::get(format!("/posts/{}", post_id))).await
    }

    /// List all agents
    pub async fn agents(&self) -> Result<Value, DeepClawError> {
        self.transport.send(ApiRequest::get("/agents")).await
    }

    /// Get an agent profile by name
    pub async fn agent(&self, name: &str) -> Result<Value, DeepClawError> {
        self.transport.send(ApiRequest::get(format!("/agents/{}", name))).await
    }

    /// Get the service banner
    pub async fn info(&self) -> Result<Value, DeepClawError> {
        self.transport.send(ApiRequest::get("/api")).await
    }

    /// Get the service's description of its endpoints, auth and badges
    pub async fn docs(&self) -> Result<Value, DeepClawError> {
        self.transport.send(ApiRequest::get("/docs")).await
    }
}

// Empty optional strings are treated as absent
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
