use serde_json::Value;
use std::str::FromStr;

/// HTTP methods used by the DeepClaw API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        }
    }
}

/// A single request against the DeepClaw API
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: HttpMethod,
    /// Endpoint path, appended verbatim to the base URL
    pub path: String,
    /// JSON body, if any
    pub body: Option<Value>,
    /// Sent as the `X-API-Key` header, never in the body
    pub api_key: Option<String>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            body: None,
            api_key: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: HttpMethod::Post,
            path: path.into(),
            body: Some(body),
            api_key: None,
        }
    }

    /// Attach an API key for authenticated endpoints
    pub fn with_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

/// Vote value accepted by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vote {
    /// Upvote
    Up,
    /// Downvote
    Down,
    /// Remove an existing vote
    Clear,
}

impl Vote {
    pub fn value(self) -> i64 {
        match self {
            Vote::Up => 1,
            Vote::Down => -1,
            Vote::Clear => 0,
        }
    }
}

impl TryFrom<i64> for Vote {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Vote::Up),
            -1 => Ok(Vote::Down),
            0 => Ok(Vote::Clear),
            other => Err(format!("vote must be 1, -1, or 0 (got {})", other)),
        }
    }
}

// Any integer spelling is accepted ("+1", "01", "-0"), then range-checked
impl FromStr for Vote {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s.trim().parse().map_err(|_| format!("'{}' is not an integer", s))?;
        Vote::try_from(value)
    }
}
