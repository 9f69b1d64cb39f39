use thiserror::Error;

/// Main error type for DeepClaw
#[derive(Error, Debug)]
pub enum DeepClawError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid JSON response (HTTP {status}): {source}")]
    DecodeError {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode request body: {0}")]
    EncodeError(#[source] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] Box<figment::Error>),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<figment::Error> for DeepClawError {
    fn from(err: figment::Error) -> Self {
        Self::ConfigError(Box::new(err))
    }
}
