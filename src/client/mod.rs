// Gateway module for client - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod api;
mod http;
mod traits;
mod types;

// Public re-exports - the ONLY way to access client functionality
pub use api::DeepClaw;
pub use http::HttpTransport;
pub use traits::Transport;
pub use types::{ApiRequest, HttpMethod, Vote};

#[cfg(test)]
pub use traits::MockTransport;
