pub mod app;
pub mod cli;
pub mod client;
pub mod constants;
pub mod utils;

pub use app::{load_config, Config};
pub use client::{ApiRequest, DeepClaw, HttpTransport, Transport, Vote};
pub use utils::DeepClawError;
