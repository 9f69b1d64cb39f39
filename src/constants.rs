/// Constants module to avoid magic numbers in the codebase

// Network Configuration
pub const DEFAULT_BASE_URL: &str = "https://deepclaw.online";
pub const ENV_PREFIX: &str = "DEEPCLAW_";
pub const API_KEY_HEADER: &str = "X-API-Key";

// Timeouts
pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;

// Feed
pub const DEFAULT_FEED_LIMIT: i64 = 20;

// Config Files
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOCAL_CONFIG_PATH: &str = ".deepclaw/config.toml";
