use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_FILE_NAME, DEFAULT_BASE_URL, ENV_PREFIX, LOCAL_CONFIG_PATH};
use crate::utils::DeepClawError;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the DeepClaw service
    #[serde(default = "default_url")]
    pub url: String,
}

fn default_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self { url: default_url() }
    }
}

/// Load configuration from multiple sources
///
/// Later sources win: defaults, the global config file, the project
/// `.deepclaw/config.toml`, an explicit `--config` file, then `DEEPCLAW_URL`.
/// Missing global and project files are skipped; a missing explicit file is
/// an error.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, DeepClawError> {
    let mut files = Vec::new();

    if let Some(global_config) = global_config_path().filter(|p| p.exists()) {
        files.push(global_config);
    }

    let local_config = PathBuf::from(LOCAL_CONFIG_PATH);
    if local_config.exists() {
        files.push(local_config);
    }

    if let Some(path) = explicit {
        if !path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("config file not found: {}", path.display()),
            )
            .into());
        }
        files.push(path.to_path_buf());
    }

    Ok(config_figment(&files).extract()?)
}

/// Build the layered figment over the given TOML files, in order
pub fn config_figment(files: &[PathBuf]) -> Figment {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    for file in files {
        figment = figment.merge(Toml::file(file));
    }

    // Only DEEPCLAW_URL is read from the environment
    figment.merge(Env::prefixed(ENV_PREFIX).only(&["url"]))
}

/// Path of the per-user configuration file, if a config directory exists
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "deepclaw").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
