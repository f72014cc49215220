mod schema;

pub use schema::Config;

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::github::DEFAULT_API_URL;

/// Repository reported on when neither `--repo` nor the config names one
pub const DEFAULT_REPO: &str = "All-Hands-AI/OpenHands";

/// Environment variable overriding the REST API base URL
pub const ENV_API_URL_VAR: &str = "GITHUB_API_URL";

/// Get the config directory path (~/.config/review-backlog/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("review-backlog"))
}

/// Get the default config file path (~/.config/review-backlog/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///
/// A missing file is not an error: the tool works without any config and
/// falls back to [`Config::default`].
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or is not valid YAML.
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let Some(config_path) = path.or_else(get_config_path) else {
        return Ok(Config::default());
    };

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!(
            "Failed to parse config: invalid YAML in {}",
            config_path.display()
        )
    })?;

    Ok(config)
}

impl Config {
    /// `--repo` wins over the config file, which wins over [`DEFAULT_REPO`]
    pub fn resolve_repo(&self, cli_repo: Option<&str>) -> String {
        cli_repo
            .or(self.repo.as_deref())
            .unwrap_or(DEFAULT_REPO)
            .to_string()
    }

    /// `GITHUB_API_URL` wins over the config file, which wins over the public API
    pub fn resolve_api_url(&self) -> String {
        self.api_url_with_env(std::env::var(ENV_API_URL_VAR).ok())
    }

    fn api_url_with_env(&self, env_url: Option<String>) -> String {
        env_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .or_else(|| self.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string()
    }
}
