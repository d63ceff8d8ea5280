//! `load_config` module: builds the [`ApiConfig`] from an optional YAML file plus environment overrides.
//!
//! # Sources, in increasing precedence
//! 1. Built-in defaults ([`ApiConfig::default`])
//! 2. The YAML file passed with `--config`, if any
//! 3. `CONTENT_API_BASE_URL` from the environment (or `.env`)
//!
//! Accepted YAML:
//!
//! ```yaml
//! api:
//!   base_url: http://localhost:8080
//!   timeout_secs: 30
//! ```
//!
//! # Errors
//! Unreadable or malformed files and an empty base URL are reported as
//! `anyhow::Error` with the offending path in the message.
use anyhow::{bail, Result};
use content_batch_core::config::ApiConfig;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{error, info};

pub const BASE_URL_ENV: &str = "CONTENT_API_BASE_URL";

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    api: ApiSection,
}

#[derive(Debug, Default, Deserialize)]
struct ApiSection {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

pub fn load_config(path: Option<&Path>) -> Result<ApiConfig> {
    let mut config = ApiConfig::default();

    if let Some(path_ref) = path {
        info!(config_path = ?path_ref, "Loading configuration from file");
        let config_content = match fs::read_to_string(path_ref) {
            Ok(content) => content,
            Err(e) => {
                error!(error = ?e, config_path = ?path_ref, "Failed to read config file");
                return Err(anyhow::anyhow!(
                    "Failed to read config file {:?}: {}",
                    path_ref,
                    e
                ));
            }
        };

        let raw: RawConfig = match serde_yaml::from_str(&config_content) {
            Ok(conf) => {
                info!(config_path = ?path_ref, "Parsed config YAML successfully");
                conf
            }
            Err(e) => {
                error!(error = ?e, config_path = ?path_ref, "Failed to parse config YAML");
                return Err(anyhow::anyhow!("Failed to parse config YAML: {e}"));
            }
        };

        if let Some(base_url) = raw.api.base_url {
            config.base_url = base_url;
        }
        config.timeout_secs = raw.api.timeout_secs;
    }

    if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
        info!(env = BASE_URL_ENV, "Base URL overridden from environment");
        config.base_url = base_url;
    }

    config.base_url = config.base_url.trim().trim_end_matches('/').to_string();
    if config.base_url.is_empty() {
        error!("Content API base URL is empty");
        bail!("Content API base URL must not be empty");
    }

    config.trace_loaded();
    Ok(config)
}
