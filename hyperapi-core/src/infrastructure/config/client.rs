// hyperapi-core/src/infrastructure/config/client.rs

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use validator::Validate;

use crate::infrastructure::error::InfrastructureError;

#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
pub struct ClientConfig {
    #[validate(url(message = "base_url must be an absolute url"))]
    pub base_url: String,

    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,

    // Bearer token, usually injected via HYPERAPI_TOKEN
    #[serde(default, skip_serializing)]
    pub token: Option<String>,

    /// Server version, when known. Resources missing on that version are refused.
    #[serde(default)]
    pub api_version: Option<String>,

    #[serde(default = "default_timeout_secs")]
    #[validate(range(min = 1, message = "timeout_secs must be positive"))]
    pub timeout_secs: u64,

    #[serde(default)]
    #[validate(nested)]
    pub work_status: WorkStatusConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
pub struct WorkStatusConfig {
    #[serde(default = "default_poll_interval_ms")]
    #[validate(range(min = 1))]
    pub poll_interval_ms: u64,

    #[serde(default = "default_work_timeout_secs")]
    #[validate(range(min = 1))]
    pub timeout_secs: u64,
}

impl Default for WorkStatusConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            timeout_secs: default_work_timeout_secs(),
        }
    }
}

fn default_api_prefix() -> String {
    "/hdp/rest/v1".to_string()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_poll_interval_ms() -> u64 {
    2000
}
fn default_work_timeout_secs() -> u64 {
    3600
}

impl ClientConfig {
    /// Configuration without a file: defaults everywhere but the url.
    pub fn from_url(base_url: &str) -> Result<Self, InfrastructureError> {
        let config = Self {
            base_url: base_url.to_string(),
            api_prefix: default_api_prefix(),
            token: None,
            api_version: None,
            timeout_secs: default_timeout_secs(),
            work_status: WorkStatusConfig::default(),
        };
        config.check()?;
        Ok(config)
    }

    pub fn check(&self) -> Result<(), InfrastructureError> {
        self.validate()
            .map_err(|e| InfrastructureError::ConfigError(e.to_string()))
    }
}

// --- LOADER ---

#[instrument]
pub fn load_client_config(config_dir: &Path) -> Result<ClientConfig, InfrastructureError> {
    let config_path = find_config(config_dir)?;
    info!(path = ?config_path, "Loading client configuration");

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read client config at {:?}", config_path))?;
    let mut config: ClientConfig = serde_yaml::from_str(&content)?;

    // Override via Variables d'Environnement (Pattern 'Layering')
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    config.check()?;
    Ok(config)
}

fn find_config(root: &Path) -> Result<PathBuf, InfrastructureError> {
    let candidates = ["hyperapi.yaml", "hyperapi.yml"];
    for filename in candidates {
        let p = root.join(filename);
        if p.exists() {
            return Ok(p);
        }
    }
    Err(InfrastructureError::ConfigNotFound(format!(
        "No configuration file found in {:?}. Checked: {:?}",
        root, candidates
    )))
}

fn apply_env_overrides(config: &mut ClientConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(val) = lookup("HYPERAPI_URL") {
        info!(old = ?config.base_url, new = ?val, "Overriding base url via ENV");
        config.base_url = val;
    }
    if let Some(val) = lookup("HYPERAPI_TOKEN") {
        info!("Overriding token via ENV");
        config.token = Some(val);
    }
}
