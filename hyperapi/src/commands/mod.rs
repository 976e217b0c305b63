// hyperapi/src/commands/mod.rs

pub mod create;
pub mod generated;
pub mod get;
pub mod list;
pub mod publish;
pub mod routes;

use anyhow::Context;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

use hyperapi_core::HyperApiClient;
use hyperapi_core::infrastructure::config::{ClientConfig, load_client_config};
use hyperapi_core::infrastructure::error::InfrastructureError;

use crate::cli::ConnectionArgs;

/// Flags win over the configuration file.
pub fn resolve_config(args: &ConnectionArgs) -> anyhow::Result<ClientConfig> {
    let mut config = match (&args.config_dir, &args.url) {
        (Some(dir), _) => load_client_config(dir)
            .with_context(|| format!("Failed to load client configuration from {:?}", dir))?,
        (None, Some(url)) => ClientConfig::from_url(url)?,
        (None, None) => load_client_config(Path::new("."))
            .context("No --url given: failed to load hyperapi.yaml from the current directory")?,
    };

    if let Some(url) = &args.url {
        config.base_url = url.clone();
    }
    if let Some(token) = &args.token {
        config.token = Some(token.clone());
    }
    config.check()?;
    debug!(url = %config.base_url, api_version = ?config.api_version, "Client configuration resolved");
    Ok(config)
}

/// Same as `resolve_config`, except that having no configuration at all
/// (no flags, no file in the current directory) yields `None`.
/// A file that exists but is invalid is still an error.
pub fn resolve_optional_config(args: &ConnectionArgs) -> anyhow::Result<Option<ClientConfig>> {
    match resolve_config(args) {
        Ok(config) => Ok(Some(config)),
        Err(e) if args.config_dir.is_none() && is_config_not_found(&e) => Ok(None),
        Err(e) => Err(e),
    }
}

fn is_config_not_found(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<InfrastructureError>(),
        Some(InfrastructureError::ConfigNotFound(_))
    )
}

pub fn connect(args: &ConnectionArgs) -> anyhow::Result<HyperApiClient> {
    let config = resolve_config(args)?;
    Ok(HyperApiClient::connect(&config)?)
}

pub fn print_json(value: &Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
