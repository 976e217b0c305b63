// hyperapi-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- HTTP ---
    #[error("HTTP Transport Error: {0}")]
    #[diagnostic(
        code(hyperapi::infra::http),
        help("Check the API url and your network connectivity.")
    )]
    Http(#[from] reqwest::Error),

    // --- JSON ---
    #[error("JSON Error: {0}")]
    #[diagnostic(code(hyperapi::infra::json))]
    Json(#[from] serde_json::Error),

    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(hyperapi::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(hyperapi::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Configuration Error: {0}")]
    #[diagnostic(code(hyperapi::infra::config))]
    ConfigError(String),

    #[error("Client configuration not found at '{0}'")]
    #[diagnostic(code(hyperapi::infra::config_missing))]
    ConfigNotFound(String),

    #[error(transparent)]
    #[diagnostic(code(hyperapi::infra::other))]
    Other(#[from] anyhow::Error),
}
