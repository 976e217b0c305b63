// hyperapi-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    // --- ERREURS DU DOMAINE (Routes, Validation, Payload) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- ERREURS D'INFRASTRUCTURE (HTTP, IO, Parsing) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    // --- ERREURS DE L'API DISTANTE ---
    #[error("{}", render_api_error(.status, .message, .detail))]
    Api {
        status: Option<u16>,
        message: String,
        detail: Option<String>,
    },
}

impl ClientError {
    pub fn api(message: impl Into<String>, detail: impl Into<String>) -> Self {
        ClientError::Api {
            status: None,
            message: message.into(),
            detail: Some(detail.into()),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Domain(DomainError::Validation { .. }))
    }
}

fn render_api_error(status: &Option<u16>, message: &str, detail: &Option<String>) -> String {
    let mut out = match status {
        Some(code) => format!("API Error ({}): {}", code, message),
        None => format!("API Error: {}", message),
    };
    if let Some(detail) = detail {
        out.push_str(" - ");
        out.push_str(detail);
    }
    out
}

// Manual implementation to avoid duplicate enum variant but keep ergonomics
impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::Infrastructure(InfrastructureError::Io(err))
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Infrastructure(InfrastructureError::Json(err))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Infrastructure(InfrastructureError::Http(err))
    }
}
