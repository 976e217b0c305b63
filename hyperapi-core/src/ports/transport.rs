// hyperapi-core/src/ports/transport.rs

// What the dispatcher needs from the network: send one request, get a status
// and a decoded body back. Authentication and base url live in the adapter.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::routes::HttpMethod;
use crate::error::ClientError;

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    /// Decoded JSON, `Null` for an empty body.
    pub body: Value,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// `path` is already rendered and validated, relative to the API root.
    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
    ) -> Result<HttpResponse, ClientError>;
}
