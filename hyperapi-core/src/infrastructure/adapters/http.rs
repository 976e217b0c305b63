// hyperapi-core/src/infrastructure/adapters/http.rs

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

// Imports Hexagonaux
use crate::domain::routes::HttpMethod;
use crate::error::ClientError;
use crate::infrastructure::config::ClientConfig;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::transport::{HttpResponse, HttpTransport};

pub struct ReqwestTransport {
    client: Client,
    api_root: String,
    token: Option<String>,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, InfrastructureError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_root: api_root(&config.base_url, &config.api_prefix),
            token: config.token.clone(),
        })
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.api_root, path.trim_start_matches('/'))
    }
}

fn api_root(base_url: &str, api_prefix: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let prefix = api_prefix.trim_matches('/');
    if prefix.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, prefix)
    }
}

fn to_reqwest(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// Error pages are not always JSON: keep their text so the caller can report it.
fn decode_body(status: u16, text: String) -> Result<Value, InfrastructureError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    match serde_json::from_str(&text) {
        Ok(value) => Ok(value),
        Err(_) if !(200..300).contains(&status) => Ok(Value::String(text)),
        Err(e) => Err(InfrastructureError::Json(e)),
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
    ) -> Result<HttpResponse, ClientError> {
        let url = self.url_for(path);
        let mut request = self.client.request(to_reqwest(method), &url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        debug!(%url, status, bytes = text.len(), "HTTP exchange done");

        Ok(HttpResponse {
            status,
            body: decode_body(status, text)?,
        })
    }
}
