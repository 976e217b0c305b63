// hyperapi-core/src/application/dispatcher.rs

use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::domain::routes::RouteRegistry;
use crate::error::ClientError;
use crate::ports::transport::{HttpResponse, HttpTransport};

/// Resolves a route by name, validates and renders its path, then calls the
/// transport. No retries here.
#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<RouteRegistry>,
    transport: Arc<dyn HttpTransport>,
}

impl Dispatcher {
    pub fn new(registry: RouteRegistry, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            registry: Arc::new(registry),
            transport,
        }
    }

    pub fn registry(&self) -> &RouteRegistry {
        &self.registry
    }

    #[instrument(skip(self, path_args, body))]
    pub async fn dispatch(
        &self,
        route_name: &str,
        path_args: &[(&str, &str)],
        body: Option<&Value>,
    ) -> Result<Value, ClientError> {
        let route = self.registry.lookup(route_name)?;
        // Validation happens here, before anything reaches the wire
        let path = route.render(path_args)?;

        let body = match body {
            Some(_) if !route.method().accepts_body() => {
                warn!(method = %route.method(), "Ignoring request body");
                None
            }
            other => other,
        };

        debug!(method = %route.method(), %path, "➡️  Calling API");
        let response = self.transport.send(route.method(), &path, body).await?;
        debug!(status = response.status, "⬅️  API answered");

        if !response.is_success() {
            return Err(api_error(response));
        }
        Ok(response.body)
    }
}

fn api_error(response: HttpResponse) -> ClientError {
    let message = ["message", "error", "detail"]
        .iter()
        .find_map(|key| response.body.get(*key).and_then(Value::as_str))
        .map(str::to_string);

    let (message, detail) = match (message, response.body) {
        (Some(message), Value::Null) => (message, None),
        (Some(message), body) => (message, Some(body.to_string())),
        (None, Value::String(text)) => (text, None),
        (None, Value::Null) => ("Request failed".to_string(), None),
        (None, body) => ("Request failed".to_string(), Some(body.to_string())),
    };

    ClientError::Api {
        status: Some(response.status),
        message,
        detail,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::domain::routes::HttpMethod;
    use anyhow::Result;
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    pub const PROJECT: &str = "5b9f6e2a1c9d440000a1b2c3";
    pub const MODEL: &str = "5e2c9b5d4fa0770000d4e5f6";

    #[derive(Debug, Clone, PartialEq)]
    pub struct RecordedCall {
        pub method: HttpMethod,
        pub path: String,
        pub body: Option<Value>,
    }

    // --- MOCK TRANSPORT ---
    /// Replays queued responses (200 + `{}` once exhausted) and records calls.
    #[derive(Clone, Default)]
    pub struct MockTransport {
        pub calls: Arc<Mutex<Vec<RecordedCall>>>,
        pub responses: Arc<Mutex<VecDeque<HttpResponse>>>,
    }

    impl MockTransport {
        pub fn with_responses(responses: Vec<HttpResponse>) -> Self {
            Self {
                calls: Arc::default(),
                responses: Arc::new(Mutex::new(responses.into())),
            }
        }

        pub fn calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl HttpTransport for MockTransport {
        async fn send(
            &self,
            method: HttpMethod,
            path: &str,
            body: Option<&Value>,
        ) -> Result<HttpResponse, ClientError> {
            self.calls.lock().unwrap().push(RecordedCall {
                method,
                path: path.to_string(),
                body: body.cloned(),
            });
            Ok(self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(HttpResponse {
                    status: 200,
                    body: json!({}),
                }))
        }
    }

    pub fn ok(body: Value) -> HttpResponse {
        HttpResponse { status: 200, body }
    }

    pub fn dispatcher(transport: &MockTransport) -> Result<Dispatcher> {
        Ok(Dispatcher::new(
            RouteRegistry::standard(None)?,
            Arc::new(transport.clone()),
        ))
    }

    #[tokio::test]
    async fn test_dispatch_renders_path_and_returns_body() -> Result<()> {
        let transport = MockTransport::with_responses(vec![ok(json!([{"_id": MODEL}]))]);
        let dispatcher = dispatcher(&transport)?;

        let body = dispatcher
            .dispatch("getAutomatedModels", &[("project_ID", PROJECT)], None)
            .await?;

        assert_eq!(body, json!([{"_id": MODEL}]));
        assert_eq!(
            transport.calls(),
            vec![RecordedCall {
                method: HttpMethod::Get,
                path: format!("/projects/{}/automodels", PROJECT),
                body: None,
            }]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_parameter_never_reaches_transport() -> Result<()> {
        let transport = MockTransport::default();
        let dispatcher = dispatcher(&transport)?;

        let err = dispatcher
            .dispatch(
                "getAutomatedModel",
                &[("project_ID", PROJECT), ("model_ID", "../../users")],
                None,
            )
            .await
            .unwrap_err();

        assert!(err.is_validation());
        assert!(transport.calls().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_route() -> Result<()> {
        let transport = MockTransport::default();
        let err = dispatcher(&transport)?
            .dispatch("dropProject", &[], None)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::Domain(DomainError::RouteNotFound(_))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_post_carries_body_and_get_does_not() -> Result<()> {
        let transport = MockTransport::default();
        let dispatcher = dispatcher(&transport)?;
        let payload = json!({"modelName": "m"});

        dispatcher
            .dispatch("createAutomatedModel", &[("project_ID", PROJECT)], Some(&payload))
            .await?;
        dispatcher
            .dispatch("getAutomatedModels", &[("project_ID", PROJECT)], Some(&payload))
            .await?;

        let calls = transport.calls();
        assert_eq!(calls[0].method, HttpMethod::Post);
        assert_eq!(calls[0].body, Some(payload));
        assert_eq!(calls[1].body, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_non_2xx_becomes_api_error() -> Result<()> {
        let transport = MockTransport::with_responses(vec![HttpResponse {
            status: 403,
            body: json!({"message": "Forbidden project"}),
        }]);
        let err = dispatcher(&transport)?
            .dispatch("getAutomatedModels", &[("project_ID", PROJECT)], None)
            .await
            .unwrap_err();

        match err {
            ClientError::Api {
                status, message, ..
            } => {
                assert_eq!(status, Some(403));
                assert_eq!(message, "Forbidden project");
            }
            other => panic!("unexpected error: {}", other),
        }
        Ok(())
    }

    #[test]
    fn test_api_error_without_message_field() {
        let err = api_error(HttpResponse {
            status: 502,
            body: Value::String("<html>Bad Gateway</html>".into()),
        });
        assert_eq!(err.to_string(), "API Error (502): <html>Bad Gateway</html>");
    }
}
