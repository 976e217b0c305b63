// hyperapi-core/src/application/client.rs

use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument};

use crate::application::dispatcher::Dispatcher;
use crate::application::factory::AutomatedModelFactory;
use crate::application::work_status::PollingWorkStatus;
use crate::domain::routes::RouteRegistry;
use crate::error::ClientError;
use crate::infrastructure::adapters::http::ReqwestTransport;
use crate::infrastructure::config::ClientConfig;
use crate::ports::transport::HttpTransport;
use crate::ports::work_status::WorkStatusPoller;

/// Wires the route table, the transport and the work-status poller together.
#[derive(Clone)]
pub struct HyperApiClient {
    dispatcher: Dispatcher,
    poller: Arc<dyn WorkStatusPoller>,
}

impl HyperApiClient {
    /// Production wiring: reqwest transport + polling of the `getWork` route.
    #[instrument(skip(config), fields(url = %config.base_url))]
    pub fn connect(config: &ClientConfig) -> Result<Self, ClientError> {
        let registry = RouteRegistry::standard(config.api_version.as_deref())?;
        let transport = Arc::new(ReqwestTransport::new(config)?);
        let dispatcher = Dispatcher::new(registry, transport);

        let poller = Arc::new(PollingWorkStatus::new(
            dispatcher.clone(),
            Duration::from_millis(config.work_status.poll_interval_ms),
            Duration::from_secs(config.work_status.timeout_secs),
        ));

        info!(routes = dispatcher.registry().len(), "🔌 Client ready");
        Ok(Self { dispatcher, poller })
    }

    /// Custom wiring, e.g. another transport or poller.
    pub fn with_ports(
        registry: RouteRegistry,
        transport: Arc<dyn HttpTransport>,
        poller: Arc<dyn WorkStatusPoller>,
    ) -> Self {
        Self {
            dispatcher: Dispatcher::new(registry, transport),
            poller,
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn automated_models(&self, project_id: impl Into<String>) -> AutomatedModelFactory {
        AutomatedModelFactory::new(self.dispatcher.clone(), self.poller.clone(), project_id)
    }
}
