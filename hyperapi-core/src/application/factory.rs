// hyperapi-core/src/application/factory.rs

use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::application::dispatcher::Dispatcher;
use crate::application::guard::guarded;
use crate::domain::model::{AutomatedModel, Dataset, ModelParams, Rejection, Target};
use crate::domain::payload::{BuildOutcome, WORK_TYPE_AUTOMATED_MODELS, build_create_request};
use crate::error::ClientError;
use crate::ports::work_status::WorkStatusPoller;

const STATUS_FAILURE: &str = "Unable to get the automated model status";

#[derive(Debug)]
pub enum CreateOutcome {
    Created(AutomatedModel),
    /// Unexpected `modelType` / `algoType`: nothing was sent.
    Rejected(Rejection),
}

/// Entry points of the automated model search, bound to one project.
#[derive(Clone)]
pub struct AutomatedModelFactory {
    dispatcher: Dispatcher,
    poller: Arc<dyn WorkStatusPoller>,
    project_id: String,
}

impl AutomatedModelFactory {
    pub fn new(
        dispatcher: Dispatcher,
        poller: Arc<dyn WorkStatusPoller>,
        project_id: impl Into<String>,
    ) -> Self {
        Self {
            dispatcher,
            poller,
            project_id: project_id.into(),
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// All automated models of the project, wrapped.
    pub async fn filter(&self) -> Result<Vec<AutomatedModel>, ClientError> {
        guarded("automodels.filter", async {
            let models = match self.get_all_raw().await? {
                Value::Array(items) => items.into_iter().map(AutomatedModel::new).collect(),
                Value::Null => Vec::new(),
                single => vec![AutomatedModel::new(single)],
            };
            Ok::<_, ClientError>(models)
        })
        .await
    }

    /// All automated models of the project, as returned by the server.
    pub async fn get_all(&self) -> Result<Value, ClientError> {
        guarded("automodels.get_all", self.get_all_raw()).await
    }

    pub async fn get_by_id(&self, model_id: &str) -> Result<Value, ClientError> {
        guarded(
            "automodels.get_by_id",
            self.dispatcher.dispatch(
                "getAutomatedModel",
                &[("project_ID", self.project_id.as_str()), ("model_ID", model_id)],
                None,
            ),
        )
        .await
    }

    /// Publishes a generated model on the project's model page.
    pub async fn publish(
        &self,
        automodel_id: &str,
        generated_model_id: &str,
    ) -> Result<Value, ClientError> {
        guarded(
            "automodels.publish",
            self.dispatcher.dispatch(
                "publishAutomatedModel",
                &[
                    ("project_ID", self.project_id.as_str()),
                    ("model_ID", automodel_id),
                    ("generatedmodel_ID", generated_model_id),
                ],
                None,
            ),
        )
        .await
    }

    /// Models generated by one automated optimization.
    pub async fn get_generated_models(&self, automodel_id: &str) -> Result<Value, ClientError> {
        guarded(
            "automodels.get_generated_models",
            self.dispatcher.dispatch(
                "getGeneratedModels",
                &[("project_ID", self.project_id.as_str()), ("model_ID", automodel_id)],
                None,
            ),
        )
        .await
    }

    /// Starts an automated model search and waits for the server to finish it.
    pub async fn create(
        &self,
        dataset: &Dataset,
        target: &Target,
        params: &ModelParams,
    ) -> Result<CreateOutcome, ClientError> {
        guarded("automodels.create", self.create_inner(dataset, target, params)).await
    }

    #[instrument(skip_all, fields(project = %self.project_id, dataset = %dataset.name, target = %target.name))]
    async fn create_inner(
        &self,
        dataset: &Dataset,
        target: &Target,
        params: &ModelParams,
    ) -> Result<CreateOutcome, ClientError> {
        let request = match build_create_request(dataset, target, params)? {
            BuildOutcome::Request(request) => request,
            BuildOutcome::Rejected(rejection) => {
                warn!("{}", rejection);
                return Ok(CreateOutcome::Rejected(rejection));
            }
        };

        let body = serde_json::to_value(&*request)?;
        let created = self
            .dispatcher
            .dispatch(
                "createAutomatedModel",
                &[("project_ID", self.project_id.as_str())],
                Some(&body),
            )
            .await?;

        let work_id = created
            .get("workId")
            .and_then(Value::as_str)
            .ok_or_else(|| ClientError::api(STATUS_FAILURE, "The server returned no workId"))?;
        info!(work_id, "⏳ Waiting for the automated model search");

        self.poller
            .wait_for_completion(&self.project_id, WORK_TYPE_AUTOMATED_MODELS, work_id)
            .await
            .map_err(|e| ClientError::api(STATUS_FAILURE, e.to_string()))?;

        Ok(CreateOutcome::Created(AutomatedModel::new(created)))
    }

    async fn get_all_raw(&self) -> Result<Value, ClientError> {
        self.dispatcher
            .dispatch("getAutomatedModels", &[("project_ID", self.project_id.as_str())], None)
            .await
    }
}
