// hyperapi-core/src/application/work_status.rs

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tokio::time::{Instant, sleep};
use tracing::{debug, instrument};

use crate::application::dispatcher::Dispatcher;
use crate::error::ClientError;
use crate::ports::work_status::WorkStatusPoller;

#[derive(Debug, Clone, PartialEq)]
enum WorkState {
    Pending(String),
    Done,
    Failed(String),
}

impl WorkState {
    fn from_record(work: &Value) -> Self {
        let status = work
            .get("status")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_lowercase();

        match status.as_str() {
            "done" => Self::Done,
            "error" | "failed" | "cancelled" | "canceled" => Self::Failed(
                work.get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .unwrap_or_else(|| status.clone()),
            ),
            _ => Self::Pending(status.clone()),
        }
    }
}

/// Polls the `getWork` route until the job is done, failed, or too slow.
pub struct PollingWorkStatus {
    dispatcher: Dispatcher,
    poll_interval: Duration,
    timeout: Duration,
}

impl PollingWorkStatus {
    pub fn new(dispatcher: Dispatcher, poll_interval: Duration, timeout: Duration) -> Self {
        Self {
            dispatcher,
            poll_interval,
            timeout,
        }
    }
}

#[async_trait]
impl WorkStatusPoller for PollingWorkStatus {
    #[instrument(skip(self))]
    async fn wait_for_completion(
        &self,
        project_id: &str,
        work_type: &str,
        work_id: &str,
    ) -> Result<(), ClientError> {
        let deadline = Instant::now() + self.timeout;

        loop {
            let work = self
                .dispatcher
                .dispatch(
                    "getWork",
                    &[("project_ID", project_id), ("work_ID", work_id)],
                    None,
                )
                .await?;

            match WorkState::from_record(&work) {
                WorkState::Done => return Ok(()),
                WorkState::Failed(reason) => {
                    return Err(ClientError::api(
                        format!("{} work {} failed", work_type, work_id),
                        reason,
                    ));
                }
                WorkState::Pending(status) => debug!(%status, "Work still running"),
            }

            if Instant::now() >= deadline {
                return Err(ClientError::api(
                    format!("{} work {} did not finish", work_type, work_id),
                    format!("gave up after {:?}", self.timeout),
                ));
            }
            sleep(self.poll_interval).await;
        }
    }
}
