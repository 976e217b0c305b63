// hyperapi-core/src/ports/work_status.rs

use async_trait::async_trait;

use crate::error::ClientError;

/// Waits for an asynchronous job started by a write request.
#[async_trait]
pub trait WorkStatusPoller: Send + Sync {
    async fn wait_for_completion(
        &self,
        project_id: &str,
        work_type: &str,
        work_id: &str,
    ) -> Result<(), ClientError>;
}
