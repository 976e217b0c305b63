// hyperapi-core/src/application/guard.rs

use std::future::Future;
use std::time::Instant;
use tracing::{debug, error};

use crate::error::ClientError;

/// Runs one public entry point with instrumentation (Logs + Timing).
/// The result is returned untouched: callers still see the first failure.
pub async fn guarded<T, F>(operation: &'static str, call: F) -> Result<T, ClientError>
where
    F: Future<Output = Result<T, ClientError>>,
{
    let start = Instant::now();
    debug!("⚡ {} started", operation);

    let result = call.await;

    let duration = start.elapsed();
    match &result {
        Ok(_) => debug!("✅ {} finished in {:.2?}", operation, duration),
        Err(e) => error!("❌ {} failed after {:.2?}: {}", operation, duration, e),
    }

    result
}
