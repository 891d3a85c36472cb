use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::errors::{messages, DomainError};

/// Runs a storage call, failing with a `Storage` error once `timeout` elapses
pub(crate) async fn with_deadline<T, F>(
    timeout: Duration,
    op: &'static str,
    call: F,
) -> Result<T, DomainError>
where
    F: Future<Output = Result<T, DomainError>>,
{
    match tokio::time::timeout(timeout, call).await {
        Ok(result) => result,
        Err(_) => {
            warn!(op, timeout_ms = timeout.as_millis() as u64, "storage call timed out");
            Err(DomainError::storage(op, messages::STORAGE_DEADLINE_EXCEEDED))
        }
    }
}
