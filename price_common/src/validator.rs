//! Task validation run before any network I/O.
//!
//! The payload must decode as a non-empty UTF-8 string. No trimming, casing or
//! allow-list check is applied: whether the identifier names a real coin is only
//! known once the price service has been asked.
use log::{debug, info};

use crate::error::PerformerError;
use crate::task::TaskRequest;

/// Returns the identifier carried by `request`, or `InvalidTask`.
pub fn identifier(request: &TaskRequest) -> Result<&str, PerformerError> {
    if request.payload.is_empty() {
        return Err(PerformerError::InvalidTask(
            "task payload cannot be empty".to_string(),
        ));
    }
    let token_id = std::str::from_utf8(&request.payload).map_err(|e| {
        PerformerError::InvalidTask(format!("task payload is not valid UTF-8: {}", e))
    })?;
    Ok(token_id)
}

/// Accepts or rejects `request`. Has no side effects besides logging.
pub fn validate(request: &TaskRequest) -> Result<(), PerformerError> {
    debug!(
        "Validating task {} ({} payload bytes)",
        String::from_utf8_lossy(&request.task_id),
        request.payload.len()
    );
    let token_id = identifier(request)?;
    info!("Task validation successful, tokenID={}", token_id);
    Ok(())
}
