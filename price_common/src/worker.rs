//! Task worker: the validate + handle capability invoked by the dispatch framework.
//!
//! `TaskHandler` is the inbound contract. `TaskWorker` implements it on top of a
//! [`PriceResolver`], so hosts and tests can swap the price source without touching
//! the task flow.
use log::{error, info};

use crate::error::PerformerError;
use crate::resolver::PriceResolver;
use crate::source::{CoinGeckoSource, PriceSource};
use crate::task::{TaskRequest, TaskResponse};
use crate::validator;

/// Validate and execute tasks on behalf of the dispatch framework.
pub trait TaskHandler {
    /// Accept or reject `task` before any external call.
    fn validate_task(&self, task: &TaskRequest) -> Result<(), PerformerError>;

    /// Execute `task`, returning a response that echoes its task id.
    fn handle_task(&self, task: &TaskRequest) -> Result<TaskResponse, PerformerError>;
}

/// Validate `task` and, only if it is accepted, handle it.
pub fn run_task<H>(handler: &H, task: &TaskRequest) -> Result<TaskResponse, PerformerError>
where
    H: TaskHandler + ?Sized,
{
    handler.validate_task(task)?;
    handler.handle_task(task)
}

/// Prices the identifier carried in each task payload.
#[derive(Debug, Clone)]
pub struct TaskWorker<S> {
    resolver: PriceResolver<S>,
}

impl TaskWorker<CoinGeckoSource> {
    /// Worker backed by the public CoinGecko API.
    pub fn coingecko() -> Result<Self, PerformerError> {
        Ok(Self::with_source(CoinGeckoSource::new()?))
    }
}

impl<S: PriceSource> TaskWorker<S> {
    /// Worker backed by an arbitrary price source.
    pub fn with_source(source: S) -> Self {
        Self {
            resolver: PriceResolver::new(source),
        }
    }

    /// The resolver used for each task.
    pub fn resolver(&self) -> &PriceResolver<S> {
        &self.resolver
    }
}

impl<S: PriceSource> TaskHandler for TaskWorker<S> {
    fn validate_task(&self, task: &TaskRequest) -> Result<(), PerformerError> {
        validator::validate(task)
    }

    fn handle_task(&self, task: &TaskRequest) -> Result<TaskResponse, PerformerError> {
        let token_id = validator::identifier(task)?;
        info!(
            "Handling task {} for token {}",
            String::from_utf8_lossy(&task.task_id),
            token_id
        );

        let quote = self.resolver.resolve(token_id).map_err(|e| {
            error!(
                "Failed to fetch token price: tokenID={} stage={} error={}",
                token_id,
                e.stage(),
                e
            );
            e
        })?;
        let result = quote.to_json_bytes().map_err(|e| {
            error!(
                "Failed to encode token price: tokenID={} stage={} error={}",
                token_id,
                e.stage(),
                e
            );
            e
        })?;

        Ok(TaskResponse::for_request(task, result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::Currency;
    use crate::quote::Quote;
    use crate::resolver::tests::{BITCOIN, CannedSource};
    use std::cell::Cell;

    #[test]
    fn handles_bitcoin_and_echoes_task_id() {
        let worker = TaskWorker::with_source(CannedSource::ok(BITCOIN));
        let task = TaskRequest::new("test-task-bitcoin", "bitcoin");

        worker.validate_task(&task).unwrap();
        let response = worker.handle_task(&task).unwrap();
        assert_eq!(response.task_id, b"test-task-bitcoin".to_vec());

        let quote = Quote::from_json_bytes(&response.result).unwrap();
        assert_eq!(quote.token_id, "bitcoin");
        assert_eq!(quote.token_name, "Bitcoin");
        assert_eq!(quote.currency, Currency::Usd);
        assert!(quote.price > 0.0);
    }

    #[test]
    fn empty_payload_never_reaches_price_source() {
        let worker = TaskWorker::with_source(CannedSource::ok(BITCOIN));
        let task = TaskRequest::new("test-task-empty", "");

        assert!(matches!(
            worker.validate_task(&task),
            Err(PerformerError::InvalidTask(_))
        ));
        assert!(matches!(
            worker.handle_task(&task),
            Err(PerformerError::InvalidTask(_))
        ));
        assert_eq!(worker.resolver().source().calls.get(), 0);
    }

    #[test]
    fn unknown_identifier_passes_validation_and_fails_handling() {
        let worker = TaskWorker::with_source(CannedSource::with_status(
            404,
            r#"{"error":"coin not found"}"#,
        ));
        let task = TaskRequest::new("test-task-invalid", "invalid-token-id-xyz123");

        assert!(worker.validate_task(&task).is_ok());
        let err = worker.handle_task(&task).unwrap_err();
        assert!(matches!(err, PerformerError::UpstreamStatus { status: 404, .. }));
        assert!(err.to_string().contains("invalid-token-id-xyz123"));
    }

    struct CountingHandler {
        valid: bool,
        handled: Cell<usize>,
    }

    impl TaskHandler for CountingHandler {
        fn validate_task(&self, _task: &TaskRequest) -> Result<(), PerformerError> {
            if self.valid {
                Ok(())
            } else {
                Err(PerformerError::InvalidTask("rejected".to_string()))
            }
        }

        fn handle_task(&self, task: &TaskRequest) -> Result<TaskResponse, PerformerError> {
            self.handled.set(self.handled.get() + 1);
            Ok(TaskResponse::for_request(task, Vec::new()))
        }
    }

    #[test]
    fn run_task_skips_handle_when_validation_fails() {
        let handler = CountingHandler {
            valid: false,
            handled: Cell::new(0),
        };
        let task = TaskRequest::new("t", "");
        assert!(run_task(&handler, &task).is_err());
        assert_eq!(handler.handled.get(), 0);
    }

    #[test]
    fn run_task_handles_accepted_task() {
        let handler = CountingHandler {
            valid: true,
            handled: Cell::new(0),
        };
        let task = TaskRequest::new("t-42", "ethereum");
        let response = run_task(&handler, &task).unwrap();
        assert_eq!(response.task_id, b"t-42".to_vec());
        assert_eq!(handler.handled.get(), 1);
    }
}
