//! Checks against the public CoinGecko API. Network access required:
//! `cargo test -p price_common --test live_coingecko -- --ignored`
use price_common::currency::Currency;
use price_common::task::TaskRequest;
use price_common::worker::{TaskHandler, TaskWorker};
use price_common::{PerformerError, Quote};

#[test]
#[ignore]
fn bitcoin_price() {
    let worker = TaskWorker::coingecko().unwrap();
    let task = TaskRequest::new("test-task-bitcoin", "bitcoin");

    worker.validate_task(&task).unwrap();
    let response = worker.handle_task(&task).unwrap();
    let quote = Quote::from_json_bytes(&response.result).unwrap();

    assert_eq!(quote.token_id, "bitcoin");
    assert_eq!(quote.token_name, "Bitcoin");
    assert!(quote.price > 0.0);
    assert_eq!(quote.currency, Currency::Usd);
    assert!(quote.timestamp > 0);
}

#[test]
#[ignore]
fn ethereum_price() {
    let worker = TaskWorker::coingecko().unwrap();
    let task = TaskRequest::new("test-task-ethereum", "ethereum");

    let response = worker.handle_task(&task).unwrap();
    let quote = Quote::from_json_bytes(&response.result).unwrap();
    assert_eq!(quote.token_id, "ethereum");
}

#[test]
#[ignore]
fn unknown_token_fails_at_resolution() {
    let worker = TaskWorker::coingecko().unwrap();
    let task = TaskRequest::new("test-task-invalid", "invalid-token-id-xyz123");

    assert!(worker.validate_task(&task).is_ok());
    let err = worker.handle_task(&task).unwrap_err();
    assert!(matches!(
        err,
        PerformerError::UpstreamStatus { .. } | PerformerError::Decode { .. }
    ));
}
