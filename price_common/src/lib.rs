//!
//! Price performer core shared by the performer host and the client.
//!
//! This crate aggregates:
//! - `error` — unified error type `PerformerError` used across the workspace.
//! - `result` — handy `Result<T, PerformerError>` alias.
//! - `task` — task request/response records exchanged with the dispatch framework.
//! - `validator` — payload checks run before any upstream call.
//! - `currency` — the quote currency.
//! - `quote` — resolved `Quote` record and its JSON codec.
//! - `source` — the `PriceSource` seam and the CoinGecko HTTP implementation.
//! - `resolver` — turns an identifier into a `Quote`.
//! - `worker` — the `TaskHandler` capability tying validation and resolution together.
//! - `envelope` — newline-delimited JSON framing used between host and client.
//! - `net` — networking constants and small helpers.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod task;
pub mod validator;
pub mod currency;
pub mod quote;
pub mod source;
pub mod resolver;
pub mod worker;
pub mod envelope;
pub mod net;

pub use error::PerformerError;
pub use result::Result;
pub use task::{TaskRequest, TaskResponse};
pub use quote::Quote;
pub use worker::{TaskHandler, TaskWorker};
