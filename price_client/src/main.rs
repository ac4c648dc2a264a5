//! Price Client — submits one price lookup task to a running price performer and
//! prints the resolved quote.
//!
//! Usage example (CLI):
//! ```bash
//! price_client --server 127.0.0.1:8080 --token bitcoin
//! ```
#![warn(missing_docs)]
mod args;
mod sender;

use crate::args::Args;
use crate::sender::TaskSender;
use chrono::Utc;
use clap::Parser;
use log::{error, info};
use price_common::task::TaskRequest;
use price_common::PerformerError;
use price_common::Result;
use std::net::TcpStream;

fn main() -> Result<(), PerformerError> {
    init_logger();
    let args = Args::parse();

    let task_id = args
        .task_id
        .unwrap_or_else(|| format!("task-{}", Utc::now().timestamp_millis()));
    let task = TaskRequest::new(task_id, args.token);

    info!("Connecting to price performer at {}", args.server);
    let mut stream = TcpStream::connect(&args.server)
        .map_err(|e| PerformerError::Format(format!("Failed to connect to performer: {}", e)))?;

    let reply = TaskSender::submit(&mut stream, &task)?;
    match TaskSender::into_quote(&task, reply) {
        Ok(quote) => {
            info!(
                "QUOTE: {} ({}) Price=${:.2} {} Time={}",
                quote.token_name, quote.token_id, quote.price, quote.currency, quote.timestamp
            );
            Ok(())
        }
        Err(e) => {
            error!("Task {} failed: {}", String::from_utf8_lossy(&task.task_id), e);
            Err(e)
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
