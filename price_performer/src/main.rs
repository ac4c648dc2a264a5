//! Price performer host.
//!
//! This binary stands in for the performer-server side of the task-dispatch framework:
//! it accepts task connections on TCP and runs each task through the price worker.
//!
//! - `TaskReceiver` — accepts TCP connections on a background thread and forwards them
//!   over a `crossbeam_channel`.
//! - Per-connection task — a thread per accepted connection reads one `TaskRequest`
//!   line, runs Validate then Handle, and writes one `TaskReply` line.
//! - Shutdown — Ctrl+C is turned into a channel message; the main loop `select!`s
//!   between new connections and that signal.
//!
//! The worker holds no mutable state, so it is shared between connection threads
//! behind an `Arc` without locking. A failing connection never stops the server.
#![warn(missing_docs)]
use crate::args::Args;
use crate::receiver::TaskReceiver;
use clap::Parser;
use crossbeam_channel::{bounded, select, unbounded};
use log::{error, info};
use price_common::net::addr;
use price_common::source::CoinGeckoSource;
use price_common::worker::TaskWorker;
use price_common::PerformerError;
use price_common::Result;
use std::net::TcpStream;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

mod args;
mod connection;
mod receiver;

fn main() -> Result<(), PerformerError> {
    init_logger();
    let args = Args::parse();

    let source = CoinGeckoSource::with_base_url(&args.price_api_url)?;
    let worker = Arc::new(TaskWorker::with_source(source));
    let timeout = Duration::from_secs(args.timeout_secs);
    info!(
        "Price performer using {} (connection timeout {:?})",
        args.price_api_url, timeout
    );

    let (shutdown_tx, shutdown_rx) = bounded::<()>(1);
    ctrlc::set_handler(move || {
        info!("Ctrl+C received. Shutting down performer...");
        let _ = shutdown_tx.try_send(());
    })
    .map_err(|e| PerformerError::Format(format!("failed to set Ctrl+C handler: {}", e)))?;

    let (conn_tx, conn_rx) = unbounded::<TcpStream>();
    let receiver = TaskReceiver::new(&addr(&args.bind, args.port))?;
    thread::spawn(move || {
        if let Err(e) = receiver.accept_loop(conn_tx) {
            error!("Receiver loop failed: {}", e);
        }
    });

    loop {
        select! {
            recv(conn_rx) -> msg => match msg {
                Ok(stream) => {
                    let worker = Arc::clone(&worker);
                    thread::spawn(move || {
                        if let Err(e) = connection::serve_stream(stream, worker.as_ref(), timeout) {
                            error!("Task connection error: {}", e);
                        }
                    });
                }
                Err(e) => {
                    error!("Connection channel closed: {}", e);
                    break;
                }
            },
            recv(shutdown_rx) -> _ => break,
        }
    }

    info!("Price performer stopped");
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
