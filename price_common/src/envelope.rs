//! Newline-delimited JSON framing between the performer host and its clients.
//!
//! A client writes one serialized `TaskRequest` per line; the host answers with one
//! `TaskReply` line, tagged by `status`.
use std::io::{BufRead, Write};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::PerformerError;
use crate::task::TaskResponse;

/// Host answer to a single task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TaskReply {
    /// The task was validated and handled.
    Completed(TaskResponse),
    /// Validation or handling failed; `error` is the failure's message.
    Failed {
        /// Task id of the request, empty if the request could not be parsed.
        task_id: Vec<u8>,
        /// Human-readable failure description.
        error: String,
    },
}

impl TaskReply {
    /// Build a `Failed` reply for `task_id` from `err`.
    pub fn failed(task_id: Vec<u8>, err: &PerformerError) -> Self {
        TaskReply::Failed {
            task_id,
            error: err.to_string(),
        }
    }
}

/// Serialize `message` as a single JSON line and flush.
pub fn write_message<W: Write, T: Serialize>(writer: &mut W, message: &T) -> Result<(), PerformerError> {
    let mut line = serde_json::to_vec(message)?;
    line.push(b'\n');
    writer.write_all(&line)?;
    writer.flush()?;
    Ok(())
}

/// Read one JSON line and deserialize it.
pub fn read_message<R: BufRead, T: DeserializeOwned>(reader: &mut R) -> Result<T, PerformerError> {
    let mut line = Vec::new();
    if reader.read_until(b'\n', &mut line)? == 0 {
        return Err(PerformerError::Format(
            "connection closed before a message was received".to_string(),
        ));
    }
    // invalid UTF-8 surfaces as a JSON error, not an I/O error
    Ok(serde_json::from_slice(&line)?)
}
