//! Serving a single task connection.
//!
//! One request line in, one reply line out. Failures of the task itself become a
//! `failed` reply; only I/O failures on the connection are returned as errors.
use log::{info, warn};
use price_common::envelope::{TaskReply, read_message, write_message};
use price_common::task::TaskRequest;
use price_common::worker::{TaskHandler, run_task};
use price_common::PerformerError;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpStream;
use std::time::Duration;

/// Answer the task carried on `stream` using `handler`.
pub fn serve_stream<H>(stream: TcpStream, handler: &H, timeout: Duration) -> Result<(), PerformerError>
where
    H: TaskHandler + ?Sized,
{
    stream.set_read_timeout(Some(timeout))?;
    stream.set_write_timeout(Some(timeout))?;
    let mut reader = BufReader::new(stream.try_clone()?);
    let mut writer = stream;
    serve(&mut reader, &mut writer, handler)
}

/// Read one `TaskRequest` from `reader`, run it, and write the `TaskReply`.
pub fn serve<R, W, H>(reader: &mut R, writer: &mut W, handler: &H) -> Result<(), PerformerError>
where
    R: BufRead,
    W: Write,
    H: TaskHandler + ?Sized,
{
    let reply = match read_message::<_, TaskRequest>(reader) {
        Ok(task) => reply_for(&task, handler),
        Err(PerformerError::Json(e)) => {
            warn!("Malformed task request: {}", e);
            TaskReply::failed(Vec::new(), &PerformerError::Json(e))
        }
        Err(e) => return Err(e),
    };
    write_message(writer, &reply)
}

fn reply_for<H>(task: &TaskRequest, handler: &H) -> TaskReply
where
    H: TaskHandler + ?Sized,
{
    match run_task(handler, task) {
        Ok(response) => {
            info!(
                "Task {} completed ({} result bytes)",
                String::from_utf8_lossy(&response.task_id),
                response.result.len()
            );
            TaskReply::Completed(response)
        }
        Err(e) => {
            warn!(
                "Task {} failed at {}: {}",
                String::from_utf8_lossy(&task.task_id),
                e.stage(),
                e
            );
            TaskReply::failed(task.task_id.clone(), &e)
        }
    }
}
