//! Submitting a task to the performer host and reading its reply.
use log::info;
use price_common::envelope::{TaskReply, read_message, write_message};
use price_common::task::TaskRequest;
use price_common::{PerformerError, Quote};
use std::io::{BufReader, Read, Write};

/// Helper type for sending tasks to the performer.
pub struct TaskSender;

impl TaskSender {
    /// Write `task` to `stream` and wait for the reply.
    pub fn submit<S: Read + Write>(stream: &mut S, task: &TaskRequest) -> Result<TaskReply, PerformerError> {
        info!(
            "Sending task {} for token {}",
            String::from_utf8_lossy(&task.task_id),
            String::from_utf8_lossy(&task.payload)
        );
        write_message(stream, task)?;
        let mut reader = BufReader::new(stream);
        read_message(&mut reader)
    }

    /// Turn a reply into the quote it carries.
    ///
    /// A `failed` reply or a reply for another task id is an error.
    pub fn into_quote(task: &TaskRequest, reply: TaskReply) -> Result<Quote, PerformerError> {
        match reply {
            TaskReply::Completed(response) => {
                if response.task_id != task.task_id {
                    return Err(PerformerError::Format(format!(
                        "reply for task {} does not match task {}",
                        String::from_utf8_lossy(&response.task_id),
                        String::from_utf8_lossy(&task.task_id)
                    )));
                }
                Quote::from_json_bytes(&response.result)
            }
            TaskReply::Failed { error, .. } => {
                Err(PerformerError::Format(format!("task failed: {}", error)))
            }
        }
    }
}
