//! Task records exchanged with the dispatch framework.
//!
//! A `TaskRequest` carries an opaque correlation token and a payload holding the
//! identifier to price. A `TaskResponse` echoes the token and carries the encoded
//! `Quote` as opaque bytes.
use serde::{Deserialize, Serialize};

/// Inbound unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRequest {
    /// Correlation token. Never inspected, only echoed.
    pub task_id: Vec<u8>,
    /// UTF-8 identifier of the entity to price. Absent on the wire means empty.
    #[serde(default)]
    pub payload: Vec<u8>,
}

impl TaskRequest {
    /// Creates a request from anything convertible into bytes.
    pub fn new(task_id: impl Into<Vec<u8>>, payload: impl Into<Vec<u8>>) -> Self {
        TaskRequest {
            task_id: task_id.into(),
            payload: payload.into(),
        }
    }
}

/// Outbound result of a successfully handled task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResponse {
    /// Correlation token copied from the request.
    pub task_id: Vec<u8>,
    /// Encoded result, opaque to the framework.
    pub result: Vec<u8>,
}

impl TaskResponse {
    /// Builds the response for `request`, copying its task id unchanged.
    pub fn for_request(request: &TaskRequest, result: Vec<u8>) -> Self {
        TaskResponse {
            task_id: request.task_id.clone(),
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_echoes_arbitrary_task_id_bytes() {
        let request = TaskRequest::new(vec![0u8, 159, 146, 150, 255], "bitcoin");
        let response = TaskResponse::for_request(&request, b"{}".to_vec());
        assert_eq!(response.task_id, request.task_id);
    }

    #[test]
    fn missing_payload_field_decodes_as_empty() {
        let request: TaskRequest = serde_json::from_str(r#"{"task_id":[116,49]}"#).unwrap();
        assert_eq!(request.task_id, b"t1".to_vec());
        assert!(request.payload.is_empty());
    }
}
