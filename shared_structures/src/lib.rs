mod broadcast;
mod event;
mod reader;

pub use broadcast::Broadcast;
pub use event::{Context, Delivery, Event, Resource};
pub use reader::Reader;

/// One failed row from an `InsertAll` request, mirroring the per-row error
/// list the table store returns.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InsertError {
    pub index: usize,
    pub reason: String,
}

/// Requests the publisher sends to the messaging endpoint.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub enum TopicRequest {
    Publish {
        /// Fully qualified topic path, `projects/{project}/topics/{topic}`.
        topic: String,
        /// Base64-encoded UTF-8 JSON payload bytes.
        data: String,
    },
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub enum TopicResponse {
    Ack { message_id: String },
}

/// Requests the row loader sends to the table endpoint.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub enum TableRequest {
    InsertAll {
        /// Fully qualified table id, `{project}.{dataset}.{table}`.
        table: String,
        rows: Vec<serde_json::Value>,
    },
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub enum TableResponse {
    InsertResult { errors: Vec<InsertError> },
}
