use std::net::TcpStream;

use base64::engine::{general_purpose::STANDARD as BASE64, Engine};
use shared_structures::{Broadcast, Reader, TopicRequest, TopicResponse};

/// Builds the fully qualified identifier for a topic, in the form
/// `projects/{project_id}/topics/{topic_id}`.
pub fn topic_path(project_id: &str, topic_id: &str) -> String {
    format!("projects/{}/topics/{}", project_id, topic_id)
}

pub struct Publisher {
    pub stream: TcpStream,
    topic_path: String,
}

impl Publisher {
    pub fn from(broker: &str, project_id: &str, topic_id: &str) -> Result<Self, String> {
        let stream = TcpStream::connect(broker).map_err(|e| e.to_string())?;

        Ok(Self {
            stream,
            topic_path: topic_path(project_id, topic_id),
        })
    }

    pub fn topic_path(&self) -> &str {
        &self.topic_path
    }

    /// Sends one payload to the topic and blocks until the endpoint
    /// acknowledges it. Returns the server-assigned message id. Payloads are
    /// UTF-8 JSON encoded and travel base64-wrapped on the wire, the same
    /// form the row loader receives them in.
    pub fn publish(&mut self, payload: &serde_json::Value) -> Result<String, String> {
        let bytes = serde_json::to_vec(payload).map_err(|e| e.to_string())?;

        let request = TopicRequest::Publish {
            topic: self.topic_path.clone(),
            data: BASE64.encode(bytes),
        };

        Broadcast::to(&mut self.stream, &request)?;

        let TopicResponse::Ack { message_id } = Reader::read_message(&self.stream)?;

        Ok(message_id)
    }
}
