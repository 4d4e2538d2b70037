/// Message body as handed to the loader by the messaging host. `data` is the
/// base64-encoded payload bytes.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Event {
    pub data: String,
}

/// Metadata of the triggering message.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Context {
    pub event_id: String,
    pub timestamp: String,
    pub resource: Resource,
}

/// The topic the triggering message was published to.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Resource {
    pub name: String,
}

/// One invocation envelope: the event body plus its metadata.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Delivery {
    pub event: Event,
    pub context: Context,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivery_envelope_deserializes() {
        let raw = r#"{
            "event": { "data": "eyJ4IjogMTB9" },
            "context": {
                "event_id": "4102401031",
                "timestamp": "2023-07-10T10:00:00.000Z",
                "resource": { "name": "projects/demo/topics/ingest" }
            }
        }"#;

        let delivery = serde_json::from_str::<Delivery>(raw).unwrap();

        assert_eq!(delivery.event.data, "eyJ4IjogMTB9");
        assert_eq!(delivery.context.event_id, "4102401031");
        assert_eq!(delivery.context.resource.name, "projects/demo/topics/ingest");
    }
}
