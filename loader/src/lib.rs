use base64::engine::{general_purpose::STANDARD as BASE64, Engine};
use shared_structures::{Context, Event};

mod config;
mod sink;

pub use config::Config;
pub use sink::{RowSink, TableClient};

/// Decodes a message body back into the JSON value the publisher sent:
/// base64 to UTF-8 JSON text to one parsed value.
pub fn decode_payload(data: &str) -> Result<serde_json::Value, String> {
    let bytes = BASE64
        .decode(data)
        .map_err(|e| format!("message body is not valid base64: {}", e))?;

    let text =
        String::from_utf8(bytes).map_err(|e| format!("message body is not valid UTF-8: {}", e))?;

    serde_json::from_str(&text).map_err(|e| format!("message body is not valid JSON: {}", e))
}

/// Processes one delivered message: decode the body, insert it as a single
/// row into `table_fqid` through `sink`. A non-empty per-row error list is
/// logged and swallowed; retry and dead-lettering belong to the host, so a
/// decode or transport failure is returned as `Err` for it to deal with.
pub fn handle_event<S: RowSink>(
    event: &Event,
    context: &Context,
    table_fqid: &str,
    sink: &mut S,
) -> Result<(), String> {
    tracing::info!(
        event_id = %context.event_id,
        timestamp = %context.timestamp,
        resource = %context.resource.name,
        "triggered by message"
    );

    let payload = decode_payload(&event.data)?;
    tracing::info!(%payload, "received message");

    tracing::info!(table = %table_fqid, "loading data");

    let rows = vec![payload];
    let errors = sink.insert_rows(table_fqid, &rows)?;

    if errors.is_empty() {
        tracing::info!("new rows have been added");
    } else {
        tracing::error!(?errors, "encountered errors while inserting rows");
    }

    Ok(())
}
