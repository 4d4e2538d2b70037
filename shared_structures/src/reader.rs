use std::io::{BufRead, BufReader};

pub struct Reader;

impl Reader {
    /// Reads one newline-terminated JSON line from `inner` and deserializes
    /// it. The protocol is lockstep, at most one line is in flight per
    /// direction, so a fresh buffered reader per call reads nothing ahead.
    pub fn read_message<R: std::io::Read, T: serde::de::DeserializeOwned>(
        inner: R,
    ) -> Result<T, String> {
        let mut reader = BufReader::new(inner);
        let mut buf = String::with_capacity(1024);
        let bytes_read = reader
            .read_line(&mut buf)
            .map_err(|e| format!("Reader error: {}", e))?;

        if bytes_read == 0 {
            return Err("Connection closed before a message could be read".to_string());
        }

        serde_json::from_str::<T>(&buf).map_err(|e| format!("Error while deserializing: {}", e))
    }
}
