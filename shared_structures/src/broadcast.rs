use std::{io::Write, net::TcpStream};

pub struct Broadcast;

impl Broadcast {
    /// Writes one request as a single newline-terminated JSON line. Both
    /// endpoints frame their protocol this way, one document per line.
    pub fn to<T: serde::Serialize>(stream: &mut TcpStream, message: &T) -> Result<(), String> {
        let mut payload = serde_json::to_string(message)
            .map_err(|_| "Couldn't serialize the data structure to send.".to_string())?;

        payload.push('\n');

        let bytes_written = stream
            .write(payload.as_bytes())
            .map_err(|e| e.to_string())?;

        if bytes_written == 0 {
            return Err("0 bytes have been written, connection to the endpoint may have been closed.".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::net::{TcpListener, TcpStream};

    use crate::{Reader, TopicRequest};

    use super::*;

    #[test]
    #[cfg_attr(miri, ignore)]
    fn to_frames_one_request_per_line() {
        let listener = TcpListener::bind("localhost:15300").unwrap();

        let thread = std::thread::spawn(|| TcpStream::connect("localhost:15300").unwrap());

        let (server_side_stream, _) = listener.accept().unwrap();
        let mut client_side_stream = thread.join().unwrap();

        let request = TopicRequest::Publish {
            topic: "projects/demo/topics/ingest".to_string(),
            data: uuid::Uuid::new_v4().to_string(),
        };

        let result = Broadcast::to(&mut client_side_stream, &request);
        assert!(result.is_ok());

        let received: TopicRequest = Reader::read_message(&server_side_stream).unwrap();
        let TopicRequest::Publish { topic, data } = received;
        assert_eq!(topic, "projects/demo/topics/ingest");
        let TopicRequest::Publish { data: sent, .. } = request;
        assert_eq!(data, sent);
    }
}
