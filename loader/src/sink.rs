use std::net::TcpStream;

use shared_structures::{Broadcast, InsertError, Reader, TableRequest, TableResponse};

/// The row-insertion boundary. An `Err` is a transport failure; `Ok` carries
/// the per-row error list the table store reported, empty on full success.
pub trait RowSink {
    fn insert_rows(
        &mut self,
        table: &str,
        rows: &[serde_json::Value],
    ) -> Result<Vec<InsertError>, String>;
}

/// Table store client speaking the newline-delimited JSON protocol.
pub struct TableClient {
    pub stream: TcpStream,
}

impl TableClient {
    pub fn connect(addr: &str) -> Result<Self, String> {
        let stream = TcpStream::connect(addr).map_err(|e| e.to_string())?;

        Ok(Self { stream })
    }
}

impl RowSink for TableClient {
    fn insert_rows(
        &mut self,
        table: &str,
        rows: &[serde_json::Value],
    ) -> Result<Vec<InsertError>, String> {
        let request = TableRequest::InsertAll {
            table: table.to_string(),
            rows: rows.to_vec(),
        };

        Broadcast::to(&mut self.stream, &request)?;

        let TableResponse::InsertResult { errors } = Reader::read_message(&self.stream)?;

        Ok(errors)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io::{BufRead, BufReader},
        net::TcpListener,
    };

    use serde_json::json;

    use super::*;

    #[test]
    #[cfg_attr(miri, ignore)]
    fn insert_rows_round_trips_the_error_list() {
        let listener = TcpListener::bind("localhost:15500").unwrap();

        let endpoint = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut buf = String::with_capacity(1024);

            reader.read_line(&mut buf).unwrap();
            let request = serde_json::from_str::<TableRequest>(&buf).unwrap();

            Broadcast::to(
                &mut stream,
                &TableResponse::InsertResult {
                    errors: vec![InsertError {
                        index: 0,
                        reason: "no such field: y".to_string(),
                    }],
                },
            )
            .unwrap();

            request
        });

        let mut client = TableClient::connect("localhost:15500").unwrap();
        let errors = client
            .insert_rows("demo-project.demo_dataset.events", &[json!({"y": 1})])
            .unwrap();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].reason, "no such field: y");

        let TableRequest::InsertAll { table, rows } = endpoint.join().unwrap();
        assert_eq!(table, "demo-project.demo_dataset.events");
        assert_eq!(rows, vec![json!({"y": 1})]);
    }
}
