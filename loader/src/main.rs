use std::{
    fs,
    io::{stdin, Read},
};

use clap::{arg, command};
use loader::{handle_event, Config, TableClient};
use shared_structures::Delivery;

fn main() -> Result<(), String> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "loader=info".to_string()),
        ))
        .init();

    let matches = command!()
        .arg(arg!(-a --addr <ADDR> "Address of the table store endpoint e.g. localhost:4000").required(true))
        .arg(arg!(-e --event <FILE> "Path to a delivery envelope, read from stdin when omitted").required(false))
        .get_matches();

    let addr = matches.get_one::<String>("addr").unwrap();

    let raw = match matches.get_one::<String>("event") {
        Some(path) => fs::read_to_string(path).map_err(|e| e.to_string())?,
        None => {
            let mut buf = String::with_capacity(1024);
            stdin()
                .read_to_string(&mut buf)
                .map_err(|e| e.to_string())?;
            buf
        }
    };

    let delivery: Delivery = serde_json::from_str(&raw).map_err(|e| e.to_string())?;

    let config = Config::from_env()?;

    let mut client = TableClient::connect(addr)?;

    handle_event(
        &delivery.event,
        &delivery.context,
        &config.table_fqid(),
        &mut client,
    )
}
