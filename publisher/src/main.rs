use std::fs;

use clap::{arg, command};
use publisher::Publisher;

fn main() -> Result<(), String> {
    let matches = command!()
        .arg(arg!(-b --broker <BROKER> "Address of the messaging endpoint to publish through e.g. localhost:3000").required(true))
        .arg(arg!(-p --project <PROJECT> "The project the target topic belongs to").required(true))
        .arg(arg!(-t --topic <TOPIC> "The name of the topic onto which the payloads are going to be published").required(true))
        .arg(arg!(-f --file <FILE> "Path to a file containing a JSON array of payloads").required(false).default_value("example-payload.json"))
        .get_matches();

    let broker = matches.get_one::<String>("broker").unwrap();
    let project = matches.get_one::<String>("project").unwrap();
    let topic = matches.get_one::<String>("topic").unwrap();
    let file = matches.get_one::<String>("file").unwrap();

    let content = fs::read_to_string(file).map_err(|e| e.to_string())?;
    let payloads: Vec<serde_json::Value> =
        serde_json::from_str(&content).map_err(|e| e.to_string())?;

    let mut publisher = Publisher::from(broker, project, topic)?;

    // One payload at a time, each send waits for its ack before the next
    for payload in payloads.iter() {
        println!("{}", payload);
        let message_id = publisher.publish(payload)?;
        println!("{}", message_id);
    }

    println!(
        "Published {} messages to {}.",
        payloads.len(),
        publisher.topic_path()
    );

    Ok(())
}
