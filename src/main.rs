//! # Spare Parts Inventory
//!
//! An interactive inventory session over stdin/stdout.
//!
//! Each input line is one JSON [`Request`](spare_parts::api::Request); each
//! output line is the JSON [`Response`](spare_parts::api::Response) to it.
//! Logs go to stderr. The inventory lives only as long as the process.
//!
//! ```text
//! $ spare-parts
//! {"op":"add","part":{"part_id":"P1","name":"Brake Pad","category":"Brakes","quantity":4,"price":1200}}
//! {"status":"success","message":"'Brake Pad' added successfully!","ids":["P1"]}
//! {"op":"total"}
//! {"status":"success","message":"Total inventory value: PKR 4,800.00","total":{"amount":4800.0,"currency":"PKR"}}
//! ```

use anyhow::Context;
use spare_parts::api;
use spare_parts::lifecycle::{setup_tracing, Config, InventorySystem};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    setup_tracing(&config.log_level);

    info!(?config, "Starting inventory session");
    let system = InventorySystem::new(&config);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await.context("reading request")? {
        if line.trim().is_empty() {
            continue;
        }
        let response = api::handle_line(&system.parts_client, &line).await;
        let mut encoded = serde_json::to_string(&response).context("encoding response")?;
        encoded.push('\n');
        stdout
            .write_all(encoded.as_bytes())
            .await
            .context("writing response")?;
        stdout.flush().await.context("flushing stdout")?;
    }

    system.shutdown().await.map_err(anyhow::Error::msg)?;
    info!("Session ended");
    Ok(())
}
