//! # Order Board
//!
//! Loads a JSON array of orders into an order board and prints one summary line
//! per input order, in input order.
//!
//! ```bash
//! order-board orders.json
//! cat orders.json | ORDER_BOARD_CONFIG=board.json order-board
//! ```

use order_board::board::BoardConfig;
use order_board::import::{load_and_summarize, read_orders};
use order_board::lifecycle::{setup_tracing, BoardSystem};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = BoardConfig::from_env_or_default()
        .inspect_err(|e| error!(error = %e, "Failed to load config"))
        .map_err(|e| e.to_string())?;

    let path = std::env::args().nth(1);
    let orders = read_orders(path.as_deref())
        .inspect_err(|e| error!(error = %e, "Failed to read orders"))
        .map_err(|e| e.to_string())?;
    info!(count = orders.len(), "Read orders");

    let system = BoardSystem::start(&config, ());

    let lines = load_and_summarize(&system.client, orders)
        .await
        .map_err(|e| e.to_string())?;
    for line in lines {
        println!("{}", line);
    }

    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Application completed successfully");
    Ok(())
}
