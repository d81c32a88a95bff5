//! In-process board of loaded orders.
//!
//! The [`OrderBoard`] is a Tokio actor that owns the orders, derives each
//! summary once when the order is loaded, and forwards card selections to an
//! injected [`SelectionHandler`]. The rest of the app talks to it through a
//! [`BoardClient`].

pub mod actor;
pub mod client;
pub mod config;
pub mod error;
pub mod handler;
pub mod message;

pub use actor::*;
pub use client::*;
pub use config::*;
pub use error::*;
pub use handler::*;
pub use message::*;

/// Creates a new board and its client.
pub fn new(config: &BoardConfig) -> (OrderBoard, BoardClient) {
    OrderBoard::new(config)
}
