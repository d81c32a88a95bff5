//! # Selection Handling
//!
//! The board resolves a card selection to its order and hands both the order and
//! its summary to a [`SelectionHandler`], injected when the board is started:
//!
//! ```rust,ignore
//! let (board, client) = board::new(&BoardConfig::default());
//! tokio::spawn(board.run(my_handler));
//! ```
//!
//! Use `()` when selections need no reaction, or an unbounded channel sender to
//! receive the selected order numbers elsewhere.
//!
//! Each call runs in its own task, so a handler may itself hold a
//! [`BoardClient`](crate::board::BoardClient) and query the board.

use crate::model::{Order, OrderId, OrderSummary};
use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::warn;

/// Reaction to the user selecting an order card.
#[async_trait]
pub trait SelectionHandler: Send + Sync + 'static {
    /// Called by the board once per selection of a known order.
    ///
    /// Calls for successive selections may overlap.
    async fn order_selected(&self, order: &Order, summary: &OrderSummary);
}

/// Ignores selections.
#[async_trait]
impl SelectionHandler for () {
    async fn order_selected(&self, _order: &Order, _summary: &OrderSummary) {}
}

/// Forwards the selected order number.
#[async_trait]
impl SelectionHandler for mpsc::UnboundedSender<OrderId> {
    async fn order_selected(&self, order: &Order, _summary: &OrderSummary) {
        if self.send(order.order_number.clone()).is_err() {
            warn!(order_id = %order.order_number, "Selection receiver dropped");
        }
    }
}
