//! # Board Messages
//!
//! Requests sent from a [`BoardClient`](crate::board::BoardClient) to the
//! [`OrderBoard`](crate::board::OrderBoard).

use crate::board::BoardError;
use crate::model::{Order, OrderId, OrderSummary};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the board.
pub type Response<T> = oneshot::Sender<Result<T, BoardError>>;

/// An order together with the summary derived when it was loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardEntry {
    pub order: Order,
    pub summary: OrderSummary,
}

/// Internal message type sent to the board.
///
/// Every variant except `Select` answers over its `respond_to` channel. `Select`
/// is a fire-and-forget notification raised from a card's callback.
#[derive(Debug)]
pub enum BoardRequest {
    Load {
        order: Box<Order>,
        respond_to: Response<OrderId>,
    },
    Get {
        id: OrderId,
        respond_to: Response<Option<BoardEntry>>,
    },
    List {
        respond_to: Response<Vec<(OrderId, OrderSummary)>>,
    },
    Remove {
        id: OrderId,
        respond_to: Response<()>,
    },
    Select {
        id: OrderId,
    },
}
