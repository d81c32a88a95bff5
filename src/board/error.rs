//! Error types for the order board.

use crate::model::OrderId;
use thiserror::Error;

/// Errors that can occur during board operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BoardError {
    /// The requested order is not on the board.
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    /// The board actor has stopped and no longer accepts requests.
    #[error("Board closed")]
    ActorClosed,

    /// The board actor dropped the response channel before answering.
    #[error("Board dropped response channel")]
    ActorDropped,

    /// The board task panicked or was cancelled during shutdown.
    #[error("Board task failed: {0}")]
    Join(String),
}
