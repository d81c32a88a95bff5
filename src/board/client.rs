//! # Board Client
//!
//! Async, cloneable interface to an [`OrderBoard`](crate::board::OrderBoard).

use crate::board::{BoardEntry, BoardError, BoardRequest, Response};
use crate::card::OrderCard;
use crate::model::{Order, OrderId, OrderSummary};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

/// Client for interacting with the order board.
///
/// Holds only a sender, so cloning is inexpensive. The board stops once every
/// clone has been dropped.
#[derive(Clone)]
pub struct BoardClient {
    sender: mpsc::Sender<BoardRequest>,
}

impl BoardClient {
    pub fn new(sender: mpsc::Sender<BoardRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(Response<T>) -> BoardRequest,
    ) -> Result<T, BoardError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| BoardError::ActorClosed)?;
        response.await.map_err(|_| BoardError::ActorDropped)?
    }

    /// Loads (or reloads) an order and returns its order number.
    #[instrument(skip(self, order), fields(order_id = %order.order_number))]
    pub async fn load(&self, order: Order) -> Result<OrderId, BoardError> {
        debug!(?order, "load called");
        self.request(|respond_to| BoardRequest::Load {
            order: Box::new(order),
            respond_to,
        })
        .await
    }

    /// Fetches a loaded order.
    #[instrument(skip(self))]
    pub async fn get(&self, id: OrderId) -> Result<Option<Order>, BoardError> {
        let entry = self.entry(id).await?;
        Ok(entry.map(|entry| entry.order))
    }

    /// Fetches the summary derived when the order was loaded.
    #[instrument(skip(self))]
    pub async fn summary(&self, id: OrderId) -> Result<OrderSummary, BoardError> {
        match self.entry(id.clone()).await? {
            Some(entry) => Ok(entry.summary),
            None => Err(BoardError::NotFound(id)),
        }
    }

    /// Every summary on the board, ordered by order number.
    #[instrument(skip(self))]
    pub async fn summaries(&self) -> Result<Vec<(OrderId, OrderSummary)>, BoardError> {
        self.request(|respond_to| BoardRequest::List { respond_to })
            .await
    }

    /// Removes an order from the board.
    #[instrument(skip(self))]
    pub async fn remove(&self, id: OrderId) -> Result<(), BoardError> {
        self.request(|respond_to| BoardRequest::Remove { id, respond_to })
            .await
    }

    /// Builds the card of a loaded order.
    ///
    /// Selecting the card notifies the board, which passes the order to its
    /// [`SelectionHandler`](crate::board::SelectionHandler). The card holds a weak
    /// handle: selecting it after the board stopped only logs a warning.
    #[instrument(skip(self))]
    pub async fn card(&self, id: OrderId) -> Result<OrderCard, BoardError> {
        let entry = self
            .entry(id.clone())
            .await?
            .ok_or_else(|| BoardError::NotFound(id.clone()))?;

        let board = self.sender.downgrade();
        let on_select = move || {
            let Some(sender) = board.upgrade() else {
                warn!(order_id = %id, "Selection dropped, board closed");
                return;
            };
            if let Err(e) = sender.try_send(BoardRequest::Select { id: id.clone() }) {
                warn!(order_id = %id, error = %e, "Selection dropped");
            }
        };

        Ok(OrderCard::with_summary(
            &entry.order,
            entry.summary,
            Arc::new(on_select),
        ))
    }

    /// Selects an order, waiting for room in the request channel.
    #[instrument(skip(self))]
    pub async fn select(&self, id: OrderId) -> Result<(), BoardError> {
        info!("Sending select to board");
        self.sender
            .send(BoardRequest::Select { id })
            .await
            .map_err(|_| BoardError::ActorClosed)
    }

    async fn entry(&self, id: OrderId) -> Result<Option<BoardEntry>, BoardError> {
        self.request(|respond_to| BoardRequest::Get { id, respond_to })
            .await
    }
}
