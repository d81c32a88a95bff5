//! # Board Server
//!
//! The `OrderBoard` owns every loaded order and processes requests sequentially,
//! so its store needs no locking.

use crate::board::{BoardClient, BoardConfig, BoardEntry, BoardError, BoardRequest, SelectionHandler};
use crate::deriver::derive;
use crate::model::OrderId;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

/// The actor that holds the loaded orders and their summaries.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call [`board::new`](crate::board::new) to get the board (server)
///     and a [`BoardClient`] (interface).
/// 2.  **Wire**: Pass the [`SelectionHandler`] into `board.run(handler)`.
/// 3.  **Run**: Spawn the run loop in a background task.
///
/// # Operations
///
/// * **Load**: derives the summary once, stores it with the order keyed by order
///   number and returns the number. A later load of the same number replaces the
///   earlier one and is logged as a warning.
/// * **Get**: returns a clone of the stored entry, or `None`.
/// * **List**: returns every summary, ordered by order number.
/// * **Remove**: drops the entry, or answers `NotFound`.
/// * **Select**: runs the handler with copies of the stored order and summary in
///   its own task, so the board keeps serving requests (including the handler's
///   own) meanwhile; unknown numbers are logged and ignored.
pub struct OrderBoard {
    receiver: mpsc::Receiver<BoardRequest>,
    store: BTreeMap<OrderId, BoardEntry>,
}

impl OrderBoard {
    /// Creates a new `OrderBoard` and its associated `BoardClient`.
    ///
    /// # Arguments
    ///
    /// * `config` - `buffer_size` is the capacity of the request channel.
    pub fn new(config: &BoardConfig) -> (Self, BoardClient) {
        let (sender, receiver) = mpsc::channel(config.buffer_size.max(1));
        let board = Self {
            receiver,
            store: BTreeMap::new(),
        };
        (board, BoardClient::new(sender))
    }

    /// Runs the board's event loop until every client has been dropped.
    ///
    /// Cards only hold a weak handle to the board, so outstanding cards do not
    /// keep it alive. Pending handler calls are awaited before it returns.
    pub async fn run<H: SelectionHandler>(mut self, handler: H) {
        info!("Board started");
        let handler = Arc::new(handler);
        let mut selections = JoinSet::new();

        while let Some(msg) = self.receiver.recv().await {
            while let Some(finished) = selections.try_join_next() {
                log_selection(finished);
            }

            match msg {
                BoardRequest::Load { order, respond_to } => {
                    debug!(?order, "Load");
                    let id = order.order_number.clone();
                    let summary = derive(&order);
                    let replaced = self
                        .store
                        .insert(
                            id.clone(),
                            BoardEntry {
                                order: *order,
                                summary,
                            },
                        )
                        .is_some();
                    if replaced {
                        warn!(order_id = %id, size = self.store.len(), "Replaced earlier load");
                    } else {
                        info!(order_id = %id, size = self.store.len(), "Loaded");
                    }
                    let _ = respond_to.send(Ok(id));
                }
                BoardRequest::Get { id, respond_to } => {
                    let entry = self.store.get(&id).cloned();
                    debug!(order_id = %id, found = entry.is_some(), "Get");
                    let _ = respond_to.send(Ok(entry));
                }
                BoardRequest::List { respond_to } => {
                    debug!(size = self.store.len(), "List");
                    let summaries = self
                        .store
                        .iter()
                        .map(|(id, entry)| (id.clone(), entry.summary.clone()))
                        .collect();
                    let _ = respond_to.send(Ok(summaries));
                }
                BoardRequest::Remove { id, respond_to } => {
                    if self.store.remove(&id).is_some() {
                        info!(order_id = %id, size = self.store.len(), "Removed");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(order_id = %id, "Not found");
                        let _ = respond_to.send(Err(BoardError::NotFound(id)));
                    }
                }
                BoardRequest::Select { id } => match self.store.get(&id) {
                    Some(entry) => {
                        info!(order_id = %id, "Selected");
                        let handler = Arc::clone(&handler);
                        let order = entry.order.clone();
                        let summary = entry.summary.clone();
                        selections.spawn(async move {
                            handler.order_selected(&order, &summary).await;
                        });
                    }
                    None => warn!(order_id = %id, "Selected order not found"),
                },
            }
        }

        while let Some(finished) = selections.join_next().await {
            log_selection(finished);
        }
        info!(size = self.store.len(), "Shutdown");
    }
}

fn log_selection(finished: Result<(), tokio::task::JoinError>) {
    if let Err(e) = finished {
        error!(error = %e, "Selection handler failed");
    }
}
