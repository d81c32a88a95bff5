use crate::board::{self, BoardClient, BoardConfig, BoardError, SelectionHandler};
use tracing::{error, info};

/// The runtime orchestrator that owns a running [`OrderBoard`](crate::board::OrderBoard).
///
/// `BoardSystem` is responsible for:
/// - **Lifecycle Management**: Starting the board task and stopping it again
/// - **Dependency Wiring**: Injecting the [`SelectionHandler`] into the board
///
/// # Example
///
/// ```ignore
/// let system = BoardSystem::start(&BoardConfig::default(), ());
///
/// let id = system.client.load(order).await?;
/// let summary = system.client.summary(id).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct BoardSystem {
    /// Client for interacting with the board
    pub client: BoardClient,

    /// Task handle of the running board (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl BoardSystem {
    /// Creates the board and spawns it on the current Tokio runtime.
    pub fn start<H: SelectionHandler>(config: &BoardConfig, handler: H) -> Self {
        let (board, client) = board::new(config);
        let handle = tokio::spawn(board.run(handler));
        info!(buffer_size = config.buffer_size, "Board system started");

        Self { client, handle }
    }

    /// Gracefully shuts down the board.
    ///
    /// Drops the system's client and waits for the board task to finish. The board
    /// only stops once every clone of the client is gone, so callers must drop
    /// their own clones first.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the board shut down cleanly
    /// - `Err(BoardError::Join)` if the board task panicked
    pub async fn shutdown(self) -> Result<(), BoardError> {
        info!("Shutting down board system...");

        // Dropping the last sender closes the channel; `recv()` then yields None.
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!(error = %e, "Board task failed");
            return Err(BoardError::Join(e.to_string()));
        }

        info!("Board system shutdown complete.");
        Ok(())
    }
}
