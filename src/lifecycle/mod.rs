//! # System Lifecycle
//!
//! Starting, wiring and shutting down the order board, plus the tracing setup.
//!
//! ## Dependency Injection via Context
//!
//! The board is created without its [`SelectionHandler`](crate::board::SelectionHandler);
//! the handler is passed to `run()` when the board is spawned. This keeps
//! construction free of dependencies on whatever the host does with a selection.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of the channel
//! 2. **Board detects closure** - `receiver.recv()` returns `None`
//! 3. **Board logs its final size** and the task ends
//! 4. **Await completion** - [`BoardSystem::shutdown`] joins the task
//!
//! Cards keep only a weak sender and never delay shutdown.

pub mod board_system;
pub mod tracing;

pub use self::board_system::*;
pub use self::tracing::setup_tracing;
