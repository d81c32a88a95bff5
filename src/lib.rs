//! # Order Board
//!
//! > **Display-ready summaries of transport orders.**
//!
//! This crate turns raw order records, as the order API delivers them, into the
//! values an order card shows: a status and transport classification, a route
//! description and a stage count. Around that pure core sits a small Tokio actor
//! that keeps loaded orders and routes card selections back to the host.
//!
//! ## 🏗️ Design
//!
//! ### Derivation never fails
//! Order records are loosely typed: destinations arrive as text or as a list,
//! trip stages as JSON text that may be malformed. [`deriver::derive`] decodes
//! once at the boundary and absorbs every malformed case into a fixed fallback
//! string, so a presentation layer never sees a decoding error.
//!
//! ### Concurrency Model
//! [`deriver::derive`] is pure and can be called from anywhere. The
//! [`board::OrderBoard`] runs in its own Tokio task and processes requests
//! sequentially, so its store needs no locks.
//!
//! ### Observability
//! `tracing` with structured fields throughout; see [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: the raw [`Order`](model::Order), its [`Stage`](model::Stage) legs and
//!   the derived [`OrderSummary`](model::OrderSummary).
//! - [`deriver`]: the pure summary derivation.
//! - [`card`]: display strings for one order and its selection callback.
//! - [`board`]: the order board actor and its client.
//! - [`import`]: reading order lists and printing one summary line per order.
//! - [`lifecycle`]: starting and stopping the board; tracing setup.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run -- orders.json
//! ORDER_BOARD_CONFIG=board.json cargo run -- orders.json
//! ```

pub mod board;
pub mod card;
pub mod deriver;
pub mod import;
pub mod lifecycle;
pub mod model;
