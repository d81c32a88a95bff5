//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing`
//! crate. It is called once, from the binary; library code only emits events.
//!
//! ## Configuration
//!
//! Log levels come from the `RUST_LOG` environment variable. The compact format
//! hides the module prefix (`with_target(false)`) and shows spans inline.
//!
//! ```bash
//! # Lifecycle and state changes
//! RUST_LOG=info cargo run -- orders.json
//!
//! # Full order payloads and stage decoding fallbacks
//! RUST_LOG=debug cargo run -- orders.json
//! ```
//!
//! ## What Gets Traced
//!
//! - **Board Lifecycle**: Startup, shutdown and final store size
//! - **Board Operations**: Load, Get, List, Remove and Select with `order_id` fields
//! - **Fallbacks**: Trip stage data that failed to decode (`debug`)
//! - **Dropped Selections**: Cards selected after the board closed or while it was full (`warn`)
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Board system started buffer_size=32
//! INFO Board started
//! INFO load: Loaded order_id=1042 replaced=false size=1
//! INFO Shutdown size=1
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
