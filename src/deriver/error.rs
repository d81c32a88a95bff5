//! Error types for trip stage decoding.

use thiserror::Error;

/// A nested structured field failed to decode.
///
/// Never escapes [`derive`](crate::deriver::derive): it is absorbed into the
/// `"Invalid stage data"` route description.
#[derive(Debug, Error)]
pub enum StageDecodeError {
    /// The stage data is not a JSON array of `{source, destination}` objects.
    #[error("Malformed trip stage data: {0}")]
    Malformed(#[from] serde_json::Error),
}
