use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// One leg of a multi-trip order.
///
/// Stage order within an order is the order the legs are driven in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub source: String,
    pub destination: String,
}

impl Stage {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} → {}", self.source, self.destination)
    }
}
