use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Status classification used to style the status chip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCategory {
    #[default]
    Open,
    InProgress,
    Closed,
}

impl StatusCategory {
    /// Classifies a raw status; missing or unrecognized values are `Open`.
    pub fn classify(status: Option<&str>) -> Self {
        match status {
            Some("closed") => StatusCategory::Closed,
            Some("in_progress") => StatusCategory::InProgress,
            _ => StatusCategory::Open,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCategory::Open => "open",
            StatusCategory::InProgress => "in_progress",
            StatusCategory::Closed => "closed",
        }
    }
}

impl Display for StatusCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transport classification used to style the trip chip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportCategory {
    #[default]
    Single,
    Multiple,
}

impl TransportCategory {
    /// Only the literal `multiple` is [`TransportCategory::Multiple`].
    pub fn classify(transport_type: Option<&str>) -> Self {
        match transport_type {
            Some("multiple") => TransportCategory::Multiple,
            _ => TransportCategory::Single,
        }
    }
}

/// The kind of trip shown on the trip chip.
///
/// Differs from [`TransportCategory`] in that an order whose transport type is
/// unrecognized, or a multi-trip order without any stage data, is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripKind {
    SingleTrip,
    MultipleTrip,
    Unknown,
}

impl TripKind {
    pub fn label(&self) -> &'static str {
        match self {
            TripKind::SingleTrip => "Single Trip",
            TripKind::MultipleTrip => "Multiple Trip",
            TripKind::Unknown => "Unknown",
        }
    }
}

impl Display for TripKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Display-ready summary of one [`Order`](crate::model::Order).
///
/// Produced by [`derive`](crate::deriver::derive); a new value every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub status_category: StatusCategory,
    pub transport_category: TransportCategory,
    pub trip_kind: TripKind,
    pub route_description: String,
    /// Number of decoded stages; 0 unless the order is a decodable multi-trip order.
    pub stage_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert_eq!(StatusCategory::classify(Some("closed")), StatusCategory::Closed);
        assert_eq!(StatusCategory::classify(Some("in_progress")), StatusCategory::InProgress);
        assert_eq!(StatusCategory::classify(Some("open")), StatusCategory::Open);
        assert_eq!(StatusCategory::classify(Some("Closed")), StatusCategory::Open);
        assert_eq!(StatusCategory::classify(None), StatusCategory::Open);
    }

    #[test]
    fn test_transport_classification() {
        assert_eq!(TransportCategory::classify(Some("multiple")), TransportCategory::Multiple);
        assert_eq!(TransportCategory::classify(Some("single")), TransportCategory::Single);
        assert_eq!(TransportCategory::classify(Some("rail")), TransportCategory::Single);
        assert_eq!(TransportCategory::classify(None), TransportCategory::Single);
    }

    #[test]
    fn test_summary_serializes_snake_case_tags() {
        let summary = OrderSummary {
            status_category: StatusCategory::InProgress,
            transport_category: TransportCategory::Multiple,
            trip_kind: TripKind::MultipleTrip,
            route_description: "A → B".to_string(),
            stage_count: 1,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["status_category"], "in_progress");
        assert_eq!(json["trip_kind"], "multiple_trip");
    }
}
