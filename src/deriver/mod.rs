//! # Order Summary Derivation
//!
//! Maps a raw [`Order`] to a display-ready [`OrderSummary`]: status and transport
//! classification, a human-readable route and the number of trip stages.
//!
//! [`derive`] is total. Missing fields and malformed stage data degrade to one of
//! the fixed fallback strings ([`ROUTE_NOT_SPECIFIED`], [`NO_STAGES_DEFINED`],
//! [`INVALID_STAGE_DATA`]); nothing is returned to the caller as an error.
//!
//! ```rust
//! use order_board::deriver::derive;
//! use order_board::model::Order;
//!
//! let order = Order::multiple(
//!     "1042",
//!     r#"[{"source":"A","destination":"B"},{"source":"B","destination":"C"}]"#,
//! );
//! let summary = derive(&order);
//! assert_eq!(summary.route_description, "A → B, B → C");
//! assert_eq!(summary.stage_count, 2);
//! ```

pub mod error;

pub use error::*;

use crate::model::{
    Order, OrderSummary, Stage, StatusCategory, TransportCategory, TripKind, TripStages,
};
use serde::Deserialize;
use tracing::debug;

pub const ROUTE_NOT_SPECIFIED: &str = "Route not specified";
pub const NO_STAGES_DEFINED: &str = "No stages defined";
pub const INVALID_STAGE_DATA: &str = "Invalid stage data";

/// Derives the display summary of an order. Never fails and never mutates `order`.
pub fn derive(order: &Order) -> OrderSummary {
    let stages = order.trip_stages.as_ref().filter(|stages| !stages.is_empty());

    let (trip_kind, route_description, stage_count) =
        match (order.transport_type.as_deref(), stages) {
            (Some("single"), _) => (TripKind::SingleTrip, single_route(order), 0),
            (Some("multiple"), Some(stages)) => {
                let (route, count) = staged_route(&order.order_number.0, stages);
                (TripKind::MultipleTrip, route, count)
            }
            _ => (TripKind::Unknown, ROUTE_NOT_SPECIFIED.to_string(), 0),
        };

    OrderSummary {
        status_category: StatusCategory::classify(order.status.as_deref()),
        transport_category: TransportCategory::classify(order.transport_type.as_deref()),
        trip_kind,
        route_description,
        stage_count,
    }
}

/// Decodes the legs of a multi-trip order, preserving their order.
pub fn decode_stages(stages: &TripStages) -> Result<Vec<Stage>, StageDecodeError> {
    let decoded = match stages {
        TripStages::Encoded(text) => serde_json::from_str(text)?,
        TripStages::Inline(value) => Vec::<Stage>::deserialize(value)?,
    };
    Ok(decoded)
}

fn single_route(order: &Order) -> String {
    let destination = order.dest_factories.as_ref().and_then(|d| d.first());
    match (order.source(), destination) {
        (Some(source), Some(destination)) => format!("{} → {}", source, destination),
        _ => ROUTE_NOT_SPECIFIED.to_string(),
    }
}

fn staged_route(order_number: &str, stages: &TripStages) -> (String, usize) {
    match decode_stages(stages) {
        Err(e) => {
            debug!(order_number, error = %e, "Trip stages fell back to placeholder");
            (INVALID_STAGE_DATA.to_string(), 0)
        }
        Ok(stages) if stages.is_empty() => (NO_STAGES_DEFINED.to_string(), 0),
        Ok(stages) => {
            let route = stages
                .iter()
                .map(Stage::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            (route, stages.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Destinations;
    use pretty_assertions::assert_eq;

    const TWO_STAGES: &str =
        r#"[{"source":"A","destination":"B"},{"source":"B","destination":"C"}]"#;

    #[test]
    fn test_single_route_uses_first_destination() {
        let summary = derive(&Order::single("1", "A", "B,C"));
        assert_eq!(summary.route_description, "A → B");
        assert_eq!(summary.trip_kind, TripKind::SingleTrip);
        assert_eq!(summary.stage_count, 0);
    }

    #[test]
    fn test_single_route_accepts_destination_list() {
        let dests: Destinations = ["B", "C"].into_iter().collect();
        let summary = derive(&Order::single("1", "A", dests));
        assert_eq!(summary.route_description, "A → B");
    }

    #[test]
    fn test_single_route_missing_destination() {
        let order = Order {
            dest_factories: None,
            ..Order::single("1", "A", "B")
        };
        assert_eq!(derive(&order).route_description, ROUTE_NOT_SPECIFIED);
    }

    #[test]
    fn test_single_route_empty_fields_count_as_missing() {
        assert_eq!(derive(&Order::single("1", "A", "")).route_description, ROUTE_NOT_SPECIFIED);
        assert_eq!(derive(&Order::single("1", "", "B")).route_description, ROUTE_NOT_SPECIFIED);
    }

    #[test]
    fn test_single_route_keeps_empty_first_token() {
        assert_eq!(derive(&Order::single("1", "A", ",C")).route_description, "A → ");
        let dests: Destinations = ["", "C"].into_iter().collect();
        assert_eq!(derive(&Order::single("1", "A", dests)).route_description, "A → ");
    }

    #[test]
    fn test_multiple_route_joins_stages_in_order() {
        let summary = derive(&Order::multiple("1", TWO_STAGES));
        assert_eq!(
            summary,
            OrderSummary {
                status_category: StatusCategory::Open,
                transport_category: TransportCategory::Multiple,
                trip_kind: TripKind::MultipleTrip,
                route_description: "A → B, B → C".to_string(),
                stage_count: 2,
            }
        );
    }

    #[test]
    fn test_multiple_route_inline_stages() {
        let inline: TripStages = serde_json::from_str(TWO_STAGES).unwrap();
        let summary = derive(&Order::multiple("1", inline));
        assert_eq!(summary.route_description, "A → B, B → C");
        assert_eq!(summary.stage_count, 2);
    }

    #[test]
    fn test_multiple_route_empty_sequence() {
        let summary = derive(&Order::multiple("1", "[]"));
        assert_eq!(summary.route_description, NO_STAGES_DEFINED);
        assert_eq!(summary.stage_count, 0);
        assert_eq!(summary.trip_kind, TripKind::MultipleTrip);
    }

    #[test]
    fn test_multiple_route_malformed_text() {
        for text in ["not json", "{}", "42", "[1]", r#"[{"source":"A"}]"#, " "] {
            let summary = derive(&Order::multiple("1", text));
            assert_eq!(summary.route_description, INVALID_STAGE_DATA, "input {:?}", text);
            assert_eq!(summary.stage_count, 0);
        }
    }

    #[test]
    fn test_multiple_without_stages_is_unknown() {
        let order = Order {
            transport_type: Some("multiple".to_string()),
            ..Order::new("1")
        };
        let summary = derive(&order);
        assert_eq!(summary.trip_kind, TripKind::Unknown);
        assert_eq!(summary.transport_category, TransportCategory::Multiple);
        assert_eq!(summary.route_description, ROUTE_NOT_SPECIFIED);

        let summary = derive(&Order::multiple("1", ""));
        assert_eq!(summary.trip_kind, TripKind::Unknown);
    }

    #[test]
    fn test_unrecognized_transport_type() {
        let order = Order {
            transport_type: Some("rail".to_string()),
            ..Order::single("1", "A", "B")
        };
        let summary = derive(&order);
        assert_eq!(summary.trip_kind, TripKind::Unknown);
        assert_eq!(summary.transport_category, TransportCategory::Single);
        assert_eq!(summary.route_description, ROUTE_NOT_SPECIFIED);
    }

    #[test]
    fn test_decode_stages_extra_fields_ignored() {
        let stages = decode_stages(&TripStages::from(
            r#"[{"source":"A","destination":"B","distance_km":12}]"#,
        ))
        .unwrap();
        assert_eq!(stages, vec![Stage::new("A", "B")]);
    }

    #[test]
    fn test_decode_stages_reports_malformed() {
        let err = decode_stages(&TripStages::from("[")).unwrap_err();
        assert!(err.to_string().starts_with("Malformed trip stage data"));
    }
}
