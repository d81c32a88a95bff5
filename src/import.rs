//! # Order Import
//!
//! Reads an exported order list and turns it into one summary line per order.
//!
//! The list is decoded element by element: a record that cannot be read as an
//! order at all is skipped with a warning instead of failing the whole list.

use crate::board::{BoardClient, BoardError};
use crate::model::{Order, OrderId, OrderSummary};
use serde_json::Value;
use std::io::Read;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors reading an order list.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Cannot read {origin}: {source}")]
    Read {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    /// The input is not a JSON array.
    #[error("Invalid order list: {0}")]
    NotAList(#[from] serde_json::Error),
}

/// Decodes a JSON array of orders, skipping elements that are not order records.
pub fn parse_orders(text: &str) -> Result<Vec<Order>, ImportError> {
    let records: Vec<Value> = serde_json::from_str(text)?;
    let orders = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<Order>(record) {
            Ok(order) => Some(order),
            Err(e) => {
                warn!(index, error = %e, "Skipping unreadable order");
                None
            }
        })
        .collect();
    Ok(orders)
}

/// Reads an order list from `path`, or from stdin when no path is given.
pub fn read_orders(path: Option<&str>) -> Result<Vec<Order>, ImportError> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path).map_err(|source| ImportError::Read {
            origin: path.to_string(),
            source,
        })?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| ImportError::Read {
                    origin: "stdin".to_string(),
                    source,
                })?;
            text
        }
    };
    parse_orders(&text)
}

/// `#<order number> [<status>] <trip kind>: <route>`
pub fn summary_line(id: &OrderId, summary: &OrderSummary) -> String {
    format!(
        "#{} [{}] {}: {}",
        id, summary.status_category, summary.trip_kind, summary.route_description
    )
}

/// Loads every order onto the board and returns one summary line per input
/// order, in input order.
///
/// Each line is taken right after its own load, so orders sharing a number
/// (including the empty one) still each get their line; the board keeps the last.
pub async fn load_and_summarize(
    client: &BoardClient,
    orders: Vec<Order>,
) -> Result<Vec<String>, BoardError> {
    let mut lines = Vec::with_capacity(orders.len());
    for order in orders {
        let id = client.load(order).await?;
        let summary = client.summary(id.clone()).await?;
        debug!(order_id = %id, "Summarized");
        lines.push(summary_line(&id, &summary));
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{StatusCategory, TransportCategory, TripKind};
    use std::io::Write;

    #[test]
    fn test_unreadable_records_are_skipped() {
        let orders = parse_orders(
            r#"[{"order_number": 1}, 5, null, {"order_number": null, "source_factory": 7}]"#,
        )
        .unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].order_number, OrderId::from("1"));
        assert_eq!(orders[1].order_number, OrderId::default());
        assert_eq!(orders[1].source(), Some("7"));
    }

    #[test]
    fn test_non_list_input_is_an_error() {
        assert!(matches!(
            parse_orders(r#"{"order_number": 1}"#),
            Err(ImportError::NotAList(_))
        ));
    }

    #[test]
    fn test_read_orders_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"order_number": "A-1", "material_type": true}}]"#).unwrap();

        let orders = read_orders(file.path().to_str()).unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].material_type, None);
    }

    #[test]
    fn test_summary_line() {
        let summary = OrderSummary {
            status_category: StatusCategory::InProgress,
            transport_category: TransportCategory::Single,
            trip_kind: TripKind::SingleTrip,
            route_description: "A → B".to_string(),
            stage_count: 0,
        };
        assert_eq!(
            summary_line(&OrderId::from("9"), &summary),
            "#9 [in_progress] Single Trip: A → B"
        );
    }
}
