//! # Order Card
//!
//! The display strings a presentation layer needs to render one order, plus the
//! "order selected" callback it invokes when the user interacts with the card.
//!
//! The callback carries no payload. Whoever builds the card decides what the
//! callback captures; [`BoardClient::card`](crate::board::BoardClient::card) wires
//! it back to the board, which resolves the order and notifies its
//! [`SelectionHandler`](crate::board::SelectionHandler).

use crate::deriver::derive;
use crate::model::{Order, OrderSummary};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::fmt::Debug;
use std::sync::Arc;

const NOT_AVAILABLE: &str = "N/A";

/// Caller-supplied "order selected" notification.
pub type SelectCallback = Arc<dyn Fn() + Send + Sync>;

/// Where the order goes, as shown under the material and weight lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoints {
    /// Single-trip orders show their source and destination.
    Direct { from: String, to: String },
    /// Every other order shows how many legs it has, e.g. `"3 stages"`.
    Staged { stages: String },
}

impl Endpoints {
    fn of(order: &Order, summary: &OrderSummary) -> Self {
        if order.transport_type.as_deref() == Some("single") {
            Endpoints::Direct {
                from: order.source().unwrap_or(NOT_AVAILABLE).to_string(),
                to: order
                    .dest_factories
                    .as_ref()
                    .and_then(|d| d.label())
                    .unwrap_or(NOT_AVAILABLE)
                    .to_string(),
            }
        } else {
            Endpoints::Staged {
                stages: stage_label(summary.stage_count),
            }
        }
    }
}

/// `"1 stage"`, `"2 stages"`; zero is singular.
pub fn stage_label(count: usize) -> String {
    format!("{} stage{}", count, if count > 1 { "s" } else { "" })
}

/// Parses the calendar date of a `created_at` timestamp.
///
/// Accepts RFC 3339, naive ISO timestamps with `T` or a space separator, and bare
/// dates. Anything else yields `None` and the date line is left out.
pub fn parse_created_on(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|ts| ts.date())
        .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
}

/// Display model of one order.
#[derive(Clone)]
pub struct OrderCard {
    pub order_label: String,
    pub status_label: String,
    pub trip_label: String,
    pub material: String,
    pub weight: String,
    pub endpoints: Endpoints,
    pub trucks: Option<String>,
    pub created_on: Option<NaiveDate>,
    pub summary: OrderSummary,
    on_select: SelectCallback,
}

impl OrderCard {
    /// Builds a card for `order`, deriving its summary.
    pub fn new<F>(order: &Order, on_select: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self::with_summary(order, derive(order), Arc::new(on_select))
    }

    /// Builds a card whose selection does nothing.
    pub fn detached(order: &Order) -> Self {
        Self::new(order, || {})
    }

    /// Builds a card from an already derived summary.
    pub fn with_summary(order: &Order, summary: OrderSummary, on_select: SelectCallback) -> Self {
        let status_label = match order.status.as_deref() {
            Some(status) if !status.is_empty() => status.to_string(),
            _ => "open".to_string(),
        };
        let weight = format!(
            "{} {}",
            order
                .material_weight
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            order.weight_unit.as_deref().unwrap_or_default()
        )
        .trim()
        .to_string();

        Self {
            order_label: format!("#{}", order.order_number),
            status_label,
            trip_label: summary.trip_kind.label().to_string(),
            material: order
                .material_type
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            weight,
            endpoints: Endpoints::of(order, &summary),
            trucks: order
                .trucks
                .as_ref()
                .filter(|trucks| !trucks.is_blank())
                .map(ToString::to_string),
            created_on: order.created_at.as_deref().and_then(parse_created_on),
            summary,
            on_select,
        }
    }

    /// Notifies the owner of this card that the user selected it.
    pub fn select(&self) {
        (self.on_select)();
    }

    /// The created date as rendered on the card.
    pub fn created_label(&self) -> Option<String> {
        self.created_on.map(|date| date.format("%Y-%m-%d").to_string())
    }
}

impl Debug for OrderCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderCard")
            .field("order_label", &self.order_label)
            .field("status_label", &self.status_label)
            .field("trip_label", &self.trip_label)
            .field("material", &self.material)
            .field("weight", &self.weight)
            .field("endpoints", &self.endpoints)
            .field("trucks", &self.trucks)
            .field("created_on", &self.created_on)
            .field("summary", &self.summary)
            .finish_non_exhaustive()
    }
}
