use crate::model::value::lenient;
use crate::model::{Destinations, DisplayValue, TripStages};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Display;

/// Type-safe identifier for Orders (the order number).
///
/// Decodes from text or a number; `null` and other shapes give the empty id.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Value", into = "String")]
pub struct OrderId(pub String);

impl From<Value> for OrderId {
    fn from(value: Value) -> Self {
        Self(lenient::scalar_text(value).unwrap_or_default())
    }
}

impl From<OrderId> for String {
    fn from(id: OrderId) -> Self {
        id.0
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Represents a transport order as delivered by the order API.
///
/// # Order Board
/// Orders are loaded into an [`OrderBoard`](crate::board::OrderBoard), which derives
/// their [`OrderSummary`](crate::model::OrderSummary) once at load time.
///
/// Every field except the order number is optional; loosely-typed fields are
/// decoded into [`Destinations`], [`TripStages`] and [`DisplayValue`].
/// Numbers are accepted wherever text is expected, and a field of any other
/// unexpected type is read as absent rather than failing the record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    pub order_number: OrderId,
    #[serde(deserialize_with = "lenient::text")]
    pub status: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub transport_type: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub source_factory: Option<String>,
    #[serde(deserialize_with = "lenient::destinations")]
    pub dest_factories: Option<Destinations>,
    pub trip_stages: Option<TripStages>,
    #[serde(deserialize_with = "lenient::display")]
    pub material_type: Option<DisplayValue>,
    #[serde(deserialize_with = "lenient::display")]
    pub material_weight: Option<DisplayValue>,
    #[serde(deserialize_with = "lenient::text")]
    pub weight_unit: Option<String>,
    #[serde(deserialize_with = "lenient::display")]
    pub trucks: Option<DisplayValue>,
    #[serde(deserialize_with = "lenient::text")]
    pub created_at: Option<String>,
}

impl Order {
    /// Creates an Order with only its number set.
    ///
    /// # Arguments
    /// * `order_number` - Order number shown on the card
    ///
    /// # Notes
    /// Remaining fields are filled with struct update syntax:
    /// `Order { status: Some("closed".into()), ..Order::new("1042") }`.
    pub fn new(order_number: impl Into<OrderId>) -> Self {
        Self {
            order_number: order_number.into(),
            ..Self::default()
        }
    }

    /// A single-trip order from `source` to `dest_factories`.
    pub fn single(
        order_number: impl Into<OrderId>,
        source: impl Into<String>,
        dest_factories: impl Into<Destinations>,
    ) -> Self {
        Self {
            transport_type: Some("single".to_string()),
            source_factory: Some(source.into()),
            dest_factories: Some(dest_factories.into()),
            ..Self::new(order_number)
        }
    }

    /// A multi-trip order whose legs are given as JSON text.
    pub fn multiple(order_number: impl Into<OrderId>, trip_stages: impl Into<TripStages>) -> Self {
        Self {
            transport_type: Some("multiple".to_string()),
            trip_stages: Some(trip_stages.into()),
            ..Self::new(order_number)
        }
    }

    /// The source factory, treating an empty string as absent.
    pub fn source(&self) -> Option<&str> {
        self.source_factory.as_deref().filter(|s| !s.is_empty())
    }
}
