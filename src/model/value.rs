//! Loosely-typed input fields, decoded once at the serde boundary.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Display;

/// An opaque display value that the order API sends either as text or as a number
/// (`material_weight: 12.5` and `material_weight: "12.5"` both occur).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DisplayValue {
    Text(String),
    Number(serde_json::Number),
}

impl DisplayValue {
    /// True when the card leaves the value out: empty text or a zero.
    pub fn is_blank(&self) -> bool {
        match self {
            DisplayValue::Text(text) => text.is_empty(),
            DisplayValue::Number(number) => number.as_f64() == Some(0.0),
        }
    }
}

impl Display for DisplayValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayValue::Text(text) => f.write_str(text),
            DisplayValue::Number(number) => write!(f, "{}", number),
        }
    }
}

impl From<&str> for DisplayValue {
    fn from(text: &str) -> Self {
        DisplayValue::Text(text.to_string())
    }
}

impl From<String> for DisplayValue {
    fn from(text: String) -> Self {
        DisplayValue::Text(text)
    }
}

/// Destination factories of a single-trip order.
///
/// Older records carry a comma-separated string (`"B,C"`), newer ones an
/// already-split list (`["B", "C"]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Destinations {
    List(Vec<String>),
    Text(String),
}

impl Destinations {
    /// The first destination: the first comma-delimited token of the text form
    /// (untrimmed, possibly empty), or the first element of the list form.
    ///
    /// Returns `None` only when the text or the list as a whole is empty.
    pub fn first(&self) -> Option<&str> {
        match self {
            Destinations::Text(text) if text.is_empty() => None,
            Destinations::Text(text) => text.split(',').next(),
            Destinations::List(list) => list.first().map(String::as_str),
        }
    }

    /// The destination shown on the card's "To" line.
    ///
    /// The list form shows its first element; the text form is shown whole.
    pub fn label(&self) -> Option<&str> {
        let label = match self {
            Destinations::Text(text) => Some(text.as_str()),
            Destinations::List(list) => list.first().map(String::as_str),
        };
        label.filter(|dest| !dest.is_empty())
    }
}

impl From<&str> for Destinations {
    fn from(text: &str) -> Self {
        Destinations::Text(text.to_string())
    }
}

impl<S: Into<String>> FromIterator<S> for Destinations {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Destinations::List(iter.into_iter().map(Into::into).collect())
    }
}

/// The `trip_stages` field of a multi-trip order.
///
/// The API stores the legs as JSON text; some exports inline the decoded array
/// instead. Both are kept undecoded here so that a malformed payload never
/// fails the whole order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TripStages {
    Encoded(String),
    Inline(serde_json::Value),
}

impl TripStages {
    /// Empty text counts as no stages at all.
    pub fn is_empty(&self) -> bool {
        matches!(self, TripStages::Encoded(text) if text.is_empty())
    }
}

impl From<&str> for TripStages {
    fn from(text: &str) -> Self {
        TripStages::Encoded(text.to_string())
    }
}

/// Field decoders for [`Order`](crate::model::Order) that turn values of an
/// unexpected JSON type into `None` instead of rejecting the whole record.
pub(crate) mod lenient {
    use super::{Destinations, DisplayValue, Value};
    use serde::{Deserialize, Deserializer};

    /// Text of a scalar: strings as-is, numbers rendered. Anything else is dropped.
    pub(crate) fn scalar_text(value: Value) -> Option<String> {
        match value {
            Value::String(text) => Some(text),
            Value::Number(number) => Some(number.to_string()),
            _ => None,
        }
    }

    pub(crate) fn text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(Option::<Value>::deserialize(d)?.and_then(scalar_text))
    }

    pub(crate) fn display<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<DisplayValue>, D::Error> {
        Ok(match Option::<Value>::deserialize(d)? {
            Some(Value::String(text)) => Some(DisplayValue::Text(text)),
            Some(Value::Number(number)) => Some(DisplayValue::Number(number)),
            _ => None,
        })
    }

    /// Lists keep their scalar elements; text is kept whole.
    pub(crate) fn destinations<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<Destinations>, D::Error> {
        Ok(match Option::<Value>::deserialize(d)? {
            Some(Value::Array(items)) => Some(Destinations::List(
                items.into_iter().filter_map(scalar_text).collect(),
            )),
            Some(other) => scalar_text(other).map(Destinations::Text),
            None => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_value_accepts_text_and_numbers() {
        let text: DisplayValue = serde_json::from_str("\"12.5\"").unwrap();
        let number: DisplayValue = serde_json::from_str("12.5").unwrap();
        assert_eq!(text.to_string(), "12.5");
        assert_eq!(number.to_string(), "12.5");
        assert!(!number.is_blank());
        assert!(DisplayValue::from("").is_blank());
    }

    #[test]
    fn test_zero_is_blank() {
        assert!(DisplayValue::Number(0.into()).is_blank());
        assert!(serde_json::from_str::<DisplayValue>("0.0").unwrap().is_blank());
        assert!(!DisplayValue::from("0").is_blank());
    }

    #[test]
    fn test_first_destination_of_text_is_first_token() {
        let dests = Destinations::from("B,C");
        assert_eq!(dests.first(), Some("B"));
        assert_eq!(dests.label(), Some("B,C"));
    }

    #[test]
    fn test_first_destination_is_not_trimmed() {
        assert_eq!(Destinations::from(" B , C").first(), Some(" B "));
    }

    #[test]
    fn test_first_destination_of_list() {
        let dests: Destinations = serde_json::from_str(r#"["B", "C"]"#).unwrap();
        assert_eq!(dests.first(), Some("B"));
        assert_eq!(dests.label(), Some("B"));
    }

    #[test]
    fn test_empty_destinations_have_no_first() {
        assert_eq!(Destinations::from("").first(), None);
        assert_eq!(Destinations::List(vec![]).first(), None);
        assert_eq!(Destinations::List(vec![]).label(), None);
    }

    #[test]
    fn test_empty_first_token_is_kept() {
        assert_eq!(Destinations::from(",C").first(), Some(""));
        assert_eq!(Destinations::from(",C").label(), Some(",C"));
    }

    #[test]
    fn test_trip_stages_keeps_inline_arrays() {
        let stages: TripStages =
            serde_json::from_str(r#"[{"source": "A", "destination": "B"}]"#).unwrap();
        assert!(matches!(stages, TripStages::Inline(_)));
        assert!(!stages.is_empty());
        assert!(TripStages::from("").is_empty());
    }
}
