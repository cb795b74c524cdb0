//! Core domain types for Order Desk.
//!
//! An [`Order`] is a flat record whose identifier is chosen by the caller.
//! Orders are stored verbatim; the only interpretation the service applies is
//! to the `date` field, which is compacted for (type, date) lookups and parsed
//! as a calendar date for chronological ordering.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Characters stripped from a stored date before comparing it with a query date.
pub const DATE_SEPARATORS: [char; 3] = ['-', '/', '.'];

/// Unique identifier for an order
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(String);

impl OrderId {
    /// Creates a new `OrderId` from a string
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self(id)
    }

    /// Returns the inner string value
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Identifier or display name of a customer
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CustomerId(String);

impl CustomerId {
    /// Creates a new `CustomerId` from a string
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self(id)
    }

    /// Returns the inner string value
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CustomerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A single customer order.
///
/// The JSON shape is `{ "id", "title", "date", "type", "customer" }`, all
/// strings. `date` is expected in `YYYY-MM-DD` form but is kept exactly as
/// submitted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Caller-assigned identifier
    pub id: OrderId,
    /// Free text title
    pub title: String,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Free-form category tag
    #[serde(rename = "type")]
    pub order_type: String,
    /// Customer that placed the order
    pub customer: CustomerId,
}

impl Order {
    /// Creates a new order
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        date: impl Into<String>,
        order_type: impl Into<String>,
        customer: impl Into<String>,
    ) -> Self {
        Self {
            id: OrderId::new(id.into()),
            title: title.into(),
            date: date.into(),
            order_type: order_type.into(),
            customer: CustomerId::new(customer.into()),
        }
    }

    /// The stored date with every separator removed (`2024-01-15` → `20240115`).
    #[must_use]
    pub fn compact_date(&self) -> String {
        compact_date(&self.date)
    }

    /// Parses the stored date for chronological ordering.
    ///
    /// Accepts `YYYY-MM-DD` and, failing that, the compact `YYYYMMDD` form.
    /// Returns `None` for anything else.
    #[must_use]
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .ok()
            .or_else(|| parse_compact_date(&self.compact_date()))
    }

    /// Whether this order has the given type and its compacted date equals `date`.
    #[must_use]
    pub fn matches_type_and_date(&self, order_type: &str, date: &str) -> bool {
        self.order_type == order_type && self.compact_date() == date
    }
}

/// Removes [`DATE_SEPARATORS`] from a date string.
#[must_use]
pub fn compact_date(date: &str) -> String {
    date.chars().filter(|c| !DATE_SEPARATORS.contains(c)).collect()
}

fn parse_compact_date(digits: &str) -> Option<NaiveDate> {
    if digits.len() != 8 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let year = digits[0..4].parse().ok()?;
    let month = digits[4..6].parse().ok()?;
    let day = digits[6..8].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn order_serializes_type_field() {
        let order = Order::new("1", "Desk", "2024-01-15", "furniture", "alice");
        let json = serde_json::to_value(&order).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "1",
                "title": "Desk",
                "date": "2024-01-15",
                "type": "furniture",
                "customer": "alice",
            })
        );
    }

    #[test]
    fn order_deserializes_from_plain_strings() {
        let order: Order = serde_json::from_str(
            r#"{"id":"7","title":"Lamp","date":"2023-12-31","type":"B","customer":"bob"}"#,
        )
        .unwrap();

        assert_eq!(order.id.as_str(), "7");
        assert_eq!(order.order_type, "B");
        assert_eq!(order.customer, CustomerId::from("bob"));
    }

    #[test]
    fn compact_date_strips_separators() {
        assert_eq!(compact_date("2024-01-15"), "20240115");
        assert_eq!(compact_date("2024/01/15"), "20240115");
        assert_eq!(compact_date("20240115"), "20240115");
    }

    #[test]
    fn calendar_date_parses_dashed_and_compact_forms() {
        let dashed = Order::new("1", "t", "2024-02-29", "A", "c");
        let compact = Order::new("2", "t", "20240229", "A", "c");
        let expected = NaiveDate::from_ymd_opt(2024, 2, 29);

        assert_eq!(dashed.calendar_date(), expected);
        assert_eq!(compact.calendar_date(), expected);
    }

    #[test]
    fn calendar_date_rejects_garbage() {
        assert_eq!(Order::new("1", "t", "yesterday", "A", "c").calendar_date(), None);
        assert_eq!(Order::new("1", "t", "2023-02-30", "A", "c").calendar_date(), None);
    }

    #[test]
    fn matches_requires_exact_type_and_compacted_date() {
        let order = Order::new("1", "t", "2024-01-02", "A", "c");

        assert!(order.matches_type_and_date("A", "20240102"));
        assert!(!order.matches_type_and_date("a", "20240102"));
        assert!(!order.matches_type_and_date("A", "2024-01-02"));
        assert!(!order.matches_type_and_date("A", "20240101"));
    }
}
