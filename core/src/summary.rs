//! Aggregation over orders sharing a (type, date) pair.
//!
//! The summary reports how many orders matched, a preview of the most recent
//! ten ids in chronological order, and every distinct customer involved. The
//! preview is truncated but the customer list is not: it always covers all
//! matches.

use crate::types::{CustomerId, Order, OrderId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Maximum number of order ids reported in [`OrderSummary::orders`].
pub const RECENT_ORDERS_LIMIT: usize = 10;

/// Result of an aggregation query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    /// The queried type, echoed back
    #[serde(rename = "type")]
    pub order_type: String,
    /// Number of matching orders, before truncation
    pub count: usize,
    /// Ids of the most recent matches, oldest first
    pub orders: Vec<OrderId>,
    /// Distinct customers across all matches, in first-seen order
    pub related_customers: Vec<CustomerId>,
}

impl OrderSummary {
    /// An empty summary for `order_type`.
    #[must_use]
    pub fn empty(order_type: impl Into<String>) -> Self {
        Self {
            order_type: order_type.into(),
            count: 0,
            orders: Vec::new(),
            related_customers: Vec::new(),
        }
    }

    /// Builds a summary from the orders matching a query.
    ///
    /// Matches are stably sorted by calendar date, so orders sharing a date
    /// keep their relative order. Orders whose date does not parse sort
    /// before every dated order.
    #[must_use]
    pub fn from_matches(order_type: impl Into<String>, matches: &[Order]) -> Self {
        let mut summary = Self::empty(order_type);
        if matches.is_empty() {
            return summary;
        }

        summary.count = matches.len();

        let mut by_date: Vec<&Order> = matches.iter().collect();
        by_date.sort_by_key(|order| order.calendar_date());

        let skip = by_date.len().saturating_sub(RECENT_ORDERS_LIMIT);
        summary.orders = by_date[skip..]
            .iter()
            .map(|order| order.id.clone())
            .collect();

        let mut seen = HashSet::new();
        for order in matches {
            if seen.insert(&order.customer) {
                summary.related_customers.push(order.customer.clone());
            }
        }

        summary
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn order(id: &str, date: &str, customer: &str) -> Order {
        Order::new(id, format!("order {id}"), date, "A", customer)
    }

    fn ids(summary: &OrderSummary) -> Vec<&str> {
        summary.orders.iter().map(OrderId::as_str).collect()
    }

    #[test]
    fn empty_matches_echo_type() {
        let summary = OrderSummary::from_matches("A", &[]);

        assert_eq!(summary, OrderSummary::empty("A"));
        assert_eq!(summary.order_type, "A");
    }

    #[test]
    fn single_match() {
        let summary = OrderSummary::from_matches("A", &[order("2", "2024-01-02", "Y")]);

        assert_eq!(summary.count, 1);
        assert_eq!(ids(&summary), vec!["2"]);
        assert_eq!(summary.related_customers, vec![CustomerId::from("Y")]);
    }

    #[test]
    fn keeps_ten_latest_in_ascending_order() {
        // Inserted newest first so sorting is observable.
        let matches: Vec<Order> = (1..=12)
            .rev()
            .map(|day| order(&day.to_string(), &format!("2024-01-{day:02}"), "X"))
            .collect();

        let summary = OrderSummary::from_matches("A", &matches);

        assert_eq!(summary.count, 12);
        assert_eq!(
            ids(&summary),
            vec!["3", "4", "5", "6", "7", "8", "9", "10", "11", "12"]
        );
    }

    #[test]
    fn same_date_keeps_insertion_order() {
        let matches: Vec<Order> = (0..12)
            .map(|n| order(&format!("o{n}"), "2024-03-01", "X"))
            .collect();

        let summary = OrderSummary::from_matches("A", &matches);

        assert_eq!(summary.count, 12);
        assert_eq!(summary.orders.len(), RECENT_ORDERS_LIMIT);
        assert_eq!(summary.orders.first().unwrap().as_str(), "o2");
        assert_eq!(summary.orders.last().unwrap().as_str(), "o11");
    }

    #[test]
    fn customers_cover_truncated_matches() {
        // The only order for "early" is the oldest and falls out of the preview.
        let mut matches = vec![order("0", "2023-12-31", "early")];
        matches.extend(
            (1..=10).map(|day| order(&day.to_string(), &format!("2024-01-{day:02}"), "late")),
        );

        let summary = OrderSummary::from_matches("A", &matches);

        assert!(!summary.orders.contains(&OrderId::from("0")));
        assert_eq!(
            summary.related_customers,
            vec![CustomerId::from("early"), CustomerId::from("late")]
        );
    }

    #[test]
    fn unparseable_dates_sort_first() {
        let matches = vec![
            order("dated", "2024-01-01", "X"),
            order("undated", "someday", "X"),
        ];

        let summary = OrderSummary::from_matches("A", &matches);

        assert_eq!(ids(&summary), vec!["undated", "dated"]);
    }

    #[test]
    fn summary_json_shape() {
        let summary = OrderSummary::from_matches("A", &[order("1", "2024-01-01", "X")]);
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "type": "A",
                "count": 1,
                "orders": ["1"],
                "related_customers": ["X"],
            })
        );
    }
}
