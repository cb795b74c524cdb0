//! Property tests for filtering and aggregation invariants.

#![allow(clippy::unwrap_used)]

use order_desk_core::types::compact_date;
use order_desk_core::{OrderSummary, RECENT_ORDERS_LIMIT};
use order_desk_testing::properties;
use order_desk_testing::store_with_orders;
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    #[test]
    fn filter_returns_exact_subset(
        orders in properties::orders(40),
        order_type in prop::sample::select(vec!["A", "B", "C"]),
        date in properties::date(),
    ) {
        let query_date = compact_date(&date);
        let expected: Vec<_> = orders
            .iter()
            .filter(|o| o.order_type == order_type && compact_date(&o.date) == query_date)
            .cloned()
            .collect();

        let matches = tokio_test::block_on(async {
            let (store, _) = store_with_orders(orders).await;
            store.find_by_type_and_date(order_type, &query_date).await
        });

        prop_assert_eq!(matches, expected);
    }

    #[test]
    fn summary_invariants(orders in properties::orders(40)) {
        let summary = OrderSummary::from_matches("A", &orders);

        prop_assert_eq!(summary.count, orders.len());
        prop_assert_eq!(summary.orders.len(), orders.len().min(RECENT_ORDERS_LIMIT));

        // Preview is chronologically ascending.
        let dates: Vec<_> = summary
            .orders
            .iter()
            .map(|id| orders.iter().find(|o| &o.id == id).unwrap().calendar_date())
            .collect();
        prop_assert!(dates.windows(2).all(|w| w[0] <= w[1]));

        // Customers are distinct and cover every match.
        let unique: HashSet<_> = summary.related_customers.iter().collect();
        prop_assert_eq!(unique.len(), summary.related_customers.len());
        let all: HashSet<_> = orders.iter().map(|o| &o.customer).collect();
        prop_assert_eq!(unique, all);
    }

    #[test]
    fn preview_holds_latest_dates(orders in properties::orders(40)) {
        let summary = OrderSummary::from_matches("A", &orders);

        // No order left out of the preview is newer than one kept in it.
        let kept: HashSet<_> = summary.orders.iter().collect();
        let oldest_kept = summary
            .orders
            .first()
            .map(|id| orders.iter().find(|o| &o.id == id).unwrap().calendar_date());

        if let Some(oldest_kept) = oldest_kept {
            for order in orders.iter().filter(|o| !kept.contains(&o.id)) {
                prop_assert!(order.calendar_date() <= oldest_kept);
            }
        }
    }
}
