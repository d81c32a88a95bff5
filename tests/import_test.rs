use order_board::board::BoardConfig;
use order_board::import::{load_and_summarize, parse_orders};
use order_board::lifecycle::BoardSystem;
use pretty_assertions::assert_eq;

const ORDERS: &str = r#"[
    {"order_number": "1", "status": "closed", "transport_type": "single",
     "source_factory": "A", "dest_factories": "B"},
    "not an order",
    {"order_number": 1, "transport_type": "multiple", "trip_stages": "[]"},
    {"transport_type": "single", "source_factory": "A", "dest_factories": ",C"},
    {"order_number": null, "status": "in_progress", "material_type": true}
]"#;

/// Every readable record gets its own line, in input order, even when order
/// numbers repeat or are missing.
#[tokio::test]
async fn test_one_line_per_input_order() {
    let orders = parse_orders(ORDERS).expect("Failed to parse orders");
    assert_eq!(orders.len(), 4);

    let system = BoardSystem::start(&BoardConfig::default(), ());
    let lines = load_and_summarize(&system.client, orders)
        .await
        .expect("Failed to summarize");

    assert_eq!(
        lines,
        vec![
            "#1 [closed] Single Trip: A → B",
            "#1 [open] Multiple Trip: No stages defined",
            "# [open] Single Trip: A → ",
            "# [in_progress] Unknown: Route not specified",
        ]
    );

    // The board itself keeps one entry per order number
    let summaries = system.client.summaries().await.unwrap();
    assert_eq!(summaries.len(), 2);

    system.shutdown().await.unwrap();
}
