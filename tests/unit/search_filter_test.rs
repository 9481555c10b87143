// Unit tests for the orders table search: case-insensitive substring match
// over the text columns, applied to a fetched snapshot.

use ordesk::orders::services::filter_orders;
use ordesk::orders::Order;

fn order(id: &str) -> Order {
    Order {
        id: id.to_string(),
        order_no: format!("ORD-{}", id),
        first_name: "Amina".to_string(),
        last_name: "Berrada".to_string(),
        address: "12 Rue des Orangers, Casablanca".to_string(),
        phone: "+212600000000".to_string(),
        instagram_url: Some("https://instagram.com/amina.shop".to_string()),
        product_name: Some("Caftan".to_string()),
        comment: Some("Urgent delivery".to_string()),
        amount_purchase: None,
        amount_sale: None,
        amount_deposit: None,
        created_at: "2024-01-15".to_string(),
        user_id: "u1".to_string(),
    }
}

#[test]
fn blank_query_keeps_everything() {
    let orders = vec![order("1"), order("2")];
    assert_eq!(filter_orders(orders.clone(), None).len(), 2);
    assert_eq!(filter_orders(orders.clone(), Some("")).len(), 2);
    assert_eq!(filter_orders(orders, Some("   ")).len(), 2);
}

#[test]
fn matches_are_case_insensitive() {
    let orders = vec![order("1")];
    assert_eq!(filter_orders(orders.clone(), Some("CAFTAN")).len(), 1);
    assert_eq!(filter_orders(orders.clone(), Some("amina")).len(), 1);
    assert_eq!(filter_orders(orders, Some("BERRADA")).len(), 1);
}

#[test]
fn every_text_column_is_searchable() {
    let orders = vec![order("1")];
    for needle in [
        "ORD-1",          // order_no
        "Amina",          // first_name
        "Berrada",        // last_name
        "+2126",          // phone
        "Orangers",       // address
        "instagram.com",  // instagram_url
        "Caftan",         // product_name
        "Urgent",         // comment
    ] {
        assert_eq!(
            filter_orders(orders.clone(), Some(needle)).len(),
            1,
            "needle {:?} should match",
            needle
        );
    }
}

#[test]
fn non_matching_query_filters_everything_out() {
    let orders = vec![order("1"), order("2")];
    assert!(filter_orders(orders, Some("zellige")).is_empty());
}

#[test]
fn only_matching_orders_survive() {
    let mut tagged = order("1");
    tagged.product_name = Some("Babouches".to_string());
    let orders = vec![tagged, order("2")];

    let filtered = filter_orders(orders, Some("babouches"));
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "1");
}

#[test]
fn absent_optional_fields_do_not_match() {
    let mut bare = order("1");
    bare.instagram_url = None;
    bare.product_name = None;
    bare.comment = None;

    assert!(filter_orders(vec![bare], Some("instagram")).is_empty());
}

#[test]
fn query_is_trimmed_before_matching() {
    let orders = vec![order("1")];
    assert_eq!(filter_orders(orders, Some("  Caftan  ")).len(), 1);
}
