use std::rc::Rc;

use shared::User;
use spa::{
    components::composite::{orders_table::format_currency, records_summary::record_range},
    config::SpaConfig,
    pages::listing::{ListingMessage, ListingState, PageData, TableRows},
};
use yew::Reducible;

fn users_page() -> PageData {
    PageData {
        rows: TableRows::Users(vec![User {
            id: 1,
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
        }]),
        current_page: 2,
        last_page: 4,
        total_records: 10,
    }
}

#[test]
fn test_loaded_page_replaces_error_and_loading() {
    let state = Rc::new(ListingState::default())
        .reduce(ListingMessage::Loading)
        .reduce(ListingMessage::Failed("boom".to_owned()));
    assert!(!state.is_loading);
    assert_eq!(state.error_message.as_deref(), Some("boom"));

    let state = state
        .reduce(ListingMessage::Loading)
        .reduce(ListingMessage::Loaded(users_page()));

    assert!(!state.is_loading);
    assert!(state.error_message.is_none());
    assert_eq!(state.page, Some(users_page()));
}

#[test]
fn test_failure_keeps_previous_page() {
    let state = Rc::new(ListingState::default())
        .reduce(ListingMessage::Loaded(users_page()))
        .reduce(ListingMessage::Failed("timeout".to_owned()));

    assert_eq!(state.page, Some(users_page()));

    let state = state.reduce(ListingMessage::ClearError);
    assert!(state.error_message.is_none());
}

#[test]
fn test_table_rows_len() {
    assert_eq!(users_page().rows.len(), 1);
    assert!(TableRows::Orders(Vec::new()).is_empty());
}

#[test]
fn test_record_range() {
    assert_eq!(record_range(1, 3, 3), Some((1, 3)));
    assert_eq!(record_range(4, 3, 2), Some((10, 11)));
    assert_eq!(record_range(2, 10, 0), None);
    assert_eq!(record_range(0, 10, 5), None);
}

#[test]
fn test_record_range_with_huge_page_size() {
    let config = SpaConfig::from_query(&format!("page_size={}", usize::MAX));
    assert_eq!(config.page_size, usize::MAX);

    assert_eq!(record_range(3, config.page_size, 2), None);
    assert_eq!(record_range(1, config.page_size, 2), Some((1, 2)));
    assert_eq!(record_range(2, usize::MAX - 1, 3), None);
}

#[test]
fn test_format_currency() {
    assert_eq!(format_currency(1000, "cad"), "10.00 CAD");
    assert_eq!(format_currency(1999, "usd"), "19.99 USD");
    assert_eq!(format_currency(5, ""), "0.05");
    assert_eq!(format_currency(-250, "eur"), "-2.50 EUR");
}
