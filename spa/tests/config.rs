use std::str::FromStr;

use spa::config::{Listing, SpaConfig, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};

#[test]
fn test_defaults_without_query() {
    let config = SpaConfig::from_query("");

    assert_eq!(config, SpaConfig::default());
    assert_eq!(config.listing, Listing::Sales);
    assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(config.current_page, DEFAULT_PAGE);
}

#[test]
fn test_query_overrides() {
    let config = SpaConfig::from_query("?listing=users&page_size=10&page=4");

    assert_eq!(config.listing, Listing::Users);
    assert_eq!(config.page_size, 10);
    assert_eq!(config.current_page, 4);
}

#[test]
fn test_invalid_values_keep_defaults() {
    let config = SpaConfig::from_query("listing=orders&page_size=0&page=-2&theme=dark");

    assert_eq!(config, SpaConfig::default());
}

#[test]
fn test_listing_parsing_and_endpoints() -> anyhow::Result<()> {
    assert_eq!(Listing::from_str("Subscriptions")?, Listing::Subscriptions);
    assert_eq!(Listing::from_str("SALES")?, Listing::Sales);
    assert!(Listing::from_str("widgets").is_err());

    assert_eq!(Listing::Sales.endpoint(), "/api/admin/all-sales");
    assert_eq!(Listing::Subscriptions.endpoint(), "/api/admin/all-subscriptions");
    assert_eq!(Listing::Users.endpoint(), "/api/admin/all-users");
    assert_eq!(Listing::Users.title(), "All Users");
    Ok(())
}
