pub mod listings_api;
