pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod paginator;
