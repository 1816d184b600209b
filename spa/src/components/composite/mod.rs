pub mod navigation_bar;
pub mod orders_table;
pub mod paginator_view;
pub mod records_summary;
pub mod users_table;
