use serde::{Deserialize, Deserializer, Serialize};

/// Body of every paginated listing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaginationRequest {
    pub page_size: usize,
    pub current_page: usize,
}

/// A page of records together with the request that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "E: Deserialize<'de>"))]
pub struct PaginatedResponse<E> {
    #[serde(flatten)]
    pub request: PaginationRequest,
    pub last_page: usize,
    pub total_records: usize,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub page_data: Vec<E>,
}

// The backend serializes an empty page as `null`.
fn null_as_empty<'de, D, E>(deserializer: D) -> Result<Vec<E>, D::Error>
where
    D: Deserializer<'de>,
    E: Deserialize<'de>,
{
    Option::<Vec<E>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Number of the last page needed to show `record_count` records, `page_size` at a time.
pub fn last_page_no(record_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    record_count.div_ceil(page_size)
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Widget {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub inventory_level: i64,
    pub price: i64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default)]
    pub plan_id: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub amount: i64,
    pub currency: String,
    #[serde(default)]
    pub last_four: String,
    #[serde(default)]
    pub expiry_month: u32,
    #[serde(default)]
    pub expiry_year: u32,
    #[serde(default)]
    pub payment_intent: String,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub bank_return_code: String,
    #[serde(default)]
    pub transaction_status_id: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub widget_id: i64,
    pub transaction_id: i64,
    pub customer_id: i64,
    pub status_id: i64,
    pub quantity: i64,
    pub amount: i64,
    #[serde(default)]
    pub widget: Widget,
    #[serde(default)]
    pub transaction: Transaction,
    #[serde(default)]
    pub customer: Customer,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}
