use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use shared::{PaginatedResponse, PaginationRequest};

use crate::{config::Listing, error::ApiError};

pub async fn fetch_page<E: DeserializeOwned>(
    listing: Listing,
    request: &PaginationRequest,
) -> Result<PaginatedResponse<E>, ApiError> {
    let endpoint = listing.endpoint();
    let response = Request::post(&endpoint)
        .header("Content-Type", "application/json")
        .json(request)?
        .send()
        .await?;
    log::info!(
        "Api fetch page, endpoint={endpoint}, request={}",
        serde_json::to_string(request).unwrap_or_default()
    );

    if response.ok() {
        Ok(response.json::<PaginatedResponse<E>>().await?)
    } else {
        let status = response.status();
        let body = response.text().await?;
        log::warn!("Api fetch page, endpoint={endpoint}, status={status}, response={body}");
        Err(ApiError::UnexpectedStatus { status, body })
    }
}
