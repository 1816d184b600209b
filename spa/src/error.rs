use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] gloo_net::Error),

    #[error("unexpected response, status={status}, body={body}")]
    UnexpectedStatus { status: u16, body: String },
}
