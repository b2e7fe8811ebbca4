//! REST API Bindings
//!
//! Frontend bindings to the backend endpoints, organized by domain.

mod auth;
mod turma;

use gloo_net::http::Response;
use serde::Deserialize;
use thiserror::Error;

pub use auth::*;
pub use turma::*;

/// Backend base URL, fixed at build time.
///
/// Set `TURMAS_API_URI` when building against anything other than a local
/// backend.
pub(crate) fn base_url() -> &'static str {
    option_env!("TURMAS_API_URI").unwrap_or("http://localhost:3000")
}

/// A failed API call, classified by what the caller can do about it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// 401 - credentials rejected
    #[error("unauthorized")]
    Unauthorized,
    /// 409 - the server refused because of dependent data
    #[error("conflict")]
    Conflict { message: Option<String> },
    /// Any other non-success status
    #[error("unexpected status {status}")]
    Status { status: u16, message: Option<String> },
    /// The request never produced a response
    #[error("network failure: {0}")]
    Network(String),
}

impl ApiError {
    /// The message the server put in the error body, when it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Conflict { message } | ApiError::Status { message, .. } => {
                message.as_deref()
            }
            _ => None,
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// Error bodies may carry `{ "message": "..." }`.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

pub(crate) async fn body_message(response: &Response) -> Option<String> {
    response.json::<ErrorBody>().await.ok().and_then(|body| body.message)
}
