//! Auth Commands
//!
//! Frontend binding for the login endpoint.

use gloo_net::http::Request;
use serde::Serialize;

use super::{base_url, body_message, ApiError};
use crate::models::Professor;

#[derive(Serialize)]
struct LoginArgs<'a> {
    email: &'a str,
    senha: &'a str,
}

/// POST /login. 200 carries the professor identity; 401 means the
/// credentials were rejected.
pub async fn login(email: &str, senha: &str) -> Result<Professor, ApiError> {
    let response = Request::post(&format!("{}/login", base_url()))
        .json(&LoginArgs { email, senha })?
        .send()
        .await?;

    match response.status() {
        200 => Ok(response.json::<Professor>().await?),
        401 => Err(ApiError::Unauthorized),
        status => Err(ApiError::Status {
            status,
            message: body_message(&response).await,
        }),
    }
}
