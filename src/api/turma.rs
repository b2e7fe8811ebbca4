//! Turma Commands
//!
//! Frontend bindings for the turma CRUD endpoints.

use gloo_net::http::Request;
use serde::Serialize;

use super::{base_url, body_message, ApiError};
use crate::models::Turma;

#[derive(Serialize)]
struct CreateTurmaArgs<'a> {
    nome: &'a str,
    #[serde(rename = "professorId")]
    professor_id: u32,
}

/// GET /turma/{professorId}. The backend scopes the list to the professor.
pub async fn list_turmas(professor_id: u32) -> Result<Vec<Turma>, ApiError> {
    let response = Request::get(&format!("{}/turma/{}", base_url(), professor_id))
        .send()
        .await?;

    if response.ok() {
        Ok(response.json::<Vec<Turma>>().await?)
    } else {
        Err(ApiError::Status {
            status: response.status(),
            message: body_message(&response).await,
        })
    }
}

/// POST /turma. The response body is not trusted to carry the updated list;
/// callers re-read it with [`list_turmas`].
pub async fn create_turma(nome: &str, professor_id: u32) -> Result<(), ApiError> {
    let response = Request::post(&format!("{}/turma", base_url()))
        .json(&CreateTurmaArgs { nome, professor_id })?
        .send()
        .await?;

    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::Status {
            status: response.status(),
            message: body_message(&response).await,
        })
    }
}

/// DELETE /turma/{turmaId}. 204 confirms the removal; 409 means the turma
/// still has dependent data (e.g. atividades).
pub async fn delete_turma(turma_id: u32) -> Result<(), ApiError> {
    let response = Request::delete(&format!("{}/turma/{}", base_url(), turma_id))
        .send()
        .await?;

    match response.status() {
        204 => Ok(()),
        409 => Err(ApiError::Conflict {
            message: body_message(&response).await,
        }),
        status => Err(ApiError::Status {
            status,
            message: body_message(&response).await,
        }),
    }
}
