//! Operation Outcomes
//!
//! Pure classification of API results into what a screen does next, plus the
//! turma-list synchronization rules. Handlers stay thin: they translate an
//! outcome into signal updates, alerts and navigation.

use crate::api::ApiError;
use crate::models::{Professor, Turma};

pub const MSG_LOGIN_OK: &str = "Login realizado com sucesso!";
pub const MSG_LOGIN_REJECTED: &str = "Falha no login. Verifique suas credenciais.";
pub const MSG_SERVER_UNREACHABLE: &str =
    "Erro ao conectar com o servidor. Tente novamente mais tarde.";
pub const MSG_INVALID_PROFESSOR: &str = "Professor inválido. Faça login novamente.";
pub const MSG_CREATE_FAILED: &str = "Erro ao cadastrar turma";
pub const MSG_DELETE_FAILED: &str = "Falha ao excluir turma.";

/// What the login screen does with the authentication response.
#[derive(Debug, PartialEq)]
pub enum LoginOutcome {
    /// 200: persist the identity, show the success alert, then navigate home.
    Authenticated(Professor),
    /// 401: show the invalid-credentials alert.
    Rejected,
    /// Anything else: show the connectivity alert.
    Unreachable,
}

pub fn classify_login(result: Result<Professor, ApiError>) -> LoginOutcome {
    match result {
        Ok(professor) => LoginOutcome::Authenticated(professor),
        Err(ApiError::Unauthorized) => LoginOutcome::Rejected,
        Err(_) => LoginOutcome::Unreachable,
    }
}

/// Pre-network validation of a create request.
#[derive(Debug, PartialEq)]
pub enum CreateGate {
    Proceed,
    /// Whitespace-only name: nothing is sent and nothing is shown (the
    /// submit control is disabled in this state anyway).
    MissingName,
    /// No usable professor id: nothing is sent, the user is told to log in
    /// again.
    InvalidProfessor,
}

pub fn gate_create(nome: &str, professor_id: u32) -> CreateGate {
    if nome.trim().is_empty() {
        return CreateGate::MissingName;
    }
    if professor_id == 0 {
        return CreateGate::InvalidProfessor;
    }
    CreateGate::Proceed
}

/// Message shown when a create (or its follow-up list re-read) fails.
pub fn create_failure_message(err: &ApiError) -> String {
    err.server_message().unwrap_or(MSG_CREATE_FAILED).to_string()
}

/// What the home screen does with a delete response.
#[derive(Debug, PartialEq)]
pub enum DeleteOutcome {
    /// 204: drop the entry from the local list, no re-fetch.
    Removed(u32),
    /// 409: the turma has dependent data; list untouched, message surfaced.
    Blocked(String),
    /// Any other failure: list untouched, console diagnostic only.
    Ignored,
}

pub fn classify_delete(turma_id: u32, result: Result<(), ApiError>) -> DeleteOutcome {
    match result {
        Ok(()) => DeleteOutcome::Removed(turma_id),
        Err(ApiError::Conflict { message }) => {
            DeleteOutcome::Blocked(message.unwrap_or_else(|| MSG_DELETE_FAILED.to_string()))
        }
        Err(_) => DeleteOutcome::Ignored,
    }
}

/// Remove a turma from the local list by id.
///
/// The only optimistic mutation in the client; every other list change comes
/// from a fresh fetch. Order of the remaining entries is preserved.
pub fn remove_turma(turmas: &mut Vec<Turma>, turma_id: u32) {
    turmas.retain(|turma| turma.id != turma_id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turmas_ab() -> Vec<Turma> {
        vec![
            Turma { id: 1, nome: "A".to_string() },
            Turma { id: 2, nome: "B".to_string() },
        ]
    }

    #[test]
    fn test_login_ok_carries_identity() {
        let professor: Professor = serde_json::from_str(r#"{"id":7,"nome":"Prof X"}"#).unwrap();
        match classify_login(Ok(professor)) {
            LoginOutcome::Authenticated(p) => assert_eq!(p.id, 7),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_login_401_is_rejected() {
        assert_eq!(classify_login(Err(ApiError::Unauthorized)), LoginOutcome::Rejected);
    }

    #[test]
    fn test_login_other_failures_read_as_unreachable() {
        assert_eq!(
            classify_login(Err(ApiError::Network("connection refused".to_string()))),
            LoginOutcome::Unreachable
        );
        assert_eq!(
            classify_login(Err(ApiError::Status { status: 500, message: None })),
            LoginOutcome::Unreachable
        );
    }

    #[test]
    fn test_whitespace_name_never_reaches_the_network() {
        assert_eq!(gate_create("  ", 7), CreateGate::MissingName);
    }

    #[test]
    fn test_create_without_professor_id_is_rejected() {
        assert_eq!(gate_create("Math", 0), CreateGate::InvalidProfessor);
    }

    #[test]
    fn test_create_gate_passes_valid_input() {
        assert_eq!(gate_create("Math", 7), CreateGate::Proceed);
    }

    #[test]
    fn test_create_failure_prefers_server_message() {
        let err = ApiError::Status {
            status: 400,
            message: Some("Nome já existe".to_string()),
        };
        assert_eq!(create_failure_message(&err), "Nome já existe");
        assert_eq!(
            create_failure_message(&ApiError::Network("timeout".to_string())),
            MSG_CREATE_FAILED
        );
    }

    #[test]
    fn test_delete_204_removes_by_id() {
        let mut turmas = turmas_ab();
        match classify_delete(2, Ok(())) {
            DeleteOutcome::Removed(id) => remove_turma(&mut turmas, id),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(turmas, vec![Turma { id: 1, nome: "A".to_string() }]);
    }

    #[test]
    fn test_delete_409_leaves_list_and_surfaces_message() {
        let turmas = turmas_ab();
        let outcome = classify_delete(
            2,
            Err(ApiError::Conflict { message: Some("Turma possui atividades".to_string()) }),
        );
        assert_eq!(outcome, DeleteOutcome::Blocked("Turma possui atividades".to_string()));
        assert_eq!(turmas, turmas_ab());
    }

    #[test]
    fn test_delete_409_without_body_uses_fallback_message() {
        assert_eq!(
            classify_delete(2, Err(ApiError::Conflict { message: None })),
            DeleteOutcome::Blocked(MSG_DELETE_FAILED.to_string())
        );
    }

    #[test]
    fn test_delete_other_failures_are_not_applied() {
        assert_eq!(
            classify_delete(2, Err(ApiError::Status { status: 500, message: None })),
            DeleteOutcome::Ignored
        );
    }

    #[test]
    fn test_remove_of_absent_id_is_a_noop() {
        let mut turmas = turmas_ab();
        remove_turma(&mut turmas, 99);
        assert_eq!(turmas, turmas_ab());
    }
}
