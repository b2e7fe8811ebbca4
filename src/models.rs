//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Turma data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turma {
    pub id: u32,
    pub nome: String,
}

/// The logged-in professor, as returned by the login endpoint.
///
/// Only `id` and `nome` are interpreted here; whatever else the server sends
/// is kept in `extra` so the record round-trips through storage intact.
/// `id == 0` means no usable identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Professor {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub nome: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Professor {
    pub fn has_id(&self) -> bool {
        self.id > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_professor_without_id_is_unusable() {
        let professor: Professor = serde_json::from_str("{}").unwrap();
        assert_eq!(professor.id, 0);
        assert!(!professor.has_id());
    }

    #[test]
    fn test_professor_keeps_unknown_server_fields() {
        let raw = r#"{"id":7,"nome":"Prof X","email":"t@x.com"}"#;
        let professor: Professor = serde_json::from_str(raw).unwrap();
        assert!(professor.has_id());
        assert_eq!(professor.nome, "Prof X");

        let back = serde_json::to_string(&professor).unwrap();
        let reparsed: serde_json::Value = serde_json::from_str(&back).unwrap();
        assert_eq!(reparsed["email"], "t@x.com");
    }

    #[test]
    fn test_turma_matches_backend_shape() {
        let turma: Turma = serde_json::from_str(r#"{"id":1,"nome":"A"}"#).unwrap();
        assert_eq!(turma, Turma { id: 1, nome: "A".to_string() });
    }
}
