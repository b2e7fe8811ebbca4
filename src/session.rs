//! Session Persistence
//!
//! The current professor identity, kept under a single localStorage key.

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::Professor;

const PROFESSOR_KEY: &str = "professor";

/// Where the session record lives.
#[derive(Clone)]
enum Backend {
    /// Browser localStorage, survives reloads.
    Local,
    /// Process-local slot for tests.
    Memory(Rc<RefCell<Option<String>>>),
}

/// Holder of the persisted professor identity.
///
/// Provided via context so screens receive it explicitly and tests can
/// substitute the in-memory backend. Absence is never an error: `read`
/// returns a professor with no usable id instead. No expiry, no multi-tab
/// coordination; last writer wins.
#[derive(Clone)]
pub struct SessionStore {
    backend: Backend,
}

impl SessionStore {
    pub fn browser() -> Self {
        Self { backend: Backend::Local }
    }

    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory(Rc::new(RefCell::new(None))),
        }
    }

    /// The stored professor, or the empty record when nothing usable is stored.
    pub fn read(&self) -> Professor {
        self.get()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// Persist the professor, overwriting any previous record.
    pub fn write(&self, professor: &Professor) {
        match serde_json::to_string(professor) {
            Ok(json) => self.set(&json),
            Err(e) => warn(&format!("Failed to serialize professor: {}", e)),
        }
    }

    /// Remove the persisted record. Safe to call when nothing is stored.
    pub fn clear(&self) {
        match &self.backend {
            Backend::Memory(slot) => {
                slot.borrow_mut().take();
            }
            Backend::Local => {
                if let Some(storage) = local_storage() {
                    if storage.remove_item(PROFESSOR_KEY).is_err() {
                        warn("Failed to remove professor from storage");
                    }
                }
            }
        }
    }

    fn get(&self) -> Option<String> {
        match &self.backend {
            Backend::Memory(slot) => slot.borrow().clone(),
            Backend::Local => {
                let storage = local_storage()?;
                match storage.get_item(PROFESSOR_KEY) {
                    Ok(value) => value,
                    Err(_) => {
                        warn("Failed to read professor from storage");
                        None
                    }
                }
            }
        }
    }

    fn set(&self, value: &str) {
        match &self.backend {
            Backend::Memory(slot) => {
                slot.borrow_mut().replace(value.to_string());
            }
            Backend::Local => {
                if let Some(storage) = local_storage() {
                    if storage.set_item(PROFESSOR_KEY, value).is_err() {
                        warn("Failed to write professor to storage");
                    }
                }
            }
        }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    let window = web_sys::window()?;
    match window.local_storage() {
        Ok(storage) => storage,
        Err(_) => {
            warn("localStorage unavailable");
            None
        }
    }
}

fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read_roundtrip() {
        let store = SessionStore::in_memory();
        let professor: Professor =
            serde_json::from_str(r#"{"id":7,"nome":"Prof X"}"#).unwrap();

        store.write(&professor);
        assert_eq!(store.read(), professor);
    }

    #[test]
    fn test_read_without_record_yields_empty_identity() {
        let store = SessionStore::in_memory();
        assert!(!store.read().has_id());
    }

    #[test]
    fn test_read_of_corrupt_record_yields_empty_identity() {
        let store = SessionStore::in_memory();
        store.set("not json");
        assert!(!store.read().has_id());
    }

    #[test]
    fn test_last_write_wins() {
        let store = SessionStore::in_memory();
        let first: Professor = serde_json::from_str(r#"{"id":1,"nome":"A"}"#).unwrap();
        let second: Professor = serde_json::from_str(r#"{"id":2,"nome":"B"}"#).unwrap();

        store.write(&first);
        store.write(&second);
        assert_eq!(store.read().id, 2);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = SessionStore::in_memory();
        let professor: Professor = serde_json::from_str(r#"{"id":7,"nome":"Prof X"}"#).unwrap();

        store.write(&professor);
        store.clear();
        store.clear();
        assert!(!store.read().has_id());
    }
}
