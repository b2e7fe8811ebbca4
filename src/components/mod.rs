//! UI Components
//!
//! Reusable Leptos components.

mod alert;
mod new_turma_dialog;
mod turma_list;

pub use alert::{AlertBox, AlertData};
pub use new_turma_dialog::NewTurmaDialog;
pub use turma_list::TurmaList;

/// Blocking browser alert, the surface for create/delete failures.
pub(crate) fn browser_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
