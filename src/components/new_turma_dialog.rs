//! New Turma Dialog Component
//!
//! "+ Nova Turma" trigger plus the modal create form. Creation never trusts
//! its own response for the list: on success the full list is fetched again
//! and handed back through `set_turmas`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::browser_alert;
use crate::api;
use crate::models::Turma;
use crate::outcomes::{create_failure_message, gate_create, CreateGate, MSG_INVALID_PROFESSOR};

#[component]
pub fn NewTurmaDialog(
    professor_id: u32,
    set_turmas: WriteSignal<Vec<Turma>>,
) -> impl IntoView {
    let (open, set_open) = signal(false);
    let (nome, set_nome) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let name = nome.get();
        match gate_create(&name, professor_id) {
            CreateGate::MissingName => return,
            CreateGate::InvalidProfessor => {
                browser_alert(MSG_INVALID_PROFESSOR);
                return;
            }
            CreateGate::Proceed => {}
        }

        set_submitting.set(true);
        spawn_local(async move {
            match api::create_turma(&name, professor_id).await {
                Ok(()) => {
                    set_nome.set(String::new());
                    set_open.set(false);
                    // Create succeeded; the list is re-read rather than patched.
                    match api::list_turmas(professor_id).await {
                        Ok(turmas) => set_turmas.set(turmas),
                        Err(err) => {
                            web_sys::console::error_1(
                                &format!("Erro ao cadastrar turma: {}", err).into(),
                            );
                            browser_alert(&create_failure_message(&err));
                        }
                    }
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("Erro ao cadastrar turma: {}", err).into(),
                    );
                    browser_alert(&create_failure_message(&err));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="new-turma">
            <button class="new-turma-trigger" on:click=move |_| set_open.set(true)>
                "+ Nova Turma"
            </button>

            <Show when=move || open.get()>
                <div class="dialog-overlay">
                    <div class="dialog">
                        <h3 class="dialog-title">"Cadastrar nova turma"</h3>
                        <p class="dialog-description">
                            "Informe o nome da turma para adicioná-la à sua lista."
                        </p>
                        <form on:submit=on_submit>
                            <input
                                type="text"
                                placeholder="Nome da turma"
                                required=true
                                prop:value=move || nome.get()
                                on:input=move |ev| set_nome.set(event_target_value(&ev))
                            />
                            <div class="dialog-footer">
                                <button
                                    type="button"
                                    class="cancel-btn"
                                    on:click=move |_| set_open.set(false)
                                >
                                    "Cancelar"
                                </button>
                                <button
                                    type="submit"
                                    disabled=move || {
                                        submitting.get() || nome.get().trim().is_empty()
                                    }
                                >
                                    {move || if submitting.get() { "Enviando..." } else { "Salvar" }}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </Show>
        </div>
    }
}
