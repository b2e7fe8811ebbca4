//! Turma List Component
//!
//! The "Suas Turmas" section: one row per turma with delete and open
//! actions. A confirmed delete (204) drops the row locally without a
//! re-fetch; a 409 surfaces the server's reason and leaves the list alone.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::location::State;
use leptos_router::NavigateOptions;

use super::browser_alert;
use crate::api;
use crate::models::Turma;
use crate::outcomes::{classify_delete, remove_turma, DeleteOutcome};
use crate::pages::AtividadesParams;

#[component]
pub fn TurmaList(
    turmas: ReadSignal<Vec<Turma>>,
    set_turmas: WriteSignal<Vec<Turma>>,
) -> impl IntoView {
    let navigate = use_navigate();

    let excluir = move |turma_id: u32| {
        spawn_local(async move {
            match classify_delete(turma_id, api::delete_turma(turma_id).await) {
                DeleteOutcome::Removed(id) => {
                    set_turmas.update(|turmas| remove_turma(turmas, id));
                }
                DeleteOutcome::Blocked(message) => browser_alert(&message),
                DeleteOutcome::Ignored => {
                    web_sys::console::error_1(&"Erro ao excluir turma".into());
                }
            }
        });
    };

    view! {
        <section class="turma-section">
            <h2>"Suas Turmas"</h2>
            <Show
                when=move || !turmas.get().is_empty()
                fallback=|| view! { <p class="empty-hint">"Nenhuma turma cadastrada ainda."</p> }
            >
                <ul class="turma-list">
                    <For
                        each=move || turmas.get()
                        key=|turma| turma.id
                        children=move |turma| {
                            let navigate = navigate.clone();
                            let id = turma.id;
                            let nome = turma.nome.clone();
                            let abrir = move |_| {
                                let params = AtividadesParams { turma_id: id, nome: nome.clone() };
                                match serde_wasm_bindgen::to_value(&params) {
                                    Ok(state) => navigate(
                                        "/atividades",
                                        NavigateOptions {
                                            state: State::new(Some(state)),
                                            ..Default::default()
                                        },
                                    ),
                                    Err(e) => web_sys::console::error_1(
                                        &format!("Erro ao abrir atividades: {}", e).into(),
                                    ),
                                }
                            };

                            view! {
                                <li class="turma-row">
                                    <span class="turma-label">
                                        {format!("{} — {}", turma.id, turma.nome)}
                                    </span>
                                    <div class="turma-actions">
                                        <button class="delete-btn" on:click=move |_| excluir(id)>
                                            "Excluir"
                                        </button>
                                        <button class="open-btn" on:click=abrir>
                                            "Visualizar"
                                        </button>
                                    </div>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}
