//! Atividades Screen
//!
//! Landing page for the turma navigation contract. The activities feature
//! itself lives elsewhere; this page receives `{ turmaId, nome }` via
//! history state and shows which turma was opened.

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use serde::{Deserialize, Serialize};

/// Navigation-scoped state passed from the home screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtividadesParams {
    #[serde(rename = "turmaId")]
    pub turma_id: u32,
    pub nome: String,
}

#[component]
pub fn AtividadesPage() -> impl IntoView {
    let location = use_location();
    let params = move || -> Option<AtividadesParams> {
        serde_wasm_bindgen::from_value(location.state.get().to_js_value()).ok()
    };

    view! {
        <main class="atividades-screen">
            {move || match params() {
                Some(turma) => view! {
                    <h1>{format!("Atividades — {}", turma.nome)}</h1>
                    <p class="turma-ref">{format!("Turma #{}", turma.turma_id)}</p>
                }
                    .into_any(),
                None => view! {
                    <h1>"Atividades"</h1>
                    <p class="empty-hint">"Nenhuma turma selecionada."</p>
                    <a href="/home">"Voltar"</a>
                }
                    .into_any(),
            }}
        </main>
    }
}
