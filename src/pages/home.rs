//! Home Screen
//!
//! Requires a valid session; lists the professor's turmas, hosts the create
//! dialog, and owns logout.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::components::{NewTurmaDialog, TurmaList};
use crate::models::Turma;
use crate::session::SessionStore;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    // Read once at mount; this screen never re-reads the session.
    let professor = session.read();
    let professor_id = professor.id;
    let professor_nome = professor.nome.clone();

    let (turmas, set_turmas) = signal(Vec::<Turma>::new());

    let sair = {
        let session = session.clone();
        let navigate = navigate.clone();
        move || {
            session.clear();
            navigate("/login", Default::default());
        }
    };

    // Session check plus the one-shot list fetch. Tracks no signals, so it
    // runs exactly once per mount; only a successful create re-reads the list.
    Effect::new({
        let sair = sair.clone();
        let professor = professor.clone();
        move |_| {
            if !professor.has_id() {
                sair();
                return;
            }
            let id = professor.id;
            spawn_local(async move {
                match api::list_turmas(id).await {
                    Ok(loaded) => set_turmas.set(loaded),
                    Err(err) => web_sys::console::error_1(
                        &format!("Erro ao buscar turmas: {}", err).into(),
                    ),
                }
            });
        }
    });

    view! {
        <header class="home-header">
            <h1>{professor_nome}</h1>
            <button class="logout-btn" on:click=move |_| sair()>
                "Sair"
            </button>
        </header>

        <main class="home-content">
            <NewTurmaDialog professor_id=professor_id set_turmas=set_turmas />
            <TurmaList turmas=turmas set_turmas=set_turmas />
        </main>
    }
}
