//! Turmas Frontend App
//!
//! Root component: provides the session store and declares the route table.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::pages::{AtividadesPage, HomePage, LoginPage};
use crate::session::SessionStore;

#[component]
pub fn App() -> impl IntoView {
    // One store for the whole app; screens pick it up from context.
    provide_context(SessionStore::browser());

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=LoginPage />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/home") view=HomePage />
                <Route path=path!("/atividades") view=AtividadesPage />
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <main class="not-found">
            <h1>"404"</h1>
            <p>"Página não encontrada."</p>
            <a href="/login">"Ir para o login"</a>
        </main>
    }
}
