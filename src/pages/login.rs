//! Login Screen
//!
//! Collects credentials, authenticates against the backend, persists the
//! returned identity and redirects to the home screen.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::components::{AlertBox, AlertData};
use crate::outcomes::{
    classify_login, LoginOutcome, MSG_LOGIN_OK, MSG_LOGIN_REJECTED, MSG_SERVER_UNREACHABLE,
};
use crate::session::SessionStore;

/// How long the success alert stays visible before the redirect.
const SUCCESS_REDIRECT_MS: u32 = 1_000;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (senha, set_senha) = signal(String::new());
    let (alert, set_alert) = signal(None::<AlertData>);
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }
        set_loading.set(true);

        let email_val = email.get();
        let senha_val = senha.get();
        let session = session.clone();
        let navigate = navigate.clone();

        spawn_local(async move {
            match classify_login(api::login(&email_val, &senha_val).await) {
                LoginOutcome::Authenticated(professor) => {
                    session.write(&professor);
                    set_alert.set(Some(AlertData::success(MSG_LOGIN_OK)));
                    set_loading.set(false);
                    // Keep the success alert visible before leaving the screen.
                    TimeoutFuture::new(SUCCESS_REDIRECT_MS).await;
                    navigate("/home", Default::default());
                }
                LoginOutcome::Rejected => {
                    set_alert.set(Some(AlertData::error(MSG_LOGIN_REJECTED)));
                    set_loading.set(false);
                }
                LoginOutcome::Unreachable => {
                    set_alert.set(Some(AlertData::error(MSG_SERVER_UNREACHABLE)));
                    set_loading.set(false);
                }
            }
        });
    };

    view! {
        <main class="login-screen">
            <form class="login-card" on:submit=on_submit>
                <h1>"Bem-vindo"</h1>

                {move || alert.get().map(|data| view! { <AlertBox data=data /> })}

                <input
                    type="email"
                    placeholder="Email"
                    required=true
                    autocomplete="username"
                    disabled=move || loading.get()
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Senha"
                    required=true
                    autocomplete="current-password"
                    disabled=move || loading.get()
                    prop:value=move || senha.get()
                    on:input=move |ev| set_senha.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || loading.get()>
                    {move || if loading.get() { "Entrando..." } else { "Entrar" }}
                </button>
            </form>
        </main>
    }
}
