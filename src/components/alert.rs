//! Alert Component
//!
//! Inline success/error card shown on the login screen.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlertKind {
    Success,
    Error,
}

/// What an alert shows: a fixed title per kind plus the message text.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertData {
    pub kind: AlertKind,
    pub message: String,
}

impl AlertData {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: AlertKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: AlertKind::Error, message: message.into() }
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            AlertKind::Success => "Sucesso",
            AlertKind::Error => "Erro",
        }
    }
}

#[component]
pub fn AlertBox(data: AlertData) -> impl IntoView {
    let class = match data.kind {
        AlertKind::Success => "alert alert-success",
        AlertKind::Error => "alert alert-error",
    };
    let title = data.title();

    view! {
        <div class=class role="alert">
            <strong class="alert-title">{title}</strong>
            <span class="alert-message">{data.message}</span>
        </div>
    }
}
