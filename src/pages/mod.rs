//! Screens
//!
//! One module per routed page.

mod atividades;
mod home;
mod login;

pub use atividades::{AtividadesPage, AtividadesParams};
pub use home::HomePage;
pub use login::LoginPage;
