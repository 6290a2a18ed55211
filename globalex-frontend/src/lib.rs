//! Single-page marketing site for Global Ex: a tab-based Dioxus web app
//! over the fixtures and validation rules in `globalex-content`.

pub mod app;
pub mod components;

pub use app::App;
