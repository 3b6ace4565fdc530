//! Cash Compass web app
//!
//! The accounts list lives at `/cars`, a leftover path from the template the
//! site grew out of. Keep it until the backend and bookmarks move together.

pub mod api;
pub mod pages;

use dioxus::prelude::*;
use pages::{Accounts, AppLayout, Home, NewAccount};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/cars")]
    Accounts {},
    #[route("/new")]
    NewAccount {},
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-h-screen bg-base-200", Router::<Route> {} }
    }
}
