//! Cash Compass demo - renders the UI components with fixture data
//!
//! A minimal web app with no backend, used for visual review of the account
//! card and navigation header.

mod demo_data;

use compass_ui::{AccountCard, NavHeaderView, NavItem, PageContainer};
use dioxus::prelude::*;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(DemoLayout)]
    #[route("/")]
    Home {},
    #[route("/cars")]
    Accounts {},
    #[route("/new")]
    NewAccount {},
}

/// Same three entries as the web app's header, active by exact route match.
fn nav_items(current: &Route) -> Vec<NavItem> {
    vec![
        NavItem {
            id: "home".to_string(),
            label: "Home".to_string(),
            is_active: matches!(current, Route::Home {}),
        },
        NavItem {
            id: "accounts".to_string(),
            label: "Accounts".to_string(),
            is_active: matches!(current, Route::Accounts {}),
        },
        NavItem {
            id: "new".to_string(),
            label: "Add Account".to_string(),
            is_active: matches!(current, Route::NewAccount {}),
        },
    ]
}

fn route_for(id: &str) -> Route {
    match id {
        "accounts" => Route::Accounts {},
        "new" => Route::NewAccount {},
        _ => Route::Home {},
    }
}

#[component]
fn DemoLayout() -> Element {
    let current_route = use_route::<Route>();

    rsx! {
        NavHeaderView {
            nav_items: nav_items(&current_route),
            on_brand_click: move |_| {
                navigator().push(Route::Home {});
            },
            on_nav_click: move |id: String| {
                navigator().push(route_for(&id));
            },
        }
        Outlet::<Route> {}
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        PageContainer {
            div { class: "py-16 text-center",
                h1 { class: "text-4xl font-bold font-mono", "CASH COMPASS" }
                p { class: "text-gray-500 mt-2", "Demo build with fixture data." }
            }
        }
    }
}

#[component]
fn Accounts() -> Element {
    rsx! {
        PageContainer {
            div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6",
                for account in demo_data::get_accounts() {
                    AccountCard { key: "{account.id}", account }
                }
            }
        }
    }
}

#[component]
fn NewAccount() -> Element {
    rsx! {
        PageContainer {
            div { class: "py-16 text-center text-gray-500",
                h1 { class: "text-2xl font-bold font-mono text-gray-700", "Add Account" }
                p { class: "mt-2", "The demo build has no backend; the form lives in the web app." }
            }
        }
    }
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-h-screen bg-base-200", Router::<Route> {} }
    }
}

fn main() {
    dioxus::launch(App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_has_all_three_entries() {
        let labels: Vec<String> = nav_items(&Route::Home {})
            .into_iter()
            .map(|item| item.label)
            .collect();
        assert_eq!(labels, vec!["Home", "Accounts", "Add Account"]);
    }

    #[test]
    fn test_one_entry_active_per_route() {
        for route in [Route::Home {}, Route::Accounts {}, Route::NewAccount {}] {
            let active = nav_items(&route).iter().filter(|item| item.is_active).count();
            assert_eq!(active, 1);
        }
    }

    #[test]
    fn test_add_account_entry_routes_to_new() {
        assert_eq!(route_for("new"), Route::NewAccount {});
    }
}
