//! App layout with the navigation header

use crate::Route;
use compass_ui::{NavHeaderView, NavItem};
use dioxus::prelude::*;

const NAV_HOME: &str = "home";
const NAV_ACCOUNTS: &str = "accounts";
const NAV_NEW: &str = "new";

/// Build navigation entries for the current route. Active state is an exact
/// route match, so at most one entry is highlighted.
fn nav_items(current: &Route) -> Vec<NavItem> {
    vec![
        NavItem {
            id: NAV_HOME.to_string(),
            label: "Home".to_string(),
            is_active: matches!(current, Route::Home {}),
        },
        NavItem {
            id: NAV_ACCOUNTS.to_string(),
            label: "Accounts".to_string(),
            is_active: matches!(current, Route::Accounts {}),
        },
        NavItem {
            id: NAV_NEW.to_string(),
            label: "Add Account".to_string(),
            is_active: matches!(current, Route::NewAccount {}),
        },
    ]
}

fn route_for(id: &str) -> Route {
    match id {
        NAV_ACCOUNTS => Route::Accounts {},
        NAV_NEW => Route::NewAccount {},
        _ => Route::Home {},
    }
}

#[component]
pub fn AppLayout() -> Element {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn active_labels(current: &Route) -> Vec<String> {
        nav_items(current)
            .into_iter()
            .filter(|item| item.is_active)
            .map(|item| item.label)
            .collect()
    }

    #[test]
    fn test_home_route_activates_home_only() {
        assert_eq!(active_labels(&Route::Home {}), vec!["Home"]);
    }

    #[test]
    fn test_accounts_route_activates_accounts_only() {
        assert_eq!(active_labels(&Route::Accounts {}), vec!["Accounts"]);
    }

    #[test]
    fn test_new_route_activates_add_account_only() {
        assert_eq!(active_labels(&Route::NewAccount {}), vec!["Add Account"]);
    }

    #[test]
    fn test_nav_targets() {
        assert_eq!(route_for(NAV_HOME), Route::Home {});
        assert_eq!(route_for(NAV_ACCOUNTS), Route::Accounts {});
        assert_eq!(route_for(NAV_NEW), Route::NewAccount {});
    }
}
