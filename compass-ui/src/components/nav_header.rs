//! Navigation header view component
//!
//! Pure, props-based component for the top navigation bar. The layout
//! computes which entry is active from the current route; clicks are
//! surfaced through callbacks so this crate never touches the router.

use dioxus::prelude::*;

/// Navigation entry for the header
#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub is_active: bool,
}

/// Class for a navigation entry. The active entry is highlighted, inactive
/// entries just get spacing.
fn nav_link_class(is_active: bool) -> &'static str {
    if is_active {
        "active-link"
    } else {
        "p-4"
    }
}

/// Navigation header view (pure, props-based)
///
/// Brand link on the left, navigation entries on the right. Exactly the
/// entry whose `is_active` flag is set carries the highlight class.
#[component]
pub fn NavHeaderView(
    nav_items: Vec<NavItem>,
    on_nav_click: EventHandler<String>,
    on_brand_click: EventHandler<()>,
) -> Element {
    rsx! {
        nav { class: "flex justify-between relative items-center font-mono h-16",
            button {
                class: "pl-8 text-xl font-bold cursor-pointer",
                onclick: move |_| on_brand_click.call(()),
                "CASH COMPASS"
            }
            div { class: "pr-8 font-semibold",
                for item in nav_items.iter() {
                    button {
                        key: "{item.id}",
                        class: nav_link_class(item.is_active),
                        onclick: {
                            let id = item.id.clone();
                            move |_| on_nav_click.call(id.clone())
                        },
                        "{item.label}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_entry_gets_highlight_class() {
        assert_eq!(nav_link_class(true), "active-link");
    }

    #[test]
    fn test_inactive_entry_gets_spacing_class() {
        assert_eq!(nav_link_class(false), "p-4");
    }
}
