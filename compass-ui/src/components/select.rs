//! Styled native select component
//!
//! Wraps a native `<select>` element so option lists (like the account type
//! catalogue) stay keyboard-accessible without popover infrastructure.

use dioxus::prelude::*;

/// Styled select dropdown over `(value, label)` option pairs
#[component]
pub fn Select(
    /// Currently selected value
    value: String,
    /// Called when selection changes
    onchange: EventHandler<String>,
    /// Options as (value, label) pairs
    options: Vec<(String, String)>,
    #[props(default)] disabled: bool,
    #[props(default)] id: Option<String>,
) -> Element {
    rsx! {
        select {
            class: "w-full bg-base-100 border border-base-300 rounded-lg px-3 py-2 focus:outline-none focus:ring-1 focus:ring-indigo-400",
            id: id.as_deref(),
            disabled,
            value: "{value}",
            onchange: move |e| onchange.call(e.value()),
            for (opt_value , label) in options.iter() {
                option {
                    key: "{opt_value}",
                    value: "{opt_value}",
                    selected: *opt_value == value,
                    "{label}"
                }
            }
        }
    }
}
