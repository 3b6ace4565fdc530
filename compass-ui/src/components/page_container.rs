//! Page container component

use dioxus::prelude::*;

/// Page content wrapper - a centered column with the app's gutter
#[component]
pub fn PageContainer(children: Element) -> Element {
    rsx! {
        main { class: "max-w-5xl mx-auto px-6 py-8", {children} }
    }
}
