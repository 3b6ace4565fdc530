//! Landing page

use crate::Route;
use compass_ui::{Button, ButtonSize, ButtonVariant, LandmarkIcon, PageContainer, PlusIcon};
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        PageContainer {
            div { class: "flex flex-col items-center text-center py-16 gap-4",
                LandmarkIcon { class: "w-16 h-16 text-indigo-500" }
                h1 { class: "text-4xl font-bold font-mono", "CASH COMPASS" }
                p { class: "text-lg text-gray-600 max-w-md",
                    "Keep every account on course. Track balances, rates and institutions in one place."
                }
                div { class: "flex gap-3 mt-4",
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Medium,
                        onclick: move |_| {
                            navigator().push(Route::Accounts {});
                        },
                        "Browse accounts"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        size: ButtonSize::Medium,
                        onclick: move |_| {
                            navigator().push(Route::NewAccount {});
                        },
                        PlusIcon {}
                        "Add account"
                    }
                }
            }
        }
    }
}
