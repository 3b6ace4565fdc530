//! Accounts list page

use crate::api::{self, AccountQuery};
use crate::Route;
use compass_ui::{AccountCard, Button, ButtonSize, ButtonVariant, ErrorBanner, PageContainer};
use dioxus::prelude::*;

#[component]
pub fn Accounts() -> Element {
    let mut data = use_resource(|| api::fetch_accounts(AccountQuery::default()));
    let read = data.read();

    let result = match &*read {
        Some(Ok(accounts)) => Ok(accounts.clone()),
        Some(Err(e)) => Err(e.clone()),
        None => {
            return rsx! {
                div { class: "flex items-center justify-center h-64 text-gray-400", "Loading..." }
            }
        }
    };
    drop(read);

    match result {
        Ok(accounts) if accounts.is_empty() => rsx! {
            PageContainer {
                div { class: "flex flex-col items-center gap-4 py-16 text-gray-500",
                    p { "No accounts yet." }
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Medium,
                        onclick: move |_| {
                            navigator().push(Route::NewAccount {});
                        },
                        "Add your first account"
                    }
                }
            }
        },
        Ok(accounts) => rsx! {
            PageContainer {
                div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6",
                    for account in accounts {
                        AccountCard { key: "{account.id}", account }
                    }
                }
            }
        },
        Err(e) => rsx! {
            PageContainer {
                ErrorBanner {
                    heading: "Could not load accounts",
                    detail: e,
                    button_label: "Retry",
                    on_retry: move |_| data.restart(),
                }
            }
        },
    }
}
