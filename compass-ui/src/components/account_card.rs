//! Account card component - pure view

use crate::components::icons::ImageIcon;
use crate::display_types::Account;
use compass_common::{format_price, format_rate};
use dioxus::prelude::*;

/// Build the "Type / Rate / Institution" summary line.
///
/// Missing optional fields render as empty text rather than a sentinel, so a
/// sparse account still produces a stable line.
fn summary_line(account: &Account) -> String {
    format!(
        "Type: {} / Rate: {} / Institution: {}",
        account.account_type,
        format_rate(account.rate),
        account.institution.as_deref().unwrap_or(""),
    )
}

/// Individual account card component
///
/// Pure view component - displays one account's name, type/rate/institution
/// summary and price. The image is per-account; when an account has no image
/// a placeholder icon is shown instead of a hard-coded external URL.
#[component]
pub fn AccountCard(account: Account) -> Element {
    let price = format_price(account.price);
    let summary = summary_line(&account);

    rsx! {
        div {
            class: "card card-compact w-full bg-base-100 shadow-xl hover:scale-105 transition-transform",
            "data-testid": "account-card",
            figure { class: "aspect-video bg-base-300 flex items-center justify-center",
                if let Some(url) = &account.image_url {
                    img {
                        src: "{url}",
                        alt: "Image for {account.name}",
                        class: "w-full h-full object-cover",
                    }
                } else {
                    ImageIcon { class: "w-12 h-12 text-gray-400" }
                }
            }
            div { class: "card-body",
                h2 { class: "card-title", "{account.name}" }
                div { class: "flex flex-col justify-between items-center",
                    div { class: "my-1", "{summary}" }
                    div { class: "my-1",
                        "Price: "
                        span { class: "text-primary font-extrabold", "{price}" }
                        " EURO"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_account() -> Account {
        Account {
            id: "a1".to_string(),
            name: "Daily Checking".to_string(),
            account_type: "Checking".to_string(),
            rate: Some(0.5),
            institution: Some("First National".to_string()),
            price: Some(2400.0),
            image_url: Some("/images/checking.png".to_string()),
        }
    }

    #[test]
    fn test_summary_contains_all_fields() {
        let line = summary_line(&full_account());
        assert_eq!(line, "Type: Checking / Rate: 0.5 / Institution: First National");
    }

    #[test]
    fn test_summary_with_missing_fields() {
        let account = Account {
            rate: None,
            institution: None,
            ..full_account()
        };
        assert_eq!(summary_line(&account), "Type: Checking / Rate:  / Institution: ");
    }

    #[test]
    fn test_missing_price_renders_zero() {
        assert_eq!(format_price(None), "0");
    }
}
