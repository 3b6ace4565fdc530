//! Add-account form page

use crate::api::{self, InstitutionBody, NewAccountRequest};
use crate::Route;
use compass_common::AccountType;
use compass_ui::{
    Button, ButtonSize, ButtonVariant, ErrorBanner, PageContainer, Select, TextInput,
    TextInputSize,
};
use dioxus::prelude::*;
use tracing::warn;

fn parse_optional_number(raw: &str) -> Result<Option<f64>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| format!("\"{trimmed}\" is not a number"))
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Validate the form fields and build the create payload.
fn build_request(
    name: &str,
    account_type: &str,
    rate: &str,
    institution: &str,
    price: &str,
    image_url: &str,
) -> Result<NewAccountRequest, String> {
    let name = non_empty(name).ok_or_else(|| "Name is required".to_string())?;
    let rate = parse_optional_number(rate).map_err(|e| format!("Rate: {e}"))?;
    let price = parse_optional_number(price).map_err(|e| format!("Price: {e}"))?;

    Ok(NewAccountRequest {
        name,
        account_type: account_type.to_string(),
        rate,
        institution: non_empty(institution).map(|name| InstitutionBody { name }),
        price,
        image_url: non_empty(image_url),
    })
}

#[component]
pub fn NewAccount() -> Element {
    let mut name = use_signal(String::new);
    let mut account_type = use_signal(|| AccountType::Checking.as_str().to_string());
    let mut rate = use_signal(String::new);
    let mut institution = use_signal(String::new);
    let mut price = use_signal(String::new);
    let mut image_url = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let type_options: Vec<(String, String)> = AccountType::ALL
        .iter()
        .map(|t| (t.as_str().to_string(), t.as_str().to_string()))
        .collect();

    let submit = move |_| {
        let request = match build_request(
            &name(),
            &account_type(),
            &rate(),
            &institution(),
            &price(),
            &image_url(),
        ) {
            Ok(request) => request,
            Err(e) => {
                error.set(Some(e));
                return;
            }
        };

        error.set(None);
        submitting.set(true);
        spawn(async move {
            match api::create_account(&request).await {
                Ok(()) => {
                    navigator().push(Route::Accounts {});
                }
                Err(e) => {
                    warn!("Account creation failed: {e}");
                    error.set(Some(e));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        PageContainer {
            div { class: "max-w-lg mx-auto flex flex-col gap-4",
                h1 { class: "text-2xl font-bold font-mono", "Add Account" }

                if let Some(e) = error() {
                    ErrorBanner {
                        heading: "Could not add account",
                        detail: e,
                        button_label: "Dismiss",
                        on_retry: move |_| error.set(None),
                    }
                }

                FormField { label: "Name",
                    TextInput {
                        value: name(),
                        size: TextInputSize::Medium,
                        placeholder: "Daily Checking",
                        on_input: move |v| name.set(v),
                    }
                }
                FormField { label: "Type",
                    Select {
                        value: account_type(),
                        options: type_options,
                        onchange: move |v| account_type.set(v),
                    }
                }
                FormField { label: "Rate (%)",
                    TextInput {
                        value: rate(),
                        size: TextInputSize::Medium,
                        placeholder: "1.5",
                        on_input: move |v| rate.set(v),
                    }
                }
                FormField { label: "Institution",
                    TextInput {
                        value: institution(),
                        size: TextInputSize::Medium,
                        placeholder: "First National",
                        on_input: move |v| institution.set(v),
                    }
                }
                FormField { label: "Price (EURO)",
                    TextInput {
                        value: price(),
                        size: TextInputSize::Medium,
                        placeholder: "1000",
                        on_input: move |v| price.set(v),
                    }
                }
                FormField { label: "Image URL",
                    TextInput {
                        value: image_url(),
                        size: TextInputSize::Medium,
                        placeholder: "https://...",
                        on_input: move |v| image_url.set(v),
                    }
                }

                div { class: "mt-2",
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Medium,
                        disabled: submitting(),
                        onclick: submit,
                        if submitting() {
                            "Saving..."
                        } else {
                            "Save account"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FormField(label: &'static str, children: Element) -> Element {
    rsx! {
        label { class: "flex flex-col gap-1",
            span { class: "text-sm font-semibold", "{label}" }
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_required() {
        let result = build_request("  ", "Checking", "", "", "", "");
        assert_eq!(result.unwrap_err(), "Name is required");
    }

    #[test]
    fn test_minimal_request() {
        let request = build_request("Daily", "Checking", "", "", "", "").unwrap();
        assert_eq!(request.name, "Daily");
        assert_eq!(request.account_type, "Checking");
        assert_eq!(request.rate, None);
        assert_eq!(request.institution, None);
        assert_eq!(request.price, None);
        assert_eq!(request.image_url, None);
    }

    #[test]
    fn test_full_request() {
        let request = build_request(
            "Rainy Day",
            "Savings",
            "2.1",
            "First National",
            "1500",
            "https://example.com/a.png",
        )
        .unwrap();
        assert_eq!(request.rate, Some(2.1));
        assert_eq!(
            request.institution,
            Some(InstitutionBody { name: "First National".to_string() })
        );
        assert_eq!(request.price, Some(1500.0));
        assert_eq!(request.image_url.as_deref(), Some("https://example.com/a.png"));
    }

    #[test]
    fn test_bad_rate_reports_field() {
        let result = build_request("Daily", "Checking", "abc", "", "", "");
        assert_eq!(result.unwrap_err(), "Rate: \"abc\" is not a number");
    }

    #[test]
    fn test_bad_price_reports_field() {
        let result = build_request("Daily", "Checking", "", "", "1,5", "");
        assert!(result.unwrap_err().starts_with("Price:"));
    }
}
