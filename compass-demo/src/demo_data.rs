//! Fixture accounts for the demo app
//!
//! Covers the interesting display cases: fully populated records, a record
//! with no price (renders as 0), and records with no image or institution.

use compass_common::AccountType;
use compass_ui::display_types::Account;

pub fn get_accounts() -> Vec<Account> {
    vec![
        Account {
            id: "demo-1".to_string(),
            name: "Daily Checking".to_string(),
            account_type: AccountType::Checking.as_str().to_string(),
            rate: Some(0.1),
            institution: Some("First National".to_string()),
            price: Some(2400.0),
            image_url: Some("/covers/checking.png".to_string()),
        },
        Account {
            id: "demo-2".to_string(),
            name: "Rainy Day Fund".to_string(),
            account_type: AccountType::Savings.as_str().to_string(),
            rate: Some(2.1),
            institution: Some("Coastal Credit Union".to_string()),
            price: Some(11250.5),
            image_url: Some("/covers/savings.png".to_string()),
        },
        Account {
            id: "demo-3".to_string(),
            name: "Old Brokerage".to_string(),
            account_type: AccountType::Brokerage.as_str().to_string(),
            rate: None,
            institution: Some("Vantage Securities".to_string()),
            // No price on record, the card should show 0
            price: None,
            image_url: None,
        },
        Account {
            id: "demo-4".to_string(),
            name: "College 529".to_string(),
            account_type: AccountType::Tuition529.as_str().to_string(),
            rate: Some(4.0),
            institution: None,
            price: Some(18000.0),
            image_url: Some("/covers/529.png".to_string()),
        },
    ]
}
