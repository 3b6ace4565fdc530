//! HTTP client for the Cash Compass backend
//!
//! The backend exposes accounts under `/accounts/`. Documents come back in
//! Mongo shape (`_id`, nested institution), so they are mapped into the
//! lightweight display types before reaching any component.

use compass_ui::display_types::Account;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Account document as stored by the backend
#[derive(Deserialize)]
struct AccountDoc {
    #[serde(rename = "_id")]
    id: String,
    name: String,
    account_type: String,
    rate: Option<f64>,
    institution: Option<InstitutionDoc>,
    price: Option<f64>,
    image_url: Option<String>,
}

#[derive(Deserialize)]
struct InstitutionDoc {
    name: String,
}

/// Filters for the accounts list endpoint. The server pages at 25 results
/// and applies its own defaults for unset price bounds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AccountQuery {
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub rate: Option<f64>,
    pub page: Option<u32>,
}

fn query_string(query: &AccountQuery) -> String {
    let mut pairs = Vec::new();
    if let Some(min) = query.min_price {
        pairs.push(format!("min_price={min}"));
    }
    if let Some(max) = query.max_price {
        pairs.push(format!("max_price={max}"));
    }
    if let Some(rate) = query.rate {
        pairs.push(format!("rate={rate}"));
    }
    if let Some(page) = query.page {
        pairs.push(format!("page={page}"));
    }
    if pairs.is_empty() {
        String::new()
    } else {
        format!("?{}", pairs.join("&"))
    }
}

fn to_display(doc: AccountDoc) -> Account {
    Account {
        id: doc.id,
        name: doc.name,
        account_type: doc.account_type,
        rate: doc.rate,
        institution: doc.institution.map(|i| i.name),
        price: doc.price,
        image_url: doc.image_url,
    }
}

/// Fetch a page of accounts from the backend
pub async fn fetch_accounts(query: AccountQuery) -> Result<Vec<Account>, String> {
    let url = format!("/accounts/{}", query_string(&query));
    let resp = reqwest::get(&url)
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    let docs: Vec<AccountDoc> = resp.json().await.map_err(|e| format!("Parse error: {e}"))?;
    info!("Fetched {} accounts", docs.len());

    Ok(docs.into_iter().map(to_display).collect())
}

fn account_url(id: &str) -> String {
    format!("/accounts/{id}")
}

/// Fetch a single account by id
pub async fn fetch_account(id: &str) -> Result<Account, String> {
    let resp = reqwest::get(&account_url(id))
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if !resp.status().is_success() {
        return Err(format!("Account {id} not found: {}", resp.status()));
    }

    let doc: AccountDoc = resp.json().await.map_err(|e| format!("Parse error: {e}"))?;
    Ok(to_display(doc))
}

/// Payload for creating an account
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct NewAccountRequest {
    pub name: String,
    pub account_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution: Option<InstitutionBody>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct InstitutionBody {
    pub name: String,
}

/// Create a new account on the backend
pub async fn create_account(request: &NewAccountRequest) -> Result<(), String> {
    let client = reqwest::Client::new();
    let resp = client
        .post("/accounts/")
        .json(request)
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if !resp.status().is_success() {
        return Err(format!("Server rejected account: {}", resp.status()));
    }
    info!("Created account {:?}", request.name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string_empty_for_defaults() {
        assert_eq!(query_string(&AccountQuery::default()), "");
    }

    #[test]
    fn test_query_string_with_all_filters() {
        let query = AccountQuery {
            min_price: Some(0),
            max_price: Some(100_000),
            rate: Some(1.5),
            page: Some(2),
        };
        assert_eq!(
            query_string(&query),
            "?min_price=0&max_price=100000&rate=1.5&page=2"
        );
    }

    #[test]
    fn test_account_url() {
        assert_eq!(account_url("63f0"), "/accounts/63f0");
    }

    #[test]
    fn test_parse_single_account_document() {
        let json = r#"{
            "_id": "63f2",
            "name": "College 529",
            "account_type": "529",
            "rate": 4.0,
            "price": 18000.0,
            "image_url": "/covers/529.png"
        }"#;
        let doc: AccountDoc = serde_json::from_str(json).unwrap();
        let account = to_display(doc);
        assert_eq!(account.id, "63f2");
        assert_eq!(account.account_type, "529");
        assert_eq!(account.institution, None);
        assert_eq!(account.image_url.as_deref(), Some("/covers/529.png"));
    }

    #[test]
    fn test_parse_mongo_document() {
        let json = r#"{
            "_id": "63f0",
            "name": "Rainy Day",
            "account_type": "Savings",
            "rate": 2.1,
            "institution": {"name": "First National"},
            "price": 1500.0
        }"#;
        let doc: AccountDoc = serde_json::from_str(json).unwrap();
        let account = to_display(doc);
        assert_eq!(account.id, "63f0");
        assert_eq!(account.account_type, "Savings");
        assert_eq!(account.institution.as_deref(), Some("First National"));
        assert_eq!(account.price, Some(1500.0));
        assert_eq!(account.image_url, None);
    }

    #[test]
    fn test_parse_sparse_document() {
        let json = r#"{"_id": "63f1", "name": "Mystery", "account_type": "crypto"}"#;
        let doc: AccountDoc = serde_json::from_str(json).unwrap();
        let account = to_display(doc);
        assert_eq!(account.rate, None);
        assert_eq!(account.institution, None);
        assert_eq!(account.price, None);
    }

    #[test]
    fn test_create_request_omits_unset_fields() {
        let request = NewAccountRequest {
            name: "Daily".to_string(),
            account_type: "Checking".to_string(),
            rate: None,
            institution: None,
            price: Some(100.0),
            image_url: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("rate"));
        assert!(!json.contains("institution"));
        assert!(json.contains("\"price\":100.0"));
    }
}
