//! Display types for UI components
//!
//! These types are lightweight versions of the backend documents, containing
//! only the fields needed for display. They enable props-based components
//! that can work with either real or demo data.

/// Account display info
#[derive(Clone, Debug, PartialEq)]
pub struct Account {
    pub id: String,
    pub name: String,
    /// Backend wire label, e.g. "Checking" or "Roth 401(k)"
    pub account_type: String,
    pub rate: Option<f64>,
    pub institution: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
}
