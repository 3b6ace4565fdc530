//! compass-common - Shared domain types for Cash Compass
//!
//! Dependency-light types shared between the web app and the fixture-data
//! demo: the account type catalogue and display formatting helpers.

pub mod account_type;
pub mod money;

pub use account_type::{AccountStatus, AccountType};
pub use money::{format_price, format_rate};
