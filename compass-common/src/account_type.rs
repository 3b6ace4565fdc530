//! Account classification types
//!
//! The wire labels match the backend's catalogue exactly, casing included.
//! Some labels are lowercase ("loan", "brokerage", "crypto") for historical
//! reasons; do not normalize them.

/// Kind of financial account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountType {
    Checking,
    Savings,
    CreditCard,
    Cd,
    MoneyMarket,
    PayPal,
    AutoLoan,
    Mortgage,
    HomeEquity,
    Loan,
    StudentLoan,
    Tuition529,
    Retirement401k,
    Brokerage,
    Crypto,
    Esa,
    Annuity,
    TradIra,
    RothIra,
    MutualFund,
    Roth401k,
}

impl AccountType {
    /// All account types, in the order the backend declares them.
    pub const ALL: [AccountType; 21] = [
        AccountType::Checking,
        AccountType::Savings,
        AccountType::CreditCard,
        AccountType::Cd,
        AccountType::MoneyMarket,
        AccountType::PayPal,
        AccountType::AutoLoan,
        AccountType::Mortgage,
        AccountType::HomeEquity,
        AccountType::Loan,
        AccountType::StudentLoan,
        AccountType::Tuition529,
        AccountType::Retirement401k,
        AccountType::Brokerage,
        AccountType::Crypto,
        AccountType::Esa,
        AccountType::Annuity,
        AccountType::TradIra,
        AccountType::RothIra,
        AccountType::MutualFund,
        AccountType::Roth401k,
    ];

    /// The backend wire label for this account type.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Checking => "Checking",
            AccountType::Savings => "Savings",
            AccountType::CreditCard => "Credit Card",
            AccountType::Cd => "CD",
            AccountType::MoneyMarket => "Money Market",
            AccountType::PayPal => "PayPal",
            AccountType::AutoLoan => "Auto Loan",
            AccountType::Mortgage => "Mortgage",
            AccountType::HomeEquity => "Home Equity Line of Credit",
            AccountType::Loan => "loan",
            AccountType::StudentLoan => "Student Loan",
            AccountType::Tuition529 => "529",
            AccountType::Retirement401k => "401(k)",
            AccountType::Brokerage => "brokerage",
            AccountType::Crypto => "crypto",
            AccountType::Esa => "Coverdell ESA",
            AccountType::Annuity => "Annuity",
            AccountType::TradIra => "Traditional IRA",
            AccountType::RothIra => "Roth IRA",
            AccountType::MutualFund => "Mutual Fund",
            AccountType::Roth401k => "Roth 401(k)",
        }
    }

    /// Parse a backend wire label. Exact match, case-sensitive.
    pub fn from_str(label: &str) -> Option<AccountType> {
        AccountType::ALL.iter().copied().find(|t| t.as_str() == label)
    }
}

/// Lifecycle status of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountStatus {
    Open,
    Closed,
    Hidden,
}

#[allow(clippy::derivable_impls)]
impl Default for AccountStatus {
    fn default() -> Self {
        AccountStatus::Open
    }
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Open => "open",
            AccountStatus::Closed => "closed",
            AccountStatus::Hidden => "hidden",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for t in AccountType::ALL {
            assert_eq!(AccountType::from_str(t.as_str()), Some(t));
        }
    }

    #[test]
    fn test_lowercase_labels_preserved() {
        assert_eq!(AccountType::Loan.as_str(), "loan");
        assert_eq!(AccountType::Brokerage.as_str(), "brokerage");
        assert_eq!(AccountType::Crypto.as_str(), "crypto");
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(AccountType::from_str("checking"), None);
        assert_eq!(AccountType::from_str("Checking"), Some(AccountType::Checking));
    }

    #[test]
    fn test_odd_labels() {
        assert_eq!(AccountType::from_str("529"), Some(AccountType::Tuition529));
        assert_eq!(AccountType::from_str("401(k)"), Some(AccountType::Retirement401k));
        assert_eq!(AccountType::from_str("Roth 401(k)"), Some(AccountType::Roth401k));
        assert_eq!(
            AccountType::from_str("Home Equity Line of Credit"),
            Some(AccountType::HomeEquity)
        );
    }

    #[test]
    fn test_status_default_open() {
        assert_eq!(AccountStatus::default(), AccountStatus::Open);
    }
}
