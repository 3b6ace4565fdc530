//! Display formatting for money-ish values
//!
//! Prices are shown in whole euros when the value has no cents, otherwise
//! with two decimals. A missing price renders as "0" rather than an empty
//! string so the price line always has a value.

/// Format an account price for display. Missing prices render as "0".
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) if p.fract().abs() < f64::EPSILON => format!("{}", p as i64),
        Some(p) => format!("{:.2}", p),
        None => "0".to_string(),
    }
}

/// Format an interest rate for display. Missing rates render as empty text.
pub fn format_rate(rate: Option<f64>) -> String {
    match rate {
        Some(r) if r.fract().abs() < f64::EPSILON => format!("{}", r as i64),
        Some(r) => format!("{}", r),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_price_has_no_decimals() {
        assert_eq!(format_price(Some(1500.0)), "1500");
    }

    #[test]
    fn test_fractional_price_has_two_decimals() {
        assert_eq!(format_price(Some(1234.5)), "1234.50");
        assert_eq!(format_price(Some(1.25)), "1.25");
    }

    #[test]
    fn test_missing_price_falls_back_to_zero() {
        assert_eq!(format_price(None), "0");
    }

    #[test]
    fn test_rate_formats() {
        assert_eq!(format_rate(Some(2.0)), "2");
        assert_eq!(format_rate(Some(1.25)), "1.25");
        assert_eq!(format_rate(None), "");
    }
}
