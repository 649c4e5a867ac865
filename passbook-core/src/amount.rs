//! Exact decimal handling for statement amounts.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::Error;

/// Parse an amount token such as `1,23,456.78` into an exact decimal.
///
/// Comma separators are dropped; the fractional digits are kept as written.
pub fn parse_amount(raw: &str) -> Result<Decimal, Error> {
    let cleaned = raw.trim().replace(',', "");
    if cleaned.is_empty() {
        return Err(Error::InvalidAmount {
            raw: raw.to_string(),
            reason: "empty".to_string(),
        });
    }
    Decimal::from_str(&cleaned).map_err(|e| Error::InvalidAmount {
        raw: raw.to_string(),
        reason: e.to_string(),
    })
}

/// True when `raw` is absent in value: unparseable text counts as zero.
pub fn is_zero_amount(raw: &str) -> bool {
    parse_amount(raw).map(|d| d.is_zero()).unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_parse_grouped_amount() {
        let d = parse_amount("1,23,456.78").unwrap();
        assert_eq!(d, Decimal::new(12345678, 2));
        assert_eq!(d.scale(), 2);
    }

    #[test]
    fn test_parse_negative() {
        assert_eq!(parse_amount("-50.00").unwrap(), Decimal::new(-5000, 2));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_amount("12a.00").unwrap_err();
        assert!(matches!(err, Error::InvalidAmount { .. }));
        assert!(parse_amount("").is_err());
    }

    #[test]
    fn test_zero_amounts() {
        assert!(is_zero_amount("0.00"));
        assert!(is_zero_amount("-0.00"));
        assert!(is_zero_amount("garbage"));
        assert!(!is_zero_amount("0.01"));
    }

    #[test]
    fn test_comparison_is_exact() {
        let a = parse_amount("5,000.10").unwrap() + parse_amount("0.20").unwrap();
        assert_eq!(a, parse_amount("5000.30").unwrap());
    }
}
