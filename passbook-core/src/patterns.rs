//! Lexical patterns for statement tokens.
//!
//! Both checks are purely textual: `31/02/24` is a short date here even though
//! no such day exists. Calendar validation belongs to callers that need it.

use regex::Regex;
use std::sync::OnceLock;

fn short_date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{2}/\d{2}/\d{2}$").expect("short date regex"))
}

fn amount_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-?[\d,]+\.\d{2}$").expect("amount regex"))
}

/// `DD/MM/YY`
pub fn is_short_date(token: &str) -> bool {
    short_date_re().is_match(token)
}

/// Optional leading `-`, digits with optional comma grouping, exactly two
/// decimal places.
pub fn is_amount(token: &str) -> bool {
    amount_re().is_match(token)
}
