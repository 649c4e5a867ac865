//! Header / continuation classification for in-section lines.

use passbook_core::is_short_date;

use crate::profile::StatementProfile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Starts with a short date: a new transaction row, tokenized.
    Header(Vec<&'a str>),
    /// Free text continuing the previous row's narration.
    Continuation(&'a str),
    /// Page furniture repeated inside the table.
    Junk,
}

pub fn classify<'a>(line: &'a str, profile: &StatementProfile) -> LineClass<'a> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.first() {
        Some(first) if is_short_date(first) => LineClass::Header(tokens),
        _ if profile.is_junk(line) => LineClass::Junk,
        _ => LineClass::Continuation(line.trim()),
    }
}
