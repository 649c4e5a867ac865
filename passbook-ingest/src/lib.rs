//! passbook-ingest: statement text scanning and bank-specific parsers.
//!
//! The engine works on text that has already been extracted from the
//! statement, one string per page. It locates the transaction table, turns
//! each date-led row into a transaction, folds wrapped narration lines into
//! the row above, and infers the direction of single-amount rows from the
//! running balance.

pub mod classify;
pub mod engine;
pub mod error;
pub mod layout;
pub mod narration;
pub mod pages;
pub mod parsers;
pub mod polarity;
pub mod profile;
pub mod section;

pub use engine::{DropReason, LineOutcome, ParseReport, ScanOutput, ScanState, StatementEngine};
pub use error::IngestError;
pub use layout::LayoutKind;
pub use pages::{PageSource, PdfPageSource, TextPageSource, join_pages, load_pages, source_for_path};
pub use parsers::{parse_hdfc_statement, parse_hdfc_text};
pub use profile::{PAGE_BREAK_MARKER, ProfileError, StatementProfile};
