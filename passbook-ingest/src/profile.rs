//! Statement family configuration: the fixed strings that delimit the
//! transaction table and the output column names.

use passbook_core::OutputSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Marker the page joiner inserts between pages.
pub const PAGE_BREAK_MARKER: &str = "---PAGE_BREAK---";

/// A profile that would make the scan match every line, or lose output
/// columns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("profile '{profile}': {field} is empty")]
    EmptyMarker { profile: String, field: &'static str },

    #[error("profile '{profile}': {source}")]
    Schema {
        profile: String,
        #[source]
        source: passbook_core::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatementProfile {
    /// Label used in logs.
    pub name: String,
    /// Column-header line that opens the transaction section.
    pub header_banner: String,
    /// Line prefixes that close the transaction section.
    pub footer_prefixes: Vec<String>,
    pub page_break_marker: String,
    /// Substrings marking page furniture that must never be merged into a
    /// narration.
    pub junk_markers: Vec<String>,
    /// Narration keywords (case-insensitive) that mark the first
    /// single-amount row as a withdrawal when no earlier balance exists.
    pub debit_keywords: Vec<String>,
    pub schema: OutputSchema,
}

impl Default for StatementProfile {
    fn default() -> Self {
        Self::hdfc()
    }
}

impl StatementProfile {
    /// HDFC Bank savings account statement.
    pub fn hdfc() -> Self {
        Self {
            name: "hdfc".to_string(),
            header_banner: "Date Narration Chq./Ref.No. ValueDt".to_string(),
            footer_prefixes: vec!["*Closingbalance".to_string(), "Stateaccountbranch".to_string()],
            page_break_marker: PAGE_BREAK_MARKER.to_string(),
            junk_markers: vec!["PageNo.:".to_string(), "AccountBranch :".to_string()],
            debit_keywords: vec!["fee".to_string(), "charge".to_string()],
            schema: OutputSchema::default(),
        }
    }

    /// Reject blank markers (a blank substring matches every line) and
    /// schemas without six distinct column names.
    pub fn validate(&self) -> Result<(), ProfileError> {
        let empty = |field| ProfileError::EmptyMarker {
            profile: self.name.clone(),
            field,
        };
        if self.header_banner.trim().is_empty() {
            return Err(empty("header_banner"));
        }
        if self.page_break_marker.trim().is_empty() {
            return Err(empty("page_break_marker"));
        }
        if self.footer_prefixes.iter().any(|p| p.trim().is_empty()) {
            return Err(empty("footer_prefixes entry"));
        }
        if self.junk_markers.iter().any(|m| m.trim().is_empty()) {
            return Err(empty("junk_markers entry"));
        }
        if self.debit_keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(empty("debit_keywords entry"));
        }
        self.schema.validate().map_err(|source| ProfileError::Schema {
            profile: self.name.clone(),
            source,
        })
    }

    pub fn is_header_banner(&self, line: &str) -> bool {
        line.contains(&self.header_banner)
    }

    pub fn is_footer_banner(&self, line: &str) -> bool {
        self.footer_prefixes.iter().any(|p| line.starts_with(p.as_str()))
    }

    pub fn is_page_break(&self, line: &str) -> bool {
        line.contains(&self.page_break_marker)
    }

    pub fn is_junk(&self, line: &str) -> bool {
        self.junk_markers.iter().any(|m| line.contains(m.as_str()))
    }

    pub fn mentions_debit_keyword(&self, narration: &str) -> bool {
        let lower = narration.to_lowercase();
        self.debit_keywords
            .iter()
            .any(|k| lower.contains(&k.to_lowercase()))
    }
}
