//! HDFC Bank savings statement parser.
//!
//! Expected extracted-text section:
//!   Date Narration Chq./Ref.No. ValueDt
//!   01/04/24 UPI-SWIGGY-SWIGGY8@YBL 0000409112345678 01/04/24 349.00 48,211.50
//!   01/04/24 NEFTCR-ACME CORP 0000000000007731 01/04/24 0.00 90,000.00 1,38,211.50
//!   SALARY APR
//!
//! Rows drop whichever of withdrawal/deposit is zero, and long narrations wrap
//! onto lines of their own.

use std::path::Path;

use crate::engine::{ScanOutput, StatementEngine};
use crate::error::IngestError;
use passbook_core::FinalRecord;

/// Parse already-joined statement text.
pub fn parse_hdfc_text(text: &str) -> Vec<FinalRecord> {
    StatementEngine::hdfc().parse_text(text)
}

/// Load a statement file (PDF or extracted text) and parse it.
pub fn parse_hdfc_statement(path: impl AsRef<Path>) -> Result<ScanOutput, IngestError> {
    StatementEngine::hdfc().scan_file(path.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_parse_hdfc_basic() {
        let text = r#"
HDFC BANK Ltd.                                Page No .: 1
Date Narration Chq./Ref.No. ValueDt
01/04/24 NEFTCR-ACME CORP 0000000000007731 01/04/24 0.00 90,000.00 1,38,211.50
SALARY APR
02/04/24 UPI-SWIGGY-SWIGGY8@YBL 0000409112345678 02/04/24 349.00 1,37,862.50
*Closingbalance includes funds earmarked for hold
"#;
        let txns = parse_hdfc_text(text);
        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].narration, "NEFTCR-ACME CORP SALARY APR");
        assert_eq!(txns[0].reference, "7731");
        assert_eq!(txns[0].amount, "90,000.00");
        assert_eq!(txns[1].amount, "349.00");
        assert_eq!(txns[1].closing_balance, "1,37,862.50");
    }

    #[test]
    fn test_parse_statement_across_pages() {
        let mut f = Builder::new().suffix(".txt").tempfile().unwrap();
        write!(
            f,
            "Date Narration Chq./Ref.No. ValueDt\n\
             01/04/24 Opening credit 1 01/04/24 0.00 1,000.00 1,000.00\n\
             \x0c\
             PageNo.: 2 AccountBranch : ANDHERI\n\
             Date Narration Chq./Ref.No. ValueDt\n\
             02/04/24 ATM WDL 000222 02/04/24 400.00 600.00\n\
             Stateaccountbranch GSTN:27AAACH2702H1Z3\n"
        )
        .unwrap();

        let out = parse_hdfc_statement(f.path()).unwrap();
        assert_eq!(out.records.len(), 2);
        assert_eq!(out.records[1].narration, "ATM WDL");
        assert_eq!(out.records[1].reference, "222");
        assert_eq!(out.records[1].amount, "400.00");
        assert_eq!(out.report.partial_rows, 1);
    }

    #[test]
    fn test_unreadable_statement_propagates() {
        let err = parse_hdfc_statement("/nonexistent/hdfc.txt").unwrap_err();
        assert!(matches!(err, IngestError::Io { .. }));
    }
}
