//! Structural check of a parse: records exist and carry exactly the expected
//! columns. Values are not compared.

use anyhow::{Context, Result};
use passbook_core::{FinalRecord, OutputSchema};
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckFailure {
    NoRecords,
    InvalidSchema(String),
    KeyMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },
}

impl fmt::Display for CheckFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckFailure::NoRecords => write!(f, "parser returned no transactions"),
            CheckFailure::InvalidSchema(reason) => write!(f, "invalid output schema: {}", reason),
            CheckFailure::KeyMismatch { expected, actual } => write!(
                f,
                "key mismatch: expected {:?}, got {:?}",
                expected, actual
            ),
        }
    }
}

/// Header row of an expected CSV file.
pub fn read_expected_headers(path: &Path) -> Result<Vec<String>> {
    let mut rdr = csv::Reader::from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let headers = rdr
        .headers()
        .with_context(|| format!("reading header of {}", path.display()))?;
    Ok(headers.iter().map(|h| h.trim().to_string()).collect())
}

pub fn check_structure(
    records: &[FinalRecord],
    schema: &OutputSchema,
    expected: Option<&[String]>,
) -> Result<(), CheckFailure> {
    if let Err(e) = schema.validate() {
        return Err(CheckFailure::InvalidSchema(e.to_string()));
    }
    if records.is_empty() {
        return Err(CheckFailure::NoRecords);
    }

    let expected: Vec<String> = match expected {
        Some(keys) => keys.to_vec(),
        None => schema.fields().iter().map(|s| s.to_string()).collect(),
    };

    for rec in records {
        let actual: Vec<String> = schema
            .entries(rec)
            .iter()
            .map(|(k, _)| k.to_string())
            .collect();
        if !same_key_set(&expected, &actual) {
            return Err(CheckFailure::KeyMismatch { expected, actual });
        }
    }
    Ok(())
}

fn same_key_set(a: &[String], b: &[String]) -> bool {
    let mut a: Vec<&str> = a.iter().map(String::as_str).collect();
    let mut b: Vec<&str> = b.iter().map(String::as_str).collect();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn rec() -> FinalRecord {
        FinalRecord {
            date: "01/01/24".into(),
            narration: "Salary".into(),
            reference: "12345".into(),
            value_date: "01/01/24".into(),
            amount: "5000.00".into(),
            closing_balance: "5000.00".into(),
        }
    }

    #[test]
    fn test_empty_parse_fails() {
        let err = check_structure(&[], &OutputSchema::default(), None).unwrap_err();
        assert_eq!(err, CheckFailure::NoRecords);
    }

    #[test]
    fn test_expected_csv_headers() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("expected.csv");
        fs::write(
            &p,
            "Value Date,Date,Narration,Chq/Ref.No,Withdrawal Amt.,Closing Balance\n01/01/24,01/01/24,x,1,2.00,3.00\n",
        )
        .unwrap();
        let headers = read_expected_headers(&p).unwrap();
        assert!(check_structure(&[rec()], &OutputSchema::default(), Some(headers.as_slice())).is_ok());
    }

    #[test]
    fn test_schema_with_shared_name_fails_without_expected_csv() {
        let schema = OutputSchema {
            value_date: "Date".to_string(),
            ..OutputSchema::default()
        };
        let err = check_structure(&[rec()], &schema, None).unwrap_err();
        assert!(matches!(err, CheckFailure::InvalidSchema(_)));
        assert!(err.to_string().contains("'Date'"));
    }

    #[test]
    fn test_mismatch_names_both_sides() {
        let expected = vec!["Date".to_string(), "Description".to_string()];
        let err = check_structure(&[rec()], &OutputSchema::default(), Some(expected.as_slice())).unwrap_err();
        match &err {
            CheckFailure::KeyMismatch { expected, actual } => {
                assert_eq!(expected.len(), 2);
                assert_eq!(actual.len(), 6);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(err.to_string().starts_with("key mismatch"));
    }
}
