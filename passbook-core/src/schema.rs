//! Output field naming.
//!
//! The six columns are fixed; their names depend on the statement family and
//! come from configuration.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::record::FinalRecord;

/// Config keys of the six columns, in column order.
const COLUMNS: [&str; 6] = [
    "date",
    "narration",
    "reference",
    "value_date",
    "amount",
    "closing_balance",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSchema {
    pub date: String,
    pub narration: String,
    pub reference: String,
    pub value_date: String,
    pub amount: String,
    pub closing_balance: String,
}

impl Default for OutputSchema {
    fn default() -> Self {
        Self {
            date: "Date".to_string(),
            narration: "Narration".to_string(),
            reference: "Chq/Ref.No".to_string(),
            value_date: "Value Date".to_string(),
            amount: "Withdrawal Amt.".to_string(),
            closing_balance: "Closing Balance".to_string(),
        }
    }
}

impl OutputSchema {
    /// Field names in column order.
    pub fn fields(&self) -> [&str; 6] {
        [
            self.date.as_str(),
            self.narration.as_str(),
            self.reference.as_str(),
            self.value_date.as_str(),
            self.amount.as_str(),
            self.closing_balance.as_str(),
        ]
    }

    /// Pair each field name with the record's value.
    pub fn entries<'a>(&'a self, record: &'a FinalRecord) -> [(&'a str, &'a str); 6] {
        let names = self.fields();
        let values = record.values();
        std::array::from_fn(|i| (names[i], values[i]))
    }

    /// Every column needs a distinct, non-blank name for keyed output to
    /// carry all six values.
    pub fn validate(&self) -> Result<(), Error> {
        let names = self.fields();
        for (column, name) in COLUMNS.into_iter().zip(names) {
            if name.trim().is_empty() {
                return Err(Error::EmptyField { column });
            }
        }
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(Error::DuplicateField {
                    name: name.to_string(),
                });
            }
        }
        Ok(())
    }

    /// True when `keys` holds exactly this schema's field names (order ignored).
    pub fn matches_keys<S: AsRef<str>>(&self, keys: &[S]) -> bool {
        let mut expected: Vec<&str> = self.fields().to_vec();
        let mut actual: Vec<&str> = keys.iter().map(|k| k.as_ref()).collect();
        expected.sort_unstable();
        actual.sort_unstable();
        expected == actual
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_field_names() {
        let schema = OutputSchema::default();
        assert_eq!(
            schema.fields(),
            [
                "Date",
                "Narration",
                "Chq/Ref.No",
                "Value Date",
                "Withdrawal Amt.",
                "Closing Balance"
            ]
        );
    }

    #[test]
    fn test_entries_pair_names_with_values() {
        let schema = OutputSchema::default();
        let rec = FinalRecord {
            date: "01/01/24".into(),
            narration: "Salary".into(),
            reference: "12345".into(),
            value_date: "01/01/24".into(),
            amount: "5000.00".into(),
            closing_balance: "5000.00".into(),
        };
        let entries = schema.entries(&rec);
        assert_eq!(entries[2], ("Chq/Ref.No", "12345"));
        assert_eq!(entries[4], ("Withdrawal Amt.", "5000.00"));
    }

    #[test]
    fn test_matches_keys_ignores_order_only() {
        let schema = OutputSchema::default();
        let mut keys: Vec<String> = schema.fields().iter().rev().map(|s| s.to_string()).collect();
        assert!(schema.matches_keys(&keys));

        keys.push("Deposit Amt.".to_string());
        assert!(!schema.matches_keys(&keys));

        keys.truncate(5);
        assert!(!schema.matches_keys(&keys));
    }

    #[test]
    fn test_default_schema_is_valid() {
        assert_eq!(OutputSchema::default().validate(), Ok(()));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let schema = OutputSchema {
            value_date: "Date".to_string(),
            ..OutputSchema::default()
        };
        assert_eq!(
            schema.validate(),
            Err(Error::DuplicateField {
                name: "Date".to_string()
            })
        );
    }

    #[test]
    fn test_blank_name_rejected() {
        let schema = OutputSchema {
            closing_balance: "  ".to_string(),
            ..OutputSchema::default()
        };
        assert_eq!(
            schema.validate(),
            Err(Error::EmptyField {
                column: "closing_balance"
            })
        );
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let schema: OutputSchema = serde_json::from_str(r#"{"amount": "Amount"}"#).unwrap();
        assert_eq!(schema.amount, "Amount");
        assert_eq!(schema.date, "Date");
    }
}
