//! Transaction record types produced while scanning a statement.

use chrono::NaiveDate;

use crate::amount::is_zero_amount;

/// Amount written into whichever column a single-amount row did not use.
pub const ZERO_AMOUNT: &str = "0.00";

/// A transaction as it is being assembled from statement lines.
///
/// All fields keep the statement's own text. Only `narration` changes after
/// creation, as continuation lines are appended to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterimTransaction {
    pub date: String,
    pub narration: String,
    pub ref_no: String,
    pub value_date: String,
    pub withdrawal: String,
    pub deposit: String,
    pub balance: String,
}

impl InterimTransaction {
    /// Withdrawal when it is non-zero, otherwise the deposit (even a zero one).
    pub fn reported_amount(&self) -> &str {
        if is_zero_amount(&self.withdrawal) {
            &self.deposit
        } else {
            &self.withdrawal
        }
    }

    /// Convert into the fixed output shape.
    pub fn normalize(&self) -> FinalRecord {
        FinalRecord {
            date: self.date.clone(),
            narration: self.narration.trim().to_string(),
            reference: self.ref_no.trim_start_matches('0').to_string(),
            value_date: self.value_date.clone(),
            amount: self.reported_amount().to_string(),
            closing_balance: self.balance.clone(),
        }
    }
}

/// One output row. Field names on the wire come from [`crate::OutputSchema`];
/// serialize through [`crate::OutputSchema::entries`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalRecord {
    pub date: String,
    pub narration: String,
    pub reference: String,
    pub value_date: String,
    pub amount: String,
    pub closing_balance: String,
}

impl FinalRecord {
    /// Values in schema column order.
    pub fn values(&self) -> [&str; 6] {
        [
            self.date.as_str(),
            self.narration.as_str(),
            self.reference.as_str(),
            self.value_date.as_str(),
            self.amount.as_str(),
            self.closing_balance.as_str(),
        ]
    }

    pub fn date_parsed(&self) -> Option<NaiveDate> {
        parse_short_date(&self.date)
    }

    pub fn value_date_parsed(&self) -> Option<NaiveDate> {
        parse_short_date(&self.value_date)
    }
}

fn parse_short_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%d/%m/%y").ok()
}
