//! Column layouts of a transaction row.
//!
//! The statement renderer drops whichever of withdrawal/deposit is zero, so a
//! row either carries both amount columns or a single amount whose direction
//! is unknown. Layouts are checked widest first; a row is matched by the first
//! layout whose trailing columns all validate.

use passbook_core::{is_amount, is_short_date};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LayoutKind {
    /// Withdrawal and deposit columns both present.
    Full,
    /// One amount column; polarity resolved from the running balance.
    Partial,
}

/// A trailing column and the token shape it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Reference,
    ValueDate,
    Withdrawal,
    Deposit,
    Amount,
    Balance,
}

impl Slot {
    fn accepts(self, token: &str) -> bool {
        match self {
            Slot::Reference => true,
            Slot::ValueDate => is_short_date(token),
            Slot::Withdrawal | Slot::Deposit | Slot::Amount | Slot::Balance => is_amount(token),
        }
    }
}

/// Amount columns as read from a matched row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAmounts<'a> {
    Split { withdrawal: &'a str, deposit: &'a str },
    Unsigned(&'a str),
}

/// Raw fields of a matched row, still in statement text form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow<'a> {
    pub layout: LayoutKind,
    pub date: &'a str,
    pub narration: String,
    pub reference: &'a str,
    pub value_date: &'a str,
    pub amounts: RowAmounts<'a>,
    pub balance: &'a str,
}

#[derive(Debug, Clone, Copy)]
pub struct ColumnLayout {
    pub kind: LayoutKind,
    min_tokens: usize,
    /// Trailing columns, left to right.
    trailing: &'static [Slot],
}

pub const FULL: ColumnLayout = ColumnLayout {
    kind: LayoutKind::Full,
    min_tokens: 7,
    trailing: &[
        Slot::Reference,
        Slot::ValueDate,
        Slot::Withdrawal,
        Slot::Deposit,
        Slot::Balance,
    ],
};

pub const PARTIAL: ColumnLayout = ColumnLayout {
    kind: LayoutKind::Partial,
    min_tokens: 6,
    trailing: &[Slot::Reference, Slot::ValueDate, Slot::Amount, Slot::Balance],
};

/// Priority order.
pub const LAYOUTS: [ColumnLayout; 2] = [FULL, PARTIAL];

#[derive(Default)]
struct Trailing<'a> {
    reference: Option<&'a str>,
    value_date: Option<&'a str>,
    withdrawal: Option<&'a str>,
    deposit: Option<&'a str>,
    amount: Option<&'a str>,
    balance: Option<&'a str>,
}

impl ColumnLayout {
    pub fn accepts(&self, tokens: &[&str]) -> bool {
        if tokens.len() < self.min_tokens {
            return false;
        }
        let tail = &tokens[tokens.len() - self.trailing.len()..];
        self.trailing
            .iter()
            .zip(tail)
            .all(|(slot, token)| slot.accepts(token))
    }

    pub fn extract<'a>(&self, tokens: &[&'a str]) -> Option<RawRow<'a>> {
        if !self.accepts(tokens) {
            return None;
        }

        let (head, tail) = tokens.split_at(tokens.len() - self.trailing.len());
        let mut cols = Trailing::default();
        for (slot, token) in self.trailing.iter().zip(tail) {
            let field = match slot {
                Slot::Reference => &mut cols.reference,
                Slot::ValueDate => &mut cols.value_date,
                Slot::Withdrawal => &mut cols.withdrawal,
                Slot::Deposit => &mut cols.deposit,
                Slot::Amount => &mut cols.amount,
                Slot::Balance => &mut cols.balance,
            };
            *field = Some(*token);
        }

        let amounts = match self.kind {
            LayoutKind::Full => RowAmounts::Split {
                withdrawal: cols.withdrawal?,
                deposit: cols.deposit?,
            },
            LayoutKind::Partial => RowAmounts::Unsigned(cols.amount?),
        };

        Some(RawRow {
            layout: self.kind,
            date: head.first().copied()?,
            narration: head[1..].join(" "),
            reference: cols.reference?,
            value_date: cols.value_date?,
            amounts,
            balance: cols.balance?,
        })
    }
}

/// Match `tokens` against the known layouts in priority order.
pub fn match_columns<'a>(tokens: &[&'a str]) -> Option<RawRow<'a>> {
    LAYOUTS.iter().find_map(|layout| layout.extract(tokens))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn toks(line: &str) -> Vec<&str> {
        line.split_whitespace().collect()
    }

    #[test]
    fn test_full_row() {
        let tokens = toks("01/01/24 NEFT CR ACME PAYROLL 0000012345 01/01/24 0.00 5,000.00 5,000.00");
        let row = match_columns(&tokens).unwrap();
        assert_eq!(row.layout, LayoutKind::Full);
        assert_eq!(row.date, "01/01/24");
        assert_eq!(row.narration, "NEFT CR ACME PAYROLL");
        assert_eq!(row.reference, "0000012345");
        assert_eq!(row.value_date, "01/01/24");
        assert_eq!(
            row.amounts,
            RowAmounts::Split {
                withdrawal: "0.00",
                deposit: "5,000.00"
            }
        );
        assert_eq!(row.balance, "5,000.00");
    }

    #[test]
    fn test_partial_row() {
        let tokens = toks("02/01/24 Interest 67890 02/01/24 50.00 5050.00");
        let row = match_columns(&tokens).unwrap();
        assert_eq!(row.layout, LayoutKind::Partial);
        assert_eq!(row.narration, "Interest");
        assert_eq!(row.reference, "67890");
        assert_eq!(row.amounts, RowAmounts::Unsigned("50.00"));
        assert_eq!(row.balance, "5050.00");
    }

    #[test]
    fn test_wide_partial_row_is_not_read_as_full() {
        // Eight tokens, but token[-4] is a reference, not a value date.
        let tokens = toks("02/01/24 UPI COFFEE HOUSE 67890 02/01/24 120.00 4930.00");
        let row = match_columns(&tokens).unwrap();
        assert_eq!(row.layout, LayoutKind::Partial);
        assert_eq!(row.narration, "UPI COFFEE HOUSE");
    }

    #[test]
    fn test_full_row_with_empty_narration_needs_seven_tokens() {
        let tokens = toks("01/01/24 12345 01/01/24 0.00 5000.00 5000.00");
        assert!(!FULL.accepts(&tokens));
        // Six tokens fall through to the partial layout, whose value-date slot
        // then holds an amount and fails.
        assert!(match_columns(&tokens).is_none());
    }

    #[rstest]
    #[case("03/01/24 ATM")]
    #[case("03/01/24 ATM 99 03/01/24 100.00 4900")]
    #[case("03/01/24 ATM 99 3/1/24 100.00 4900.00")]
    #[case("03/01/24 was the date of the last call")]
    fn test_unmatched_rows(#[case] line: &str) {
        assert!(match_columns(&toks(line)).is_none());
    }
}
