//! Direction of single-amount rows.
//!
//! A row that shows one amount does not say whether money left or entered the
//! account. The closing balance does: if it rose since the previous row, the
//! amount was a deposit.

use rust_decimal::Decimal;

use crate::profile::StatementProfile;

/// Closing balance of the most recent matched row in this scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunningBalance(Option<Decimal>);

impl RunningBalance {
    pub fn unknown() -> Self {
        Self(None)
    }

    pub fn get(&self) -> Option<Decimal> {
        self.0
    }

    pub fn update(&mut self, balance: Decimal) {
        self.0 = Some(balance);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Withdrawal,
    Deposit,
}

/// What a polarity decision was based on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolarityBasis {
    BalanceRose,
    BalanceDidNotRise,
    /// First row of the document: no earlier balance, narration keywords used.
    /// Best effort only.
    KeywordFallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub polarity: Polarity,
    pub basis: PolarityBasis,
}

pub fn resolve_polarity(
    current: Decimal,
    running: &RunningBalance,
    narration: &str,
    profile: &StatementProfile,
) -> Resolution {
    match running.get() {
        Some(previous) if current > previous => Resolution {
            polarity: Polarity::Deposit,
            basis: PolarityBasis::BalanceRose,
        },
        Some(_) => Resolution {
            polarity: Polarity::Withdrawal,
            basis: PolarityBasis::BalanceDidNotRise,
        },
        None => Resolution {
            polarity: if profile.mentions_debit_keyword(narration) {
                Polarity::Withdrawal
            } else {
                Polarity::Deposit
            },
            basis: PolarityBasis::KeywordFallback,
        },
    }
}
