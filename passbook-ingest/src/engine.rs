//! Single-pass statement scan.
//!
//! Each line produces exactly one [`LineOutcome`]. The only state carried from
//! line to line is the [`ScanState`]: the transactions built so far and the
//! running balance.

use std::collections::BTreeMap;
use std::path::Path;

use passbook_core::record::ZERO_AMOUNT;
use passbook_core::{FinalRecord, InterimTransaction, parse_amount};
use tracing::{debug, info};

use crate::classify::{LineClass, classify};
use crate::error::IngestError;
use crate::layout::{LayoutKind, RawRow, RowAmounts, match_columns};
use crate::narration::merge_continuation;
use crate::pages::{join_pages, load_pages, source_for_path};
use crate::polarity::{Polarity, RunningBalance, resolve_polarity};
use crate::profile::{ProfileError, StatementProfile};
use crate::section::{SectionLine, SectionLocator, SkipReason};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DropReason {
    /// Outside the transaction table, a banner, a page break or blank.
    Section(SkipReason),
    /// Page furniture inside the table.
    Junk,
    /// Continuation text before the first transaction.
    OrphanContinuation,
    /// Starts with a date but fits no column layout.
    UnmatchedHeader,
    /// Fits a layout but an amount column does not parse.
    InvalidNumber,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    HeaderMatched(LayoutKind),
    ContinuationMerged,
    Dropped(DropReason),
}

/// Carry state of one scan. Never shared between documents.
#[derive(Debug, Default)]
pub struct ScanState {
    records: Vec<InterimTransaction>,
    running: RunningBalance,
}

impl ScanState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[InterimTransaction] {
        &self.records
    }

    pub fn running_balance(&self) -> RunningBalance {
        self.running
    }

    pub fn into_records(self) -> Vec<InterimTransaction> {
        self.records
    }
}

/// Tally of line outcomes for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub full_rows: usize,
    pub partial_rows: usize,
    pub merged_lines: usize,
    pub dropped: BTreeMap<DropReason, usize>,
}

impl ParseReport {
    pub fn record(&mut self, outcome: LineOutcome) {
        match outcome {
            LineOutcome::HeaderMatched(LayoutKind::Full) => self.full_rows += 1,
            LineOutcome::HeaderMatched(LayoutKind::Partial) => self.partial_rows += 1,
            LineOutcome::ContinuationMerged => self.merged_lines += 1,
            LineOutcome::Dropped(reason) => *self.dropped.entry(reason).or_default() += 1,
        }
    }

    pub fn rows_matched(&self) -> usize {
        self.full_rows + self.partial_rows
    }

    pub fn dropped_count(&self, reason: DropReason) -> usize {
        self.dropped.get(&reason).copied().unwrap_or(0)
    }

    /// Dropped lines that were inside the table, i.e. not section filtering.
    pub fn dropped_in_section(&self) -> usize {
        self.dropped
            .iter()
            .filter(|(reason, _)| !matches!(reason, DropReason::Section(_)))
            .map(|(_, n)| n)
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutput {
    pub records: Vec<FinalRecord>,
    pub report: ParseReport,
}

#[derive(Debug, Clone)]
pub struct StatementEngine {
    profile: StatementProfile,
}

impl Default for StatementEngine {
    fn default() -> Self {
        Self::hdfc()
    }
}

impl StatementEngine {
    /// Engine for a configured profile; the profile is validated first.
    pub fn new(profile: StatementProfile) -> Result<Self, ProfileError> {
        profile.validate()?;
        Ok(Self { profile })
    }

    pub fn hdfc() -> Self {
        Self {
            profile: StatementProfile::hdfc(),
        }
    }

    pub fn profile(&self) -> &StatementProfile {
        &self.profile
    }

    /// Scan full document text (pages already joined with the page-break
    /// marker).
    pub fn scan(&self, text: &str) -> ScanOutput {
        let mut locator = SectionLocator::new(&self.profile);
        let mut state = ScanState::new();
        let mut report = ParseReport::default();

        for raw in text.lines() {
            let outcome = match locator.feed(raw) {
                SectionLine::Body(line) => self.step(&mut state, line),
                SectionLine::Skipped(reason) => LineOutcome::Dropped(DropReason::Section(reason)),
            };
            report.record(outcome);
        }

        let records = normalize_records(state.records());
        info!(
            profile = %self.profile.name,
            records = records.len(),
            full = report.full_rows,
            partial = report.partial_rows,
            merged = report.merged_lines,
            dropped_in_section = report.dropped_in_section(),
            "statement scanned"
        );

        ScanOutput { records, report }
    }

    /// Scan pages as returned by a [`PageSource`](crate::pages::PageSource).
    pub fn scan_pages<S: AsRef<str>>(&self, pages: &[S]) -> ScanOutput {
        self.scan(&join_pages(pages, &self.profile.page_break_marker))
    }

    /// Load `path` (PDF or extracted text) and scan it. Failures to obtain the
    /// text are returned as-is.
    pub fn scan_file(&self, path: &Path) -> Result<ScanOutput, IngestError> {
        let source = source_for_path(path);
        let pages = load_pages(&*source, path)?;
        Ok(self.scan_pages(pages.as_slice()))
    }

    pub fn parse_text(&self, text: &str) -> Vec<FinalRecord> {
        self.scan(text).records
    }

    /// Process one in-section line.
    pub fn step(&self, state: &mut ScanState, line: &str) -> LineOutcome {
        match classify(line, &self.profile) {
            LineClass::Header(tokens) => self.accept_header(state, &tokens, line),
            LineClass::Junk => {
                debug!(line, "dropping page furniture");
                LineOutcome::Dropped(DropReason::Junk)
            }
            LineClass::Continuation(text) => {
                if merge_continuation(&mut state.records, text) {
                    LineOutcome::ContinuationMerged
                } else {
                    debug!(line, "continuation before first transaction");
                    LineOutcome::Dropped(DropReason::OrphanContinuation)
                }
            }
        }
    }

    fn accept_header(&self, state: &mut ScanState, tokens: &[&str], line: &str) -> LineOutcome {
        let Some(row) = match_columns(tokens) else {
            debug!(line, "date-led line fits no column layout");
            return LineOutcome::Dropped(DropReason::UnmatchedHeader);
        };

        match self.build_transaction(&row, state.running) {
            Ok((tx, balance)) => {
                state.running.update(balance);
                state.records.push(tx);
                LineOutcome::HeaderMatched(row.layout)
            }
            Err(e) => {
                debug!(line, error = %e, "abandoning row");
                LineOutcome::Dropped(DropReason::InvalidNumber)
            }
        }
    }

    /// Every amount column is parsed before anything is committed.
    fn build_transaction(
        &self,
        row: &RawRow<'_>,
        running: RunningBalance,
    ) -> Result<(InterimTransaction, rust_decimal::Decimal), passbook_core::Error> {
        let balance = parse_amount(row.balance)?;

        let (withdrawal, deposit) = match row.amounts {
            RowAmounts::Split { withdrawal, deposit } => {
                parse_amount(withdrawal)?;
                parse_amount(deposit)?;
                (withdrawal, deposit)
            }
            RowAmounts::Unsigned(amount) => {
                parse_amount(amount)?;
                let resolution = resolve_polarity(balance, &running, &row.narration, &self.profile);
                debug!(
                    date = row.date,
                    amount,
                    balance = row.balance,
                    polarity = ?resolution.polarity,
                    basis = ?resolution.basis,
                    "resolved single-amount row"
                );
                match resolution.polarity {
                    Polarity::Withdrawal => (amount, ZERO_AMOUNT),
                    Polarity::Deposit => (ZERO_AMOUNT, amount),
                }
            }
        };

        let tx = InterimTransaction {
            date: row.date.to_string(),
            narration: row.narration.clone(),
            ref_no: row.reference.to_string(),
            value_date: row.value_date.to_string(),
            withdrawal: withdrawal.to_string(),
            deposit: deposit.to_string(),
            balance: row.balance.to_string(),
        };
        Ok((tx, balance))
    }
}

pub fn normalize_records(records: &[InterimTransaction]) -> Vec<FinalRecord> {
    records.iter().map(InterimTransaction::normalize).collect()
}
