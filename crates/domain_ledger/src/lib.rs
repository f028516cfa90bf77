//! Ledger Domain - Double-Entry Bookkeeping Core
//!
//! This crate implements the chart of accounts, the journal store, the
//! balance calculator, and the financial statement generator for the
//! cargo back office.
//!
//! # Double-Entry Principles
//!
//! Every journal entry pairs one debit account with one credit account
//! and a positive amount:
//! - Debits increase asset/expense accounts
//! - Credits increase liability/equity/revenue accounts
//!
//! The store validates each entry in isolation but does not force the
//! ledger as a whole to balance; balanced bookkeeping is the contract
//! of the derivation rules that feed it, and the trial balance exposes
//! any discrepancy as a diagnostic.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_ledger::{Ledger, EntryDraft, AccountCategory};
//!
//! let mut ledger = Ledger::new();
//! let kas = ledger.register_account("111", "Kas", AccountCategory::Asset)?;
//! let modal = ledger.register_account("311", "Modal", AccountCategory::Equity)?;
//!
//! ledger.post(EntryDraft::new(today, "Setoran modal", kas, modal, amount))?;
//! ```

pub mod account;
pub mod entry;
pub mod error;
pub mod ledger;
pub mod statements;

pub use account::{Account, AccountCategory, CargoChartOfAccounts, NormalSide};
pub use entry::{EntryDraft, EntryUpdate, JournalEntry};
pub use error::LedgerError;
pub use ledger::Ledger;
pub use statements::{
    balance_sheet, cash_flow, dashboard, general_ledger, income_statement, trial_balance,
    BalanceSheet, CashFlowStatement, DashboardSummary, GeneralLedgerDetail, IncomeStatement,
    TrialBalance, WITHHOLDING_TAX_RATE,
};
