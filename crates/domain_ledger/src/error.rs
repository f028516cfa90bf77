//! Ledger domain errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur in the ledger domain
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Account not found
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// Account code already registered
    #[error("Account code already registered: {0}")]
    DuplicateAccountCode(String),

    /// Account is referenced by journal entries and cannot be deleted
    #[error("Account {0} is referenced by journal entries and cannot be deleted")]
    AccountInUse(String),

    /// Account category cannot change once entries reference the account
    #[error("Account {0} has journal entries; its category is locked")]
    CategoryLocked(String),

    /// Journal entry not found
    #[error("Journal entry not found: {0}")]
    EntryNotFound(String),

    /// Journal amounts must be strictly positive
    #[error("Journal amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),
}
