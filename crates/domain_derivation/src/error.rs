//! Derivation errors
//!
//! Unresolved accounts are not errors here: that path is a recorded,
//! silent skip. Only real ledger failures propagate.

use thiserror::Error;

use domain_ledger::LedgerError;

#[derive(Debug, Error)]
pub enum DerivationError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
