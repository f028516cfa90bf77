//! Journal entry types
//!
//! A journal entry is one balanced debit+credit record: a date, a
//! free-text description for display, one debit account, one credit
//! account, and a positive amount. Entries produced by derivation rules
//! additionally carry a stable derivation key used for idempotent
//! upsert and retraction; the description itself is never used for
//! matching.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{AccountId, EntryId, Money};

/// A journal entry in the ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Unique entry identifier
    pub id: EntryId,
    /// Business date of the transaction
    pub date: NaiveDate,
    /// Free-text description shown in listings
    pub description: String,
    /// Stable key set by derivation rules, None for manual entries
    pub derivation_key: Option<String>,
    /// Debited account
    pub debit_account: AccountId,
    /// Credited account
    pub credit_account: AccountId,
    /// Amount, always strictly positive
    pub amount: Money,
    /// Insertion order, used to break date ties in listings
    pub seq: u64,
    /// When the entry was recorded
    pub created_at: DateTime<Utc>,
}

/// The caller-supplied fields of a new journal entry
///
/// The ledger assigns the identifier, sequence number, and creation
/// timestamp when the draft is posted.
#[derive(Debug, Clone)]
pub struct EntryDraft {
    pub date: NaiveDate,
    pub description: String,
    pub derivation_key: Option<String>,
    pub debit_account: AccountId,
    pub credit_account: AccountId,
    pub amount: Money,
}

impl EntryDraft {
    /// Creates a manual entry draft
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        debit_account: AccountId,
        credit_account: AccountId,
        amount: Money,
    ) -> Self {
        Self {
            date,
            description: description.into(),
            derivation_key: None,
            debit_account,
            credit_account,
            amount,
        }
    }

    /// Attaches a stable derivation key
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.derivation_key = Some(key.into());
        self
    }
}

/// A partial update to an existing journal entry
///
/// Fields left as `None` are unchanged.
#[derive(Debug, Clone, Default)]
pub struct EntryUpdate {
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub debit_account: Option<AccountId>,
    pub credit_account: Option<AccountId>,
    pub amount: Option<Money>,
}
