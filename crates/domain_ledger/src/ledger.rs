//! The ledger aggregate: account registry plus journal store
//!
//! The `Ledger` owns the chart of accounts and all journal entries.
//! It validates referential integrity (both accounts of an entry must
//! exist, amounts must be positive) but deliberately does NOT enforce
//! double-entry balance across unrelated entries; balance is a
//! property of the derivation rules, not of the store. Balances are
//! recomputed from entries on every query; entries mutate too often
//! through derivation for a cache to pay off.

use std::collections::HashMap;

use chrono::Utc;
use core_kernel::{AccountId, EntryId, Money, ReportingPeriod};

use crate::account::{Account, AccountCategory, NormalSide};
use crate::entry::{EntryDraft, EntryUpdate, JournalEntry};
use crate::error::LedgerError;

/// The ledger for the whole back office
#[derive(Debug, Default)]
pub struct Ledger {
    /// Chart of accounts
    accounts: HashMap<AccountId, Account>,
    /// Account code -> id index enforcing code uniqueness
    code_index: HashMap<String, AccountId>,
    /// Journal entries in insertion order
    entries: Vec<JournalEntry>,
    /// Next insertion sequence number
    next_seq: u64,
}

impl Ledger {
    /// Creates an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a ledger seeded with a chart of accounts
    ///
    /// # Errors
    ///
    /// Returns `DuplicateAccountCode` if the seed chart repeats a code.
    pub fn with_chart(
        chart: impl IntoIterator<Item = (impl Into<String>, impl Into<String>, AccountCategory)>,
    ) -> Result<Self, LedgerError> {
        let mut ledger = Self::new();
        for (code, name, category) in chart {
            ledger.register_account(code, name, category)?;
        }
        Ok(ledger)
    }

    // ------------------------------------------------------------------
    // Account registry
    // ------------------------------------------------------------------

    /// Registers a new account
    ///
    /// # Errors
    ///
    /// Returns `DuplicateAccountCode` if the code is already taken.
    pub fn register_account(
        &mut self,
        code: impl Into<String>,
        name: impl Into<String>,
        category: AccountCategory,
    ) -> Result<AccountId, LedgerError> {
        let code = code.into();
        if self.code_index.contains_key(&code) {
            return Err(LedgerError::DuplicateAccountCode(code));
        }

        let account = Account::new(AccountId::new_v7(), code.clone(), name, category);
        let id = account.id;
        self.code_index.insert(code, id);
        self.accounts.insert(id, account);
        Ok(id)
    }

    /// Gets an account by id
    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.get(&id)
    }

    /// Gets an account by its unique code
    pub fn account_by_code(&self, code: &str) -> Option<&Account> {
        self.code_index.get(code).and_then(|id| self.accounts.get(id))
    }

    /// Best-effort fallback lookup: first account whose name contains
    /// the needle, case-insensitively, lowest code first
    pub fn find_account_by_name(&self, needle: &str) -> Option<&Account> {
        self.accounts_sorted()
            .into_iter()
            .find(|a| a.name_contains(needle))
    }

    /// All accounts ordered by code
    pub fn accounts_sorted(&self) -> Vec<&Account> {
        let mut accounts: Vec<&Account> = self.accounts.values().collect();
        accounts.sort_by(|a, b| a.code.cmp(&b.code));
        accounts
    }

    /// All accounts of one category, ordered by code
    pub fn accounts_in_category(&self, category: AccountCategory) -> Vec<&Account> {
        self.accounts_sorted()
            .into_iter()
            .filter(|a| a.category == category)
            .collect()
    }

    /// Updates an account's code, name, or category
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if the id is unknown
    /// - `DuplicateAccountCode` if the new code is taken by another account
    /// - `CategoryLocked` if the category would change while journal
    ///   entries reference the account
    pub fn update_account(
        &mut self,
        id: AccountId,
        code: Option<String>,
        name: Option<String>,
        category: Option<AccountCategory>,
    ) -> Result<(), LedgerError> {
        let current = self
            .accounts
            .get(&id)
            .ok_or_else(|| LedgerError::AccountNotFound(id.to_string()))?;

        if let Some(new_category) = category {
            if new_category != current.category && self.is_referenced(id) {
                return Err(LedgerError::CategoryLocked(current.code.clone()));
            }
        }

        if let Some(new_code) = &code {
            if let Some(owner) = self.code_index.get(new_code) {
                if *owner != id {
                    return Err(LedgerError::DuplicateAccountCode(new_code.clone()));
                }
            }
        }

        let Some(account) = self.accounts.get_mut(&id) else {
            return Err(LedgerError::AccountNotFound(id.to_string()));
        };
        if let Some(new_code) = code {
            self.code_index.remove(&account.code);
            self.code_index.insert(new_code.clone(), id);
            account.code = new_code;
        }
        if let Some(new_name) = name {
            account.name = new_name;
        }
        if let Some(new_category) = category {
            account.category = new_category;
        }
        Ok(())
    }

    /// Deletes an account
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if the id is unknown
    /// - `AccountInUse` if any journal entry references the account
    pub fn remove_account(&mut self, id: AccountId) -> Result<Account, LedgerError> {
        let account = self
            .accounts
            .get(&id)
            .ok_or_else(|| LedgerError::AccountNotFound(id.to_string()))?;

        if self.is_referenced(id) {
            return Err(LedgerError::AccountInUse(account.code.clone()));
        }

        let account = self
            .accounts
            .remove(&id)
            .ok_or_else(|| LedgerError::AccountNotFound(id.to_string()))?;
        self.code_index.remove(&account.code);
        Ok(account)
    }

    /// Returns true if any journal entry debits or credits the account
    pub fn is_referenced(&self, id: AccountId) -> bool {
        self.entries
            .iter()
            .any(|e| e.debit_account == id || e.credit_account == id)
    }

    // ------------------------------------------------------------------
    // Journal store
    // ------------------------------------------------------------------

    /// Posts a journal entry
    ///
    /// # Errors
    ///
    /// - `NonPositiveAmount` if the amount is zero or negative
    /// - `AccountNotFound` if either account does not exist
    pub fn post(&mut self, draft: EntryDraft) -> Result<EntryId, LedgerError> {
        draft
            .amount
            .require_positive()
            .map_err(|_| LedgerError::NonPositiveAmount(draft.amount.amount()))?;
        self.require_account(draft.debit_account)?;
        self.require_account(draft.credit_account)?;

        let id = EntryId::new_v7();
        let seq = self.next_seq;
        self.next_seq += 1;

        self.entries.push(JournalEntry {
            id,
            date: draft.date,
            description: draft.description,
            derivation_key: draft.derivation_key,
            debit_account: draft.debit_account,
            credit_account: draft.credit_account,
            amount: draft.amount,
            seq,
            created_at: Utc::now(),
        });
        Ok(id)
    }

    /// Gets an entry by id
    pub fn entry(&self, id: EntryId) -> Option<&JournalEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// The most recent entries, newest business date first,
    /// creation order breaking ties
    pub fn recent_entries(&self, limit: usize) -> Vec<&JournalEntry> {
        let mut entries: Vec<&JournalEntry> = self.entries.iter().collect();
        entries.sort_by(|a, b| b.date.cmp(&a.date).then(b.seq.cmp(&a.seq)));
        entries.truncate(limit);
        entries
    }

    /// Applies a partial update to an entry
    ///
    /// # Errors
    ///
    /// - `EntryNotFound` if the id is unknown
    /// - `NonPositiveAmount` / `AccountNotFound` if the new fields fail
    ///   the same validation as posting
    pub fn update_entry(&mut self, id: EntryId, update: EntryUpdate) -> Result<(), LedgerError> {
        if let Some(amount) = update.amount {
            amount
                .require_positive()
                .map_err(|_| LedgerError::NonPositiveAmount(amount.amount()))?;
        }
        if let Some(debit) = update.debit_account {
            self.require_account(debit)?;
        }
        if let Some(credit) = update.credit_account {
            self.require_account(credit)?;
        }

        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| LedgerError::EntryNotFound(id.to_string()))?;

        if let Some(date) = update.date {
            entry.date = date;
        }
        if let Some(description) = update.description {
            entry.description = description;
        }
        if let Some(debit) = update.debit_account {
            entry.debit_account = debit;
        }
        if let Some(credit) = update.credit_account {
            entry.credit_account = credit;
        }
        if let Some(amount) = update.amount {
            entry.amount = amount;
        }
        Ok(())
    }

    /// Deletes an entry
    ///
    /// # Errors
    ///
    /// Returns `EntryNotFound` if the id is unknown.
    pub fn delete_entry(&mut self, id: EntryId) -> Result<JournalEntry, LedgerError> {
        let index = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| LedgerError::EntryNotFound(id.to_string()))?;
        Ok(self.entries.remove(index))
    }

    /// Finds the entry carrying the exact derivation key
    pub fn find_by_key(&self, key: &str) -> Option<EntryId> {
        self.entries
            .iter()
            .find(|e| e.derivation_key.as_deref() == Some(key))
            .map(|e| e.id)
    }

    /// Finds all entries whose derivation key starts with the prefix.
    /// Used for bulk retraction of multi-entry derivations.
    pub fn find_by_key_prefix(&self, prefix: &str) -> Vec<EntryId> {
        self.entries
            .iter()
            .filter(|e| {
                e.derivation_key
                    .as_deref()
                    .is_some_and(|k| k.starts_with(prefix))
            })
            .map(|e| e.id)
            .collect()
    }

    /// Finds an entry by exact description match. Retained for manual
    /// workflows; derivation matching uses keys instead.
    pub fn find_by_description(&self, description: &str) -> Option<EntryId> {
        self.entries
            .iter()
            .find(|e| e.description == description)
            .map(|e| e.id)
    }

    /// Inserts or updates the single entry identified by a derivation
    /// key. Re-deriving an unchanged event therefore never duplicates
    /// an entry: the existing one is rewritten in place.
    pub fn upsert_by_key(&mut self, key: &str, draft: EntryDraft) -> Result<EntryId, LedgerError> {
        match self.find_by_key(key) {
            Some(id) => {
                self.update_entry(
                    id,
                    EntryUpdate {
                        date: Some(draft.date),
                        description: Some(draft.description),
                        debit_account: Some(draft.debit_account),
                        credit_account: Some(draft.credit_account),
                        amount: Some(draft.amount),
                    },
                )?;
                Ok(id)
            }
            None => self.post(draft.with_key(key)),
        }
    }

    /// Deletes the entry carrying the exact key, if any.
    /// Returns true when an entry was removed.
    pub fn retract_key(&mut self, key: &str) -> bool {
        match self.find_by_key(key) {
            Some(id) => self.delete_entry(id).is_ok(),
            None => false,
        }
    }

    /// Deletes every entry whose key starts with the prefix.
    /// Returns the number of entries removed.
    pub fn retract_prefix(&mut self, prefix: &str) -> usize {
        let ids = self.find_by_key_prefix(prefix);
        let count = ids.len();
        for id in ids {
            // ids came from the store, removal cannot fail
            let _ = self.delete_entry(id);
        }
        count
    }

    // ------------------------------------------------------------------
    // Balance calculator
    // ------------------------------------------------------------------

    /// Computes an account's signed balance over an optional date window
    ///
    /// Debit-side and credit-side amounts are summed separately over
    /// entries inside the window; the result is `debit − credit` for
    /// debit-normal accounts and `credit − debit` otherwise. An account
    /// with no matching entries balances to zero.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if the id is unknown.
    pub fn balance(&self, id: AccountId, period: ReportingPeriod) -> Result<Money, LedgerError> {
        let account = self.require_account(id)?;

        let mut debit = Money::zero();
        let mut credit = Money::zero();
        for entry in &self.entries {
            if !period.contains(entry.date) {
                continue;
            }
            if entry.debit_account == id {
                debit += entry.amount;
            }
            if entry.credit_account == id {
                credit += entry.amount;
            }
        }

        Ok(match account.normal_side() {
            NormalSide::Debit => debit - credit,
            NormalSide::Credit => credit - debit,
        })
    }

    /// All entries touching the account, date ascending with insertion
    /// order breaking ties. Feeds the general-ledger detail view.
    pub fn account_entries(&self, id: AccountId) -> Vec<&JournalEntry> {
        let mut entries: Vec<&JournalEntry> = self
            .entries
            .iter()
            .filter(|e| e.debit_account == id || e.credit_account == id)
            .collect();
        entries.sort_by(|a, b| a.date.cmp(&b.date).then(a.seq.cmp(&b.seq)));
        entries
    }

    fn require_account(&self, id: AccountId) -> Result<&Account, LedgerError> {
        self.accounts
            .get(&id)
            .ok_or_else(|| LedgerError::AccountNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn setup() -> (Ledger, AccountId, AccountId) {
        let mut ledger = Ledger::new();
        let kas = ledger
            .register_account("111", "Kas", AccountCategory::Asset)
            .unwrap();
        let pendapatan = ledger
            .register_account("411", "Pendapatan Jasa", AccountCategory::Revenue)
            .unwrap();
        (ledger, kas, pendapatan)
    }

    #[test]
    fn test_duplicate_code_rejected() {
        let (mut ledger, _, _) = setup();
        let result = ledger.register_account("111", "Kas Kecil", AccountCategory::Asset);
        assert!(matches!(result, Err(LedgerError::DuplicateAccountCode(_))));
    }

    #[test]
    fn test_post_validates_amount_and_accounts() {
        let (mut ledger, kas, pendapatan) = setup();

        let zero = EntryDraft::new(d(2026, 8, 1), "Zero", kas, pendapatan, Money::zero());
        assert!(matches!(
            ledger.post(zero),
            Err(LedgerError::NonPositiveAmount(_))
        ));

        let ghost = EntryDraft::new(
            d(2026, 8, 1),
            "Ghost",
            AccountId::new(),
            pendapatan,
            Money::from_rupiah(1),
        );
        assert!(matches!(ledger.post(ghost), Err(LedgerError::AccountNotFound(_))));
    }

    #[test]
    fn test_balance_signs_follow_normal_side() {
        let (mut ledger, kas, pendapatan) = setup();
        ledger
            .post(EntryDraft::new(
                d(2026, 8, 1),
                "Terima pendapatan",
                kas,
                pendapatan,
                Money::from_rupiah(500_000),
            ))
            .unwrap();

        let kas_balance = ledger.balance(kas, ReportingPeriod::all_time()).unwrap();
        let revenue_balance = ledger.balance(pendapatan, ReportingPeriod::all_time()).unwrap();
        assert_eq!(kas_balance, Money::from_rupiah(500_000));
        assert_eq!(revenue_balance, Money::from_rupiah(500_000));
    }

    #[test]
    fn test_balance_respects_period() {
        let (mut ledger, kas, pendapatan) = setup();
        for (day, amount) in [(1, 100_000), (15, 200_000), (28, 400_000)] {
            ledger
                .post(EntryDraft::new(
                    d(2026, 8, day),
                    "Pendapatan",
                    kas,
                    pendapatan,
                    Money::from_rupiah(amount),
                ))
                .unwrap();
        }

        let mid_month =
            ReportingPeriod::new(Some(d(2026, 8, 10)), Some(d(2026, 8, 20))).unwrap();
        assert_eq!(
            ledger.balance(kas, mid_month).unwrap(),
            Money::from_rupiah(200_000)
        );
    }

    #[test]
    fn test_account_in_use_cannot_be_deleted() {
        let (mut ledger, kas, pendapatan) = setup();
        ledger
            .post(EntryDraft::new(
                d(2026, 8, 1),
                "Entry",
                kas,
                pendapatan,
                Money::from_rupiah(1_000),
            ))
            .unwrap();

        assert!(matches!(
            ledger.remove_account(kas),
            Err(LedgerError::AccountInUse(_))
        ));

        // Unreferenced accounts delete fine
        let idle = ledger
            .register_account("999", "Idle", AccountCategory::Asset)
            .unwrap();
        assert!(ledger.remove_account(idle).is_ok());
    }

    #[test]
    fn test_category_locked_once_referenced() {
        let (mut ledger, kas, pendapatan) = setup();
        ledger
            .post(EntryDraft::new(
                d(2026, 8, 1),
                "Entry",
                kas,
                pendapatan,
                Money::from_rupiah(1_000),
            ))
            .unwrap();

        let result = ledger.update_account(kas, None, None, Some(AccountCategory::Expense));
        assert!(matches!(result, Err(LedgerError::CategoryLocked(_))));

        // Renaming stays allowed
        ledger
            .update_account(kas, None, Some("Kas Besar".to_string()), None)
            .unwrap();
        assert_eq!(ledger.account(kas).unwrap().name, "Kas Besar");
    }

    #[test]
    fn test_upsert_by_key_is_idempotent() {
        let (mut ledger, kas, pendapatan) = setup();
        let draft = |amount: i64| {
            EntryDraft::new(
                d(2026, 8, 1),
                "Pendapatan inbound BMM001",
                kas,
                pendapatan,
                Money::from_rupiah(amount),
            )
        };

        let first = ledger.upsert_by_key("inbound/BMM001", draft(100_000)).unwrap();
        let second = ledger.upsert_by_key("inbound/BMM001", draft(150_000)).unwrap();

        assert_eq!(first, second);
        assert_eq!(ledger.entries().len(), 1);
        assert_eq!(ledger.entry(first).unwrap().amount, Money::from_rupiah(150_000));
    }

    #[test]
    fn test_retract_prefix_removes_only_matching() {
        let (mut ledger, kas, pendapatan) = setup();
        let post = |ledger: &mut Ledger, key: &str| {
            ledger
                .post(
                    EntryDraft::new(
                        d(2026, 8, 1),
                        key.to_string(),
                        kas,
                        pendapatan,
                        Money::from_rupiah(1_000),
                    )
                    .with_key(key),
                )
                .unwrap();
        };
        post(&mut ledger, "payroll/emp1/2026-08/advance");
        post(&mut ledger, "payroll/emp1/2026-08/net");
        post(&mut ledger, "payroll/emp2/2026-08/net");

        let removed = ledger.retract_prefix("payroll/emp1/2026-08");
        assert_eq!(removed, 2);
        assert_eq!(ledger.entries().len(), 1);
    }

    #[test]
    fn test_find_by_name_prefers_lowest_code() {
        let mut ledger = Ledger::new();
        ledger
            .register_account("114", "Piutang Karyawan", AccountCategory::Asset)
            .unwrap();
        ledger
            .register_account("113", "Piutang Usaha", AccountCategory::Asset)
            .unwrap();

        let found = ledger.find_account_by_name("piutang").unwrap();
        assert_eq!(found.code, "113");
    }

    #[test]
    fn test_same_account_on_both_sides_is_allowed() {
        // Not rejected: the source system permits it and the balance
        // contribution cancels out.
        let (mut ledger, kas, _) = setup();
        ledger
            .post(EntryDraft::new(
                d(2026, 8, 1),
                "Transfer internal",
                kas,
                kas,
                Money::from_rupiah(5_000),
            ))
            .unwrap();
        assert_eq!(
            ledger.balance(kas, ReportingPeriod::all_time()).unwrap(),
            Money::zero()
        );
    }
}
