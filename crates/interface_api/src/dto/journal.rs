//! Journal entry DTOs
//!
//! Requests address accounts by code; responses carry both sides'
//! code and name so listings render without extra lookups.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{EntryId, Money};
use domain_ledger::{JournalEntry, Ledger};

#[derive(Debug, Deserialize)]
pub struct CreateEntryRequest {
    pub date: NaiveDate,
    pub description: String,
    pub debit_code: String,
    pub credit_code: String,
    pub amount: Money,
}

#[derive(Debug, Deserialize)]
pub struct UpdateEntryRequest {
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub debit_code: Option<String>,
    pub credit_code: Option<String>,
    pub amount: Option<Money>,
}

#[derive(Debug, Deserialize)]
pub struct EntryListQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct EntryResponse {
    pub id: EntryId,
    pub date: NaiveDate,
    pub description: String,
    pub debit_code: String,
    pub debit_name: String,
    pub credit_code: String,
    pub credit_name: String,
    pub amount: Money,
    pub derivation_key: Option<String>,
}

impl EntryResponse {
    pub fn from_entry(ledger: &Ledger, entry: &JournalEntry) -> Self {
        let (debit_code, debit_name) = ledger
            .account(entry.debit_account)
            .map(|a| (a.code.clone(), a.name.clone()))
            .unwrap_or_default();
        let (credit_code, credit_name) = ledger
            .account(entry.credit_account)
            .map(|a| (a.code.clone(), a.name.clone()))
            .unwrap_or_default();
        Self {
            id: entry.id,
            date: entry.date,
            description: entry.description.clone(),
            debit_code,
            debit_name,
            credit_code,
            credit_name,
            amount: entry.amount,
            derivation_key: entry.derivation_key.clone(),
        }
    }
}
