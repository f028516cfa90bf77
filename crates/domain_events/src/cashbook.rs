//! Daily cash book
//!
//! A parallel cash diary kept alongside the ledger. Entries here never
//! feed derivation rules and never touch journal accounts; the book
//! exists so the office can reconcile the physical drawer day by day.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use core_kernel::{CashbookId, Money, ReportingPeriod};

use crate::error::EventError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashbookEntry {
    pub id: CashbookId,
    pub date: NaiveDate,
    pub description: String,
    pub inflow: Money,
    pub outflow: Money,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl CashbookEntry {
    pub fn new(date: NaiveDate, description: impl Into<String>) -> Self {
        Self {
            id: CashbookId::new_v7(),
            date,
            description: description.into(),
            inflow: Money::zero(),
            outflow: Money::zero(),
            note: None,
            created_at: Utc::now(),
        }
    }
}

/// One listed row with the balance after it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashbookLine {
    pub entry: CashbookEntry,
    pub running_balance: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashbookSummary {
    pub total_inflow: Money,
    pub total_outflow: Money,
    pub closing_balance: Money,
}

#[derive(Debug, Default, Clone)]
pub struct CashbookRegister {
    entries: HashMap<CashbookId, CashbookEntry>,
    next_seq: u64,
    seqs: HashMap<CashbookId, u64>,
}

impl CashbookRegister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: CashbookEntry) -> Result<CashbookId, EventError> {
        if entry.description.trim().is_empty() {
            return Err(EventError::validation("description is required"));
        }
        if entry.inflow.is_negative() || entry.outflow.is_negative() {
            return Err(EventError::validation("inflow and outflow must not be negative"));
        }
        let id = entry.id;
        self.entries.insert(id, entry);
        self.seqs.insert(id, self.next_seq);
        self.next_seq += 1;
        Ok(id)
    }

    pub fn update(&mut self, entry: CashbookEntry) -> Result<(), EventError> {
        if !self.entries.contains_key(&entry.id) {
            return Err(EventError::not_found("cash book entry"));
        }
        if entry.inflow.is_negative() || entry.outflow.is_negative() {
            return Err(EventError::validation("inflow and outflow must not be negative"));
        }
        self.entries.insert(entry.id, entry);
        Ok(())
    }

    pub fn remove(&mut self, id: CashbookId) -> Result<CashbookEntry, EventError> {
        self.seqs.remove(&id);
        self.entries
            .remove(&id)
            .ok_or_else(|| EventError::not_found("cash book entry"))
    }

    pub fn get(&self, id: CashbookId) -> Option<&CashbookEntry> {
        self.entries.get(&id)
    }

    /// Entries within the period, date ascending with a running balance
    ///
    /// The running balance starts from zero at the window's opening; a
    /// bounded window therefore shows the movement within it, not the
    /// drawer's absolute level.
    pub fn listing(&self, period: ReportingPeriod) -> Vec<CashbookLine> {
        let mut entries: Vec<_> = self
            .entries
            .values()
            .filter(|e| period.contains(e.date))
            .collect();
        entries.sort_by(|a, b| {
            a.date
                .cmp(&b.date)
                .then(self.seqs.get(&a.id).cmp(&self.seqs.get(&b.id)))
        });

        let mut running = Money::zero();
        entries
            .into_iter()
            .map(|entry| {
                running += entry.inflow - entry.outflow;
                CashbookLine {
                    entry: entry.clone(),
                    running_balance: running,
                }
            })
            .collect()
    }

    pub fn summary(&self, period: ReportingPeriod) -> CashbookSummary {
        let mut total_inflow = Money::zero();
        let mut total_outflow = Money::zero();
        for entry in self.entries.values().filter(|e| period.contains(e.date)) {
            total_inflow += entry.inflow;
            total_outflow += entry.outflow;
        }
        CashbookSummary {
            total_inflow,
            total_outflow,
            closing_balance: total_inflow - total_outflow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rp(amount: i64) -> Money {
        Money::from_rupiah(amount)
    }

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, day).unwrap()
    }

    #[test]
    fn test_running_balance_in_date_order() {
        let mut book = CashbookRegister::new();
        let mut late = CashbookEntry::new(d(3), "Bayar listrik");
        late.outflow = rp(150_000);
        book.insert(late).unwrap();
        let mut early = CashbookEntry::new(d(1), "Setoran tunai");
        early.inflow = rp(500_000);
        book.insert(early).unwrap();

        let lines = book.listing(ReportingPeriod::all_time());
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].entry.description, "Setoran tunai");
        assert_eq!(lines[0].running_balance, rp(500_000));
        assert_eq!(lines[1].running_balance, rp(350_000));
    }

    #[test]
    fn test_same_day_entries_keep_insertion_order() {
        let mut book = CashbookRegister::new();
        let mut first = CashbookEntry::new(d(5), "Pertama");
        first.inflow = rp(100);
        book.insert(first).unwrap();
        let mut second = CashbookEntry::new(d(5), "Kedua");
        second.inflow = rp(200);
        book.insert(second).unwrap();

        let lines = book.listing(ReportingPeriod::all_time());
        assert_eq!(lines[0].entry.description, "Pertama");
        assert_eq!(lines[1].entry.description, "Kedua");
    }

    #[test]
    fn test_negative_amounts_rejected() {
        let mut book = CashbookRegister::new();
        let mut entry = CashbookEntry::new(d(1), "Salah");
        entry.inflow = rp(-5);
        assert!(matches!(
            book.insert(entry),
            Err(EventError::Validation(_))
        ));
    }

    #[test]
    fn test_summary_over_period() {
        let mut book = CashbookRegister::new();
        let mut july = CashbookEntry::new(NaiveDate::from_ymd_opt(2026, 7, 31).unwrap(), "Juli");
        july.inflow = rp(1_000_000);
        book.insert(july).unwrap();
        let mut august = CashbookEntry::new(d(1), "Agustus");
        august.inflow = rp(300_000);
        august.outflow = rp(120_000);
        book.insert(august).unwrap();

        let summary = book.summary(ReportingPeriod::month(2026, 8).unwrap());
        assert_eq!(summary.total_inflow, rp(300_000));
        assert_eq!(summary.total_outflow, rp(120_000));
        assert_eq!(summary.closing_balance, rp(180_000));
    }
}
