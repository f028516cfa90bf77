//! Daily cash book DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::Money;
use domain_events::{CashbookEntry, CashbookLine, CashbookSummary};

#[derive(Debug, Deserialize)]
pub struct CashbookRequest {
    pub date: NaiveDate,
    pub description: String,
    #[serde(default)]
    pub inflow: Money,
    #[serde(default)]
    pub outflow: Money,
    #[serde(default)]
    pub note: Option<String>,
}

impl CashbookRequest {
    pub fn apply(self, entry: &mut CashbookEntry) {
        entry.date = self.date;
        entry.description = self.description;
        entry.inflow = self.inflow;
        entry.outflow = self.outflow;
        entry.note = self.note;
    }
}

#[derive(Debug, Serialize)]
pub struct CashbookListResponse {
    pub lines: Vec<CashbookLine>,
    pub summary: CashbookSummary,
}
