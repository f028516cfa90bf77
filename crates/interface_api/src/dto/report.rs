//! Report DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{ReportingPeriod, TemporalError};
use domain_ledger::DashboardSummary;

use crate::dto::journal::EntryResponse;

/// Optional inclusive date window shared by all report endpoints
#[derive(Debug, Default, Deserialize)]
pub struct PeriodQuery {
    #[serde(default)]
    pub from: Option<NaiveDate>,
    #[serde(default)]
    pub to: Option<NaiveDate>,
}

impl PeriodQuery {
    pub fn period(&self) -> Result<ReportingPeriod, TemporalError> {
        ReportingPeriod::new(self.from, self.to)
    }
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    #[serde(flatten)]
    pub summary: DashboardSummary,
    pub recent_entries: Vec<EntryResponse>,
}
