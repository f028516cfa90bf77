//! Reporting-period types
//!
//! Balances and statements are computed over an optional inclusive
//! date window. A missing bound means "from the beginning" or
//! "through today".

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid period: from {from} is after to {to}")]
    InvalidPeriod { from: NaiveDate, to: NaiveDate },
}

/// An optional inclusive date window for balance and statement queries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingPeriod {
    /// Start of the window (inclusive), None means unbounded
    pub from: Option<NaiveDate>,
    /// End of the window (inclusive), None means unbounded
    pub to: Option<NaiveDate>,
}

impl ReportingPeriod {
    /// Creates a bounded or partially bounded period
    ///
    /// # Errors
    ///
    /// Returns `TemporalError::InvalidPeriod` if both bounds are given
    /// and `from` falls after `to`.
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<Self, TemporalError> {
        if let (Some(from), Some(to)) = (from, to) {
            if from > to {
                return Err(TemporalError::InvalidPeriod { from, to });
            }
        }
        Ok(Self { from, to })
    }

    /// The unbounded period covering all entries
    pub fn all_time() -> Self {
        Self::default()
    }

    /// A single-month period
    pub fn month(year: i32, month: u32) -> Result<Self, TemporalError> {
        let from = NaiveDate::from_ymd_opt(year, month, 1);
        let to = match month {
            12 => NaiveDate::from_ymd_opt(year + 1, 1, 1),
            _ => NaiveDate::from_ymd_opt(year, month + 1, 1),
        }
        .and_then(|d| d.pred_opt());

        match (from, to) {
            (Some(from), Some(to)) => Self::new(Some(from), Some(to)),
            _ => Err(TemporalError::InvalidPeriod {
                from: NaiveDate::MIN,
                to: NaiveDate::MIN,
            }),
        }
    }

    /// Returns true when the date falls inside the window (bounds inclusive)
    pub fn contains(&self, date: NaiveDate) -> bool {
        if let Some(from) = self.from {
            if date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if date > to {
                return false;
            }
        }
        true
    }
}
