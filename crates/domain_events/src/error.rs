//! Source-event domain errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("resi number already registered: {0}")]
    DuplicateResi(String),

    #[error("manifest already registered for resi {resi} on route {category}")]
    DuplicateManifest { resi: String, category: String },

    #[error("payroll already recorded for employee {employee} in {year}-{month:02}")]
    DuplicatePayrollPeriod {
        employee: String,
        year: i32,
        month: u32,
    },

    #[error("{0} not found")]
    NotFound(String),
}

impl EventError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }
}
