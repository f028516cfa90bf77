//! Core Kernel - Foundational types for the cargo back office
//!
//! This crate provides the fundamental building blocks used across all
//! domain modules:
//! - Money with precise whole-rupiah arithmetic
//! - Reporting-period date windows
//! - Strongly-typed identifiers

pub mod error;
pub mod identifiers;
pub mod money;
pub mod temporal;

pub use error::CoreError;
pub use identifiers::{
    AccountId, CashAdvanceId, CashbookId, EmployeeId, EntryId, InboundId, InvoiceId, ManifestId,
    OutboundId, PayrollId,
};
pub use money::{Money, MoneyError, Rate};
pub use temporal::{ReportingPeriod, TemporalError};
