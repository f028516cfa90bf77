//! Request/response data transfer objects

pub mod account;
pub mod cashbook;
pub mod invoice;
pub mod journal;
pub mod manifest;
pub mod payroll;
pub mod report;
pub mod shipment;
