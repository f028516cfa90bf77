//! Request handlers

pub mod accounts;
pub mod cashbook;
pub mod health;
pub mod invoices;
pub mod journal;
pub mod manifests;
pub mod payroll;
pub mod reports;
pub mod shipments;
