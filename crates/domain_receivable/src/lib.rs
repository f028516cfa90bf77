//! Receivable Aggregation - Customer Invoices
//!
//! Groups unbilled inbound shipments into numbered customer invoices
//! and keeps each invoice total equal to the sum of its members' costs
//! across every membership change.

pub mod error;
pub mod invoice;
pub mod numbering;

pub use error::ReceivableError;
pub use invoice::{Invoice, InvoiceBook, InvoiceStatus};
pub use numbering::{invoice_number, roman_month, INVOICE_PREFIX};
