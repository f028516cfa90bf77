//! Source Events - Business Records That Feed the Ledger
//!
//! The registers in this crate hold the operational records of the
//! cargo office: inbound/outbound shipments, vendor manifests, employee
//! cash advances, payroll runs, and the daily cash book. Saving or
//! deleting one of these records is the trigger for journal derivation;
//! the registers themselves know nothing about accounts or entries.

pub mod cashbook;
pub mod error;
pub mod manifest;
pub mod payroll;
pub mod shipment;

pub use cashbook::{CashbookEntry, CashbookLine, CashbookRegister, CashbookSummary};
pub use error::EventError;
pub use manifest::{Manifest, ManifestRegister, ManifestSummary, RouteCategory};
pub use payroll::{CashAdvance, CashAdvanceRegister, PayrollRegister, PayrollRun};
pub use shipment::{
    InboundRegister, InboundShipment, InboundSummary, OutboundRegister, OutboundShipment,
    OutboundSummary, PaymentStatus, VendorLeg,
};
