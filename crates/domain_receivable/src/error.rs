//! Receivable domain errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReceivableError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("invoice not found")]
    InvoiceNotFound,

    #[error("shipment not found")]
    ShipmentNotFound,

    #[error("shipment {resi} is already on an invoice")]
    AlreadyBilled { resi: String },

    #[error("shipment {resi} is not on this invoice")]
    NotAMember { resi: String },

    #[error("could not allocate a free invoice number")]
    NumberExhausted,
}

impl ReceivableError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
