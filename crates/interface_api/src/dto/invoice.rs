//! Invoice DTOs

use chrono::NaiveDate;
use serde::Deserialize;

use core_kernel::InboundId;
use domain_receivable::InvoiceStatus;

#[derive(Debug, Deserialize)]
pub struct CreateInvoiceRequest {
    pub customer: String,
    pub issue_date: NaiveDate,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    pub shipment_ids: Vec<InboundId>,
}

#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    pub status: InvoiceStatus,
}

#[derive(Debug, Deserialize)]
pub struct MembershipRequest {
    pub shipment_id: InboundId,
}
