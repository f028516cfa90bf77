//! Shipment DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::Money;
use domain_events::{
    InboundShipment, InboundSummary, OutboundShipment, OutboundSummary, PaymentStatus, VendorLeg,
};

#[derive(Debug, Deserialize)]
pub struct InboundRequest {
    pub resi: String,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub stt_date: Option<NaiveDate>,
    #[serde(default)]
    pub received_date: Option<NaiveDate>,
    #[serde(default)]
    pub dooring_date: Option<NaiveDate>,
    #[serde(default)]
    pub returned_date: Option<NaiveDate>,
    #[serde(default)]
    pub koli: u32,
    #[serde(default)]
    pub weight_kg: Decimal,
    #[serde(default)]
    pub rate: Option<String>,
    pub total_cost: Money,
    #[serde(default)]
    pub note: Option<String>,
}

impl InboundRequest {
    /// Writes the request fields onto a shipment, leaving id, invoice
    /// link, and creation timestamp alone
    pub fn apply(self, shipment: &mut InboundShipment) {
        shipment.resi = self.resi;
        shipment.vendor = self.vendor;
        shipment.destination = self.destination;
        shipment.stt_date = self.stt_date;
        shipment.received_date = self.received_date;
        shipment.dooring_date = self.dooring_date;
        shipment.returned_date = self.returned_date;
        shipment.koli = self.koli;
        shipment.weight_kg = self.weight_kg;
        shipment.rate = self.rate;
        shipment.total_cost = self.total_cost;
        shipment.note = self.note;
    }
}

#[derive(Debug, Deserialize)]
pub struct ShipmentListQuery {
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct InboundListResponse {
    pub shipments: Vec<InboundShipment>,
    pub summary: InboundSummary,
}

#[derive(Debug, Default, Deserialize)]
pub struct VendorLegRequest {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub resi: Option<String>,
    #[serde(default)]
    pub cost: Money,
}

impl From<VendorLegRequest> for VendorLeg {
    fn from(request: VendorLegRequest) -> Self {
        VendorLeg {
            date: request.date,
            resi: request.resi,
            cost: request.cost,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OutboundRequest {
    pub resi: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub receiver: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub koli: u32,
    #[serde(default)]
    pub load: Option<String>,
    #[serde(default)]
    pub rate: Option<String>,
    pub total: Money,
    #[serde(default)]
    pub vendor1: Option<VendorLegRequest>,
    #[serde(default)]
    pub vendor2: Option<VendorLegRequest>,
    #[serde(default)]
    pub payment_status: Option<PaymentStatus>,
    #[serde(default)]
    pub paid_date: Option<NaiveDate>,
    #[serde(default)]
    pub payer_name: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl OutboundRequest {
    /// Writes the request fields onto a shipment; profit is re-derived
    /// by the register on save
    pub fn apply(self, shipment: &mut OutboundShipment) {
        shipment.resi = self.resi;
        shipment.date = self.date;
        shipment.sender = self.sender;
        shipment.receiver = self.receiver;
        shipment.phone = self.phone;
        shipment.koli = self.koli;
        shipment.load = self.load;
        shipment.rate = self.rate;
        shipment.total = self.total;
        shipment.vendor1 = self.vendor1.map(VendorLeg::from).unwrap_or_default();
        shipment.vendor2 = self.vendor2.map(VendorLeg::from).unwrap_or_default();
        shipment.payment_status = self.payment_status;
        shipment.paid_date = self.paid_date;
        shipment.payer_name = self.payer_name;
        shipment.note = self.note;
    }
}

#[derive(Debug, Serialize)]
pub struct OutboundListResponse {
    pub shipments: Vec<OutboundShipment>,
    pub summary: OutboundSummary,
}
