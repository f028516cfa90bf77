//! Inbound and outbound shipment records
//!
//! Inbound shipments are work performed for customers (receivable side);
//! outbound shipments are consignments handed to sub-vendors, carrying
//! up to two vendor legs and a derived profit figure.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use core_kernel::{InboundId, InvoiceId, Money, OutboundId};

use crate::error::EventError;

/// A delivered customer shipment, identified by its resi number
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundShipment {
    pub id: InboundId,
    pub resi: String,
    pub vendor: Option<String>,
    pub destination: Option<String>,
    pub stt_date: Option<NaiveDate>,
    pub received_date: Option<NaiveDate>,
    pub dooring_date: Option<NaiveDate>,
    pub returned_date: Option<NaiveDate>,
    pub koli: u32,
    pub weight_kg: Decimal,
    pub rate: Option<String>,
    pub total_cost: Money,
    pub note: Option<String>,
    /// Set when the shipment is rolled into a customer invoice
    pub invoice_id: Option<InvoiceId>,
    pub created_at: DateTime<Utc>,
}

impl InboundShipment {
    pub fn new(resi: impl Into<String>, total_cost: Money) -> Self {
        Self {
            id: InboundId::new_v7(),
            resi: resi.into(),
            vendor: None,
            destination: None,
            stt_date: None,
            received_date: None,
            dooring_date: None,
            returned_date: None,
            koli: 0,
            weight_kg: Decimal::ZERO,
            rate: None,
            total_cost,
            note: None,
            invoice_id: None,
            created_at: Utc::now(),
        }
    }

    pub fn is_billed(&self) -> bool {
        self.invoice_id.is_some()
    }
}

/// Totals over a (possibly filtered) inbound listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundSummary {
    pub count: usize,
    pub total_weight_kg: Decimal,
    pub total_cost: Money,
}

/// In-memory register of inbound shipments, unique by resi
#[derive(Debug, Default, Clone)]
pub struct InboundRegister {
    shipments: HashMap<InboundId, InboundShipment>,
}

impl InboundRegister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, shipment: InboundShipment) -> Result<InboundId, EventError> {
        if shipment.resi.trim().is_empty() {
            return Err(EventError::validation("resi number is required"));
        }
        if self.resi_taken(&shipment.resi, Some(shipment.id)) {
            return Err(EventError::DuplicateResi(shipment.resi));
        }
        let id = shipment.id;
        self.shipments.insert(id, shipment);
        Ok(id)
    }

    pub fn update(&mut self, shipment: InboundShipment) -> Result<(), EventError> {
        if !self.shipments.contains_key(&shipment.id) {
            return Err(EventError::not_found("inbound shipment"));
        }
        if self.resi_taken(&shipment.resi, Some(shipment.id)) {
            return Err(EventError::DuplicateResi(shipment.resi));
        }
        self.shipments.insert(shipment.id, shipment);
        Ok(())
    }

    pub fn remove(&mut self, id: InboundId) -> Result<InboundShipment, EventError> {
        self.shipments
            .remove(&id)
            .ok_or_else(|| EventError::not_found("inbound shipment"))
    }

    pub fn get(&self, id: InboundId) -> Option<&InboundShipment> {
        self.shipments.get(&id)
    }

    pub fn get_mut(&mut self, id: InboundId) -> Option<&mut InboundShipment> {
        self.shipments.get_mut(&id)
    }

    /// All shipments, most recent stt date first
    pub fn list(&self) -> Vec<&InboundShipment> {
        let mut all: Vec<_> = self.shipments.values().collect();
        all.sort_by(|a, b| b.stt_date.cmp(&a.stt_date).then(a.resi.cmp(&b.resi)));
        all
    }

    /// Case-insensitive substring search over resi, vendor, and destination
    pub fn search(&self, query: &str) -> Vec<&InboundShipment> {
        let needle = query.to_lowercase();
        self.list()
            .into_iter()
            .filter(|s| {
                s.resi.to_lowercase().contains(&needle)
                    || s.vendor
                        .as_deref()
                        .is_some_and(|v| v.to_lowercase().contains(&needle))
                    || s.destination
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Shipments not yet attached to an invoice
    pub fn unbilled(&self) -> Vec<&InboundShipment> {
        self.list().into_iter().filter(|s| !s.is_billed()).collect()
    }

    pub fn summarize<'a>(shipments: impl IntoIterator<Item = &'a InboundShipment>) -> InboundSummary {
        let mut summary = InboundSummary {
            count: 0,
            total_weight_kg: Decimal::ZERO,
            total_cost: Money::zero(),
        };
        for shipment in shipments {
            summary.count += 1;
            summary.total_weight_kg += shipment.weight_kg;
            summary.total_cost += shipment.total_cost;
        }
        summary
    }

    fn resi_taken(&self, resi: &str, except: Option<InboundId>) -> bool {
        self.shipments
            .values()
            .any(|s| s.resi == resi && Some(s.id) != except)
    }
}

/// How an outbound consignment is (to be) paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentStatus {
    Cod,
    Cash,
    Transfer,
}

/// One sub-vendor leg of an outbound shipment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VendorLeg {
    pub date: Option<NaiveDate>,
    pub resi: Option<String>,
    pub cost: Money,
}

/// An outbound consignment, unique by its own resi number
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboundShipment {
    pub id: OutboundId,
    pub resi: String,
    pub date: Option<NaiveDate>,
    pub sender: Option<String>,
    pub receiver: Option<String>,
    pub phone: Option<String>,
    pub koli: u32,
    /// Free-text load description; may be a weight or a label like "MOTOR"
    pub load: Option<String>,
    pub rate: Option<String>,
    pub total: Money,
    pub vendor1: VendorLeg,
    pub vendor2: VendorLeg,
    pub payment_status: Option<PaymentStatus>,
    pub paid_date: Option<NaiveDate>,
    pub payer_name: Option<String>,
    /// `total − vendor1.cost − vendor2.cost`; kept current by the register
    pub profit: Money,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl OutboundShipment {
    pub fn new(resi: impl Into<String>, total: Money) -> Self {
        let mut shipment = Self {
            id: OutboundId::new_v7(),
            resi: resi.into(),
            date: None,
            sender: None,
            receiver: None,
            phone: None,
            koli: 0,
            load: None,
            rate: None,
            total,
            vendor1: VendorLeg::default(),
            vendor2: VendorLeg::default(),
            payment_status: None,
            paid_date: None,
            payer_name: None,
            profit: Money::zero(),
            note: None,
            created_at: Utc::now(),
        };
        shipment.recompute_profit();
        shipment
    }

    pub fn recompute_profit(&mut self) {
        self.profit = self.total - self.vendor1.cost - self.vendor2.cost;
    }
}

/// Totals over a (possibly filtered) outbound listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboundSummary {
    pub count: usize,
    pub total_revenue: Money,
    pub total_vendor_cost: Money,
    pub total_profit: Money,
}

/// In-memory register of outbound shipments, unique by resi
#[derive(Debug, Default, Clone)]
pub struct OutboundRegister {
    shipments: HashMap<OutboundId, OutboundShipment>,
}

impl OutboundRegister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, mut shipment: OutboundShipment) -> Result<OutboundId, EventError> {
        if shipment.resi.trim().is_empty() {
            return Err(EventError::validation("resi number is required"));
        }
        if self.resi_taken(&shipment.resi, Some(shipment.id)) {
            return Err(EventError::DuplicateResi(shipment.resi));
        }
        shipment.recompute_profit();
        let id = shipment.id;
        self.shipments.insert(id, shipment);
        Ok(id)
    }

    pub fn update(&mut self, mut shipment: OutboundShipment) -> Result<(), EventError> {
        if !self.shipments.contains_key(&shipment.id) {
            return Err(EventError::not_found("outbound shipment"));
        }
        if self.resi_taken(&shipment.resi, Some(shipment.id)) {
            return Err(EventError::DuplicateResi(shipment.resi));
        }
        shipment.recompute_profit();
        self.shipments.insert(shipment.id, shipment);
        Ok(())
    }

    pub fn remove(&mut self, id: OutboundId) -> Result<OutboundShipment, EventError> {
        self.shipments
            .remove(&id)
            .ok_or_else(|| EventError::not_found("outbound shipment"))
    }

    pub fn get(&self, id: OutboundId) -> Option<&OutboundShipment> {
        self.shipments.get(&id)
    }

    pub fn list(&self) -> Vec<&OutboundShipment> {
        let mut all: Vec<_> = self.shipments.values().collect();
        all.sort_by(|a, b| b.date.cmp(&a.date).then(a.resi.cmp(&b.resi)));
        all
    }

    /// Case-insensitive substring search over resi, sender, and receiver
    pub fn search(&self, query: &str) -> Vec<&OutboundShipment> {
        let needle = query.to_lowercase();
        self.list()
            .into_iter()
            .filter(|s| {
                s.resi.to_lowercase().contains(&needle)
                    || s.sender
                        .as_deref()
                        .is_some_and(|v| v.to_lowercase().contains(&needle))
                    || s.receiver
                        .as_deref()
                        .is_some_and(|r| r.to_lowercase().contains(&needle))
            })
            .collect()
    }

    pub fn summarize<'a>(
        shipments: impl IntoIterator<Item = &'a OutboundShipment>,
    ) -> OutboundSummary {
        let mut summary = OutboundSummary {
            count: 0,
            total_revenue: Money::zero(),
            total_vendor_cost: Money::zero(),
            total_profit: Money::zero(),
        };
        for shipment in shipments {
            summary.count += 1;
            summary.total_revenue += shipment.total;
            summary.total_vendor_cost += shipment.vendor1.cost + shipment.vendor2.cost;
            summary.total_profit += shipment.profit;
        }
        summary
    }

    fn resi_taken(&self, resi: &str, except: Option<OutboundId>) -> bool {
        self.shipments
            .values()
            .any(|s| s.resi == resi && Some(s.id) != except)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn rp(amount: i64) -> Money {
        Money::from_rupiah(amount)
    }

    #[test]
    fn test_inbound_resi_must_be_unique() {
        let mut register = InboundRegister::new();
        register.insert(InboundShipment::new("BMM-001", rp(100_000))).unwrap();

        let err = register
            .insert(InboundShipment::new("BMM-001", rp(50_000)))
            .unwrap_err();
        assert!(matches!(err, EventError::DuplicateResi(_)));
    }

    #[test]
    fn test_inbound_update_keeps_own_resi() {
        let mut register = InboundRegister::new();
        let id = register.insert(InboundShipment::new("BMM-001", rp(100_000))).unwrap();

        let mut edited = register.get(id).unwrap().clone();
        edited.total_cost = rp(150_000);
        register.update(edited).unwrap();
        assert_eq!(register.get(id).unwrap().total_cost, rp(150_000));
    }

    #[test]
    fn test_inbound_blank_resi_rejected() {
        let mut register = InboundRegister::new();
        let err = register.insert(InboundShipment::new("  ", rp(100_000))).unwrap_err();
        assert!(matches!(err, EventError::Validation(_)));
    }

    #[test]
    fn test_inbound_search_matches_vendor_and_destination() {
        let mut register = InboundRegister::new();
        let mut a = InboundShipment::new("A-1", rp(10_000));
        a.vendor = Some("Jalur Nugraha".into());
        let mut b = InboundShipment::new("B-2", rp(20_000));
        b.destination = Some("Pontianak".into());
        register.insert(a).unwrap();
        register.insert(b).unwrap();

        assert_eq!(register.search("nugraha").len(), 1);
        assert_eq!(register.search("PONTI").len(), 1);
        assert_eq!(register.search("-").len(), 2);
    }

    #[test]
    fn test_inbound_summary_totals() {
        let mut register = InboundRegister::new();
        let mut a = InboundShipment::new("A-1", rp(100_000));
        a.weight_kg = dec!(12.50);
        let mut b = InboundShipment::new("B-2", rp(250_000));
        b.weight_kg = dec!(3.25);
        register.insert(a).unwrap();
        register.insert(b).unwrap();

        let summary = InboundRegister::summarize(register.list());
        assert_eq!(summary.count, 2);
        assert_eq!(summary.total_weight_kg, dec!(15.75));
        assert_eq!(summary.total_cost, rp(350_000));
    }

    #[test]
    fn test_unbilled_excludes_invoiced_shipments() {
        let mut register = InboundRegister::new();
        let billed_id = register.insert(InboundShipment::new("A-1", rp(10_000))).unwrap();
        register.insert(InboundShipment::new("B-2", rp(20_000))).unwrap();

        register.get_mut(billed_id).unwrap().invoice_id = Some(core_kernel::InvoiceId::new_v7());
        let unbilled = register.unbilled();
        assert_eq!(unbilled.len(), 1);
        assert_eq!(unbilled[0].resi, "B-2");
    }

    #[test]
    fn test_outbound_profit_recomputed_on_insert_and_update() {
        let mut register = OutboundRegister::new();
        let mut shipment = OutboundShipment::new("OUT-1", rp(1_000_000));
        shipment.vendor1.cost = rp(300_000);
        shipment.vendor2.cost = rp(150_000);
        // Stale profit must be overwritten
        shipment.profit = rp(999);
        let id = register.insert(shipment).unwrap();
        assert_eq!(register.get(id).unwrap().profit, rp(550_000));

        let mut edited = register.get(id).unwrap().clone();
        edited.vendor2.cost = rp(0);
        register.update(edited).unwrap();
        assert_eq!(register.get(id).unwrap().profit, rp(700_000));
    }

    #[test]
    fn test_outbound_summary_totals() {
        let mut register = OutboundRegister::new();
        let mut a = OutboundShipment::new("OUT-1", rp(500_000));
        a.vendor1.cost = rp(200_000);
        register.insert(a).unwrap();
        let b = OutboundShipment::new("OUT-2", rp(300_000));
        register.insert(b).unwrap();

        let summary = OutboundRegister::summarize(register.list());
        assert_eq!(summary.total_revenue, rp(800_000));
        assert_eq!(summary.total_vendor_cost, rp(200_000));
        assert_eq!(summary.total_profit, rp(600_000));
    }

    #[test]
    fn test_payment_status_serializes_uppercase() {
        let json = serde_json::to_string(&PaymentStatus::Transfer).unwrap();
        assert_eq!(json, "\"TRANSFER\"");
    }
}
