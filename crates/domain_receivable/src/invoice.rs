//! Customer invoices over inbound shipments
//!
//! An invoice groups unbilled shipments for one customer. Its total is
//! derived, never entered: every membership change or member edit runs
//! through [`InvoiceBook::recompute_total`] so `total == Σ member costs`
//! holds at all times.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use core_kernel::{InboundId, InvoiceId, Money};
use domain_events::InboundRegister;

use crate::error::ReceivableError;
use crate::numbering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InvoiceStatus {
    Unpaid,
    Paid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    pub number: String,
    pub customer: String,
    pub issue_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    /// Derived: sum of member shipment costs
    pub total: Money,
    pub status: InvoiceStatus,
    pub members: Vec<InboundId>,
    pub created_at: DateTime<Utc>,
}

/// In-memory book of invoices, unique by number
#[derive(Debug, Default, Clone)]
pub struct InvoiceBook {
    invoices: HashMap<InvoiceId, Invoice>,
}

impl InvoiceBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an invoice over the given unbilled shipments
    ///
    /// Allocates the next free number for the issue month, attaches the
    /// invoice reference to each shipment, and derives the total.
    pub fn create_invoice(
        &mut self,
        register: &mut InboundRegister,
        customer: impl Into<String>,
        issue_date: NaiveDate,
        due_date: Option<NaiveDate>,
        shipment_ids: &[InboundId],
    ) -> Result<InvoiceId, ReceivableError> {
        let customer = customer.into();
        if customer.trim().is_empty() {
            return Err(ReceivableError::validation("customer is required"));
        }
        if shipment_ids.is_empty() {
            return Err(ReceivableError::validation(
                "an invoice needs at least one shipment",
            ));
        }
        for &shipment_id in shipment_ids {
            let shipment = register
                .get(shipment_id)
                .ok_or(ReceivableError::ShipmentNotFound)?;
            if shipment.is_billed() {
                return Err(ReceivableError::AlreadyBilled {
                    resi: shipment.resi.clone(),
                });
            }
        }

        let number = self.allocate_number(issue_date)?;
        let id = InvoiceId::new_v7();
        let mut total = Money::zero();
        for &shipment_id in shipment_ids {
            // Presence checked above
            if let Some(shipment) = register.get_mut(shipment_id) {
                shipment.invoice_id = Some(id);
                total += shipment.total_cost;
            }
        }

        tracing::info!(%id, number, %total, "invoice created");
        self.invoices.insert(
            id,
            Invoice {
                id,
                number,
                customer,
                issue_date,
                due_date,
                total,
                status: InvoiceStatus::Unpaid,
                members: shipment_ids.to_vec(),
                created_at: Utc::now(),
            },
        );
        Ok(id)
    }

    pub fn get(&self, id: InvoiceId) -> Option<&Invoice> {
        self.invoices.get(&id)
    }

    /// All invoices, most recent issue date first
    pub fn list(&self) -> Vec<&Invoice> {
        let mut all: Vec<_> = self.invoices.values().collect();
        all.sort_by(|a, b| b.issue_date.cmp(&a.issue_date).then(b.number.cmp(&a.number)));
        all
    }

    pub fn set_status(&mut self, id: InvoiceId, status: InvoiceStatus) -> Result<(), ReceivableError> {
        let invoice = self
            .invoices
            .get_mut(&id)
            .ok_or(ReceivableError::InvoiceNotFound)?;
        invoice.status = status;
        Ok(())
    }

    /// Attaches one more unbilled shipment and re-derives the total
    pub fn attach(
        &mut self,
        register: &mut InboundRegister,
        id: InvoiceId,
        shipment_id: InboundId,
    ) -> Result<(), ReceivableError> {
        if !self.invoices.contains_key(&id) {
            return Err(ReceivableError::InvoiceNotFound);
        }
        let shipment = register
            .get(shipment_id)
            .ok_or(ReceivableError::ShipmentNotFound)?;
        if shipment.is_billed() {
            return Err(ReceivableError::AlreadyBilled {
                resi: shipment.resi.clone(),
            });
        }
        if let Some(shipment) = register.get_mut(shipment_id) {
            shipment.invoice_id = Some(id);
        }
        if let Some(invoice) = self.invoices.get_mut(&id) {
            invoice.members.push(shipment_id);
        }
        self.recompute_total(register, id)
    }

    /// Detaches a member shipment and re-derives the total; the
    /// shipment itself survives
    pub fn detach(
        &mut self,
        register: &mut InboundRegister,
        id: InvoiceId,
        shipment_id: InboundId,
    ) -> Result<(), ReceivableError> {
        let invoice = self
            .invoices
            .get_mut(&id)
            .ok_or(ReceivableError::InvoiceNotFound)?;
        let Some(position) = invoice.members.iter().position(|&m| m == shipment_id) else {
            let resi = register
                .get(shipment_id)
                .map(|s| s.resi.clone())
                .unwrap_or_else(|| shipment_id.to_string());
            return Err(ReceivableError::NotAMember { resi });
        };
        invoice.members.remove(position);
        if let Some(shipment) = register.get_mut(shipment_id) {
            shipment.invoice_id = None;
        }
        self.recompute_total(register, id)
    }

    /// Re-sums the invoice total from its current members
    ///
    /// Members deleted from the register since the last recompute are
    /// dropped from the membership here.
    pub fn recompute_total(
        &mut self,
        register: &InboundRegister,
        id: InvoiceId,
    ) -> Result<(), ReceivableError> {
        let invoice = self
            .invoices
            .get_mut(&id)
            .ok_or(ReceivableError::InvoiceNotFound)?;
        invoice.members.retain(|&m| register.get(m).is_some());
        invoice.total = invoice
            .members
            .iter()
            .filter_map(|&m| register.get(m))
            .map(|s| s.total_cost)
            .sum();
        Ok(())
    }

    /// Called after a shipment is removed from the register, so the
    /// invoice that carried it shrinks accordingly
    pub fn on_shipment_removed(
        &mut self,
        register: &InboundRegister,
        invoice_id: Option<InvoiceId>,
    ) -> Result<(), ReceivableError> {
        match invoice_id {
            Some(id) => self.recompute_total(register, id),
            None => Ok(()),
        }
    }

    /// Deletes the invoice, detaching members without deleting them
    pub fn delete_invoice(
        &mut self,
        register: &mut InboundRegister,
        id: InvoiceId,
    ) -> Result<Invoice, ReceivableError> {
        let invoice = self
            .invoices
            .remove(&id)
            .ok_or(ReceivableError::InvoiceNotFound)?;
        for &member in &invoice.members {
            if let Some(shipment) = register.get_mut(member) {
                shipment.invoice_id = None;
            }
        }
        Ok(invoice)
    }

    /// Next free `{seq:02}/INV/BMM/{roman}/{year}` for the issue month.
    /// Starts past the month's existing count and walks forward on
    /// collision.
    fn allocate_number(&self, issue_date: NaiveDate) -> Result<String, ReceivableError> {
        use chrono::Datelike;
        let month = issue_date.month();
        let year = issue_date.year();

        let existing = self
            .invoices
            .values()
            .filter(|i| i.issue_date.month() == month && i.issue_date.year() == year)
            .count() as u32;

        let mut seq = existing + 1;
        loop {
            let candidate = numbering::invoice_number(seq, month, year)
                .ok_or_else(|| ReceivableError::validation("issue date out of range"))?;
            if !self.invoices.values().any(|i| i.number == candidate) {
                return Ok(candidate);
            }
            seq = seq.checked_add(1).ok_or(ReceivableError::NumberExhausted)?;
        }
    }
}
