//! Test Data Builders
//!
//! Builder helpers for constructing source events with sensible
//! defaults. Tests set only the fields they assert on.

use chrono::NaiveDate;

use core_kernel::{EmployeeId, Money};
use domain_events::{InboundShipment, Manifest, PayrollRun, RouteCategory};

use crate::fixtures::{MoneyFixtures, TemporalFixtures};

/// Builder for inbound shipments
pub struct InboundBuilder {
    resi: String,
    vendor: Option<String>,
    destination: Option<String>,
    stt_date: Option<NaiveDate>,
    koli: u32,
    total_cost: Money,
}

impl InboundBuilder {
    pub fn new(resi: impl Into<String>) -> Self {
        Self {
            resi: resi.into(),
            vendor: None,
            destination: None,
            stt_date: Some(TemporalFixtures::month_start()),
            koli: 1,
            total_cost: MoneyFixtures::freight_charge(),
        }
    }

    pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor = Some(vendor.into());
        self
    }

    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    pub fn with_stt_date(mut self, date: NaiveDate) -> Self {
        self.stt_date = Some(date);
        self
    }

    pub fn with_koli(mut self, koli: u32) -> Self {
        self.koli = koli;
        self
    }

    pub fn with_cost(mut self, rupiah: i64) -> Self {
        self.total_cost = Money::from_rupiah(rupiah);
        self
    }

    pub fn build(self) -> InboundShipment {
        let mut shipment = InboundShipment::new(self.resi, self.total_cost);
        shipment.vendor = self.vendor;
        shipment.destination = self.destination;
        shipment.stt_date = self.stt_date;
        shipment.koli = self.koli;
        shipment
    }
}

/// Builder for route manifests
pub struct ManifestBuilder {
    category: RouteCategory,
    resi: String,
    ship_date: Option<NaiveDate>,
    total: Money,
    advance: Money,
    paid: bool,
}

impl ManifestBuilder {
    pub fn new(category: RouteCategory, resi: impl Into<String>) -> Self {
        Self {
            category,
            resi: resi.into(),
            ship_date: Some(TemporalFixtures::month_start()),
            total: MoneyFixtures::manifest_total(),
            advance: Money::zero(),
            paid: false,
        }
    }

    pub fn with_ship_date(mut self, date: NaiveDate) -> Self {
        self.ship_date = Some(date);
        self
    }

    pub fn with_total(mut self, rupiah: i64) -> Self {
        self.total = Money::from_rupiah(rupiah);
        self
    }

    pub fn with_advance(mut self, rupiah: i64) -> Self {
        self.advance = Money::from_rupiah(rupiah);
        self
    }

    pub fn paid(mut self) -> Self {
        self.paid = true;
        self
    }

    pub fn build(self) -> Manifest {
        let mut manifest = Manifest::new(self.category, self.resi, self.total);
        manifest.ship_date = self.ship_date;
        manifest.advance = self.advance;
        manifest.paid = self.paid;
        manifest
    }
}

/// Builder for payroll runs
pub struct PayrollRunBuilder {
    employee_id: EmployeeId,
    employee_name: String,
    year: i32,
    month: u32,
    base_pay: Money,
    overtime: Money,
    bonus: Money,
    advance_deduction: Money,
    absence_deduction: Money,
}

impl PayrollRunBuilder {
    pub fn new(employee_name: impl Into<String>) -> Self {
        Self {
            employee_id: EmployeeId::new_v7(),
            employee_name: employee_name.into(),
            year: 2026,
            month: 8,
            base_pay: MoneyFixtures::base_pay(),
            overtime: Money::zero(),
            bonus: Money::zero(),
            advance_deduction: Money::zero(),
            absence_deduction: Money::zero(),
        }
    }

    pub fn with_employee_id(mut self, id: EmployeeId) -> Self {
        self.employee_id = id;
        self
    }

    pub fn with_period(mut self, year: i32, month: u32) -> Self {
        self.year = year;
        self.month = month;
        self
    }

    pub fn with_base_pay(mut self, rupiah: i64) -> Self {
        self.base_pay = Money::from_rupiah(rupiah);
        self
    }

    pub fn with_overtime(mut self, rupiah: i64) -> Self {
        self.overtime = Money::from_rupiah(rupiah);
        self
    }

    pub fn with_bonus(mut self, rupiah: i64) -> Self {
        self.bonus = Money::from_rupiah(rupiah);
        self
    }

    pub fn with_advance_deduction(mut self, rupiah: i64) -> Self {
        self.advance_deduction = Money::from_rupiah(rupiah);
        self
    }

    pub fn with_absence_deduction(mut self, rupiah: i64) -> Self {
        self.absence_deduction = Money::from_rupiah(rupiah);
        self
    }

    pub fn build(self) -> PayrollRun {
        let mut run = PayrollRun::new(
            self.employee_id,
            self.employee_name,
            self.year,
            self.month,
            self.base_pay,
        );
        run.overtime = self.overtime;
        run.bonus = self.bonus;
        run.advance_deduction = self.advance_deduction;
        run.absence_deduction = self.absence_deduction;
        run.recompute_net();
        run
    }
}
