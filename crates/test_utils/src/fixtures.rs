//! Pre-built Test Fixtures
//!
//! Ready-to-use test data for the back-office suites. Fixtures are
//! deterministic where the domain allows it so assertions can name
//! exact amounts and dates.

use chrono::NaiveDate;

use core_kernel::{EmployeeId, Money};
use domain_events::{CashAdvance, InboundShipment, Manifest, PayrollRun, RouteCategory};
use domain_ledger::{CargoChartOfAccounts, Ledger};

/// Fixture for monetary amounts
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Whole-rupiah shorthand
    pub fn rp(rupiah: i64) -> Money {
        Money::from_rupiah(rupiah)
    }

    /// A typical inbound freight charge
    pub fn freight_charge() -> Money {
        Money::from_rupiah(450_000)
    }

    /// A typical manifest total
    pub fn manifest_total() -> Money {
        Money::from_rupiah(750_000)
    }

    /// A typical monthly base pay
    pub fn base_pay() -> Money {
        Money::from_rupiah(3_000_000)
    }
}

/// Fixture for calendar dates
pub struct TemporalFixtures;

impl TemporalFixtures {
    pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap_or_else(|| panic!("invalid fixture date {year}-{month}-{day}"))
    }

    /// Start of the standard reporting month (Aug 1, 2026)
    pub fn month_start() -> NaiveDate {
        Self::date(2026, 8, 1)
    }

    /// End of the standard reporting month (Aug 31, 2026)
    pub fn month_end() -> NaiveDate {
        Self::date(2026, 8, 31)
    }
}

/// Fixture for ledgers
pub struct LedgerFixtures;

impl LedgerFixtures {
    /// Ledger seeded with the office's standard chart
    pub fn standard_ledger() -> Ledger {
        Ledger::with_chart(CargoChartOfAccounts::standard_accounts())
            .unwrap_or_else(|e| panic!("standard chart must seed cleanly: {e}"))
    }
}

/// Fixture for source events
pub struct EventFixtures;

impl EventFixtures {
    /// Inbound shipment with a resi, an stt date, and a cost
    pub fn inbound(resi: &str, cost: i64) -> InboundShipment {
        let mut shipment = InboundShipment::new(resi, MoneyFixtures::rp(cost));
        shipment.stt_date = Some(TemporalFixtures::month_start());
        shipment
    }

    /// Manifest with a total and an advance already paid out
    pub fn manifest(category: RouteCategory, resi: &str, total: i64, advance: i64) -> Manifest {
        let mut manifest = Manifest::new(category, resi, MoneyFixtures::rp(total));
        manifest.ship_date = Some(TemporalFixtures::month_start());
        manifest.advance = MoneyFixtures::rp(advance);
        manifest
    }

    /// Cash advance handed to an employee mid-month
    pub fn cash_advance(name: &str, amount: i64) -> CashAdvance {
        CashAdvance::new(
            EmployeeId::new_v7(),
            name,
            TemporalFixtures::date(2026, 8, 15),
            MoneyFixtures::rp(amount),
        )
    }

    /// Payroll run for August 2026 with a base pay and advance deduction
    pub fn payroll_run(name: &str, base_pay: i64, advance_deduction: i64) -> PayrollRun {
        let mut run = PayrollRun::new(
            EmployeeId::new_v7(),
            name,
            2026,
            8,
            MoneyFixtures::rp(base_pay),
        );
        run.advance_deduction = MoneyFixtures::rp(advance_deduction);
        run.recompute_net();
        run
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_ledger_has_full_chart() {
        let ledger = LedgerFixtures::standard_ledger();
        assert!(ledger.account_by_code("111").is_some());
        assert!(ledger.account_by_code("514").is_some());
    }

    #[test]
    fn test_payroll_fixture_net_is_recomputed() {
        let run = EventFixtures::payroll_run("Budi", 3_000_000, 500_000);
        assert_eq!(run.net_pay, MoneyFixtures::rp(2_500_000));
    }
}
