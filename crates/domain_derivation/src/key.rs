//! Stable derivation keys
//!
//! Every derived journal entry carries a key built from fields of its
//! source event that never change across edits. Re-deriving matches on
//! the key, so an edit updates the existing entry instead of creating a
//! second one, and a delete can find everything it must retract.

use core_kernel::{CashAdvanceId, EmployeeId};
use domain_events::RouteCategory;

pub fn inbound(resi: &str) -> String {
    format!("inbound/{resi}")
}

pub fn manifest_payable(category: RouteCategory, resi: &str) -> String {
    format!("manifest/{category}/{resi}/payable")
}

pub fn manifest_advance(category: RouteCategory, resi: &str) -> String {
    format!("manifest/{category}/{resi}/advance")
}

/// Keyed by event id: the same employee may take several advances on
/// one day, so no natural key exists.
pub fn cash_advance(id: CashAdvanceId) -> String {
    format!("cash-advance/{id}")
}

/// Common prefix of every entry a payroll run emits; retraction works
/// on this prefix.
pub fn payroll_prefix(employee_id: EmployeeId, year: i32, month: u32) -> String {
    format!("payroll/{employee_id}/{year}-{month:02}")
}

pub fn payroll_advance(employee_id: EmployeeId, year: i32, month: u32) -> String {
    format!("{}/advance", payroll_prefix(employee_id, year, month))
}

pub fn payroll_net(employee_id: EmployeeId, year: i32, month: u32) -> String {
    format!("{}/net", payroll_prefix(employee_id, year, month))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_stable_and_distinct() {
        let employee = EmployeeId::new_v7();
        let prefix = payroll_prefix(employee, 2026, 3);
        let advance = payroll_advance(employee, 2026, 3);
        let net = payroll_net(employee, 2026, 3);

        assert!(advance.starts_with(&prefix));
        assert!(net.starts_with(&prefix));
        assert_ne!(advance, net);
        assert!(prefix.ends_with("2026-03"));
    }

    #[test]
    fn test_manifest_keys_embed_route() {
        assert_eq!(
            manifest_payable(RouteCategory::Hulu, "MAN-7"),
            "manifest/HULU/MAN-7/payable"
        );
        assert_eq!(
            manifest_advance(RouteCategory::Truk, "MAN-7"),
            "manifest/TRUK/MAN-7/advance"
        );
    }

    #[test]
    fn test_inbound_key() {
        assert_eq!(inbound("BMM-123"), "inbound/BMM-123");
    }
}
