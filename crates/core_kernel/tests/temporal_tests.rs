//! Integration tests for reporting periods

use chrono::NaiveDate;
use core_kernel::ReportingPeriod;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn test_period_window_for_balance_queries() {
    let august = ReportingPeriod::month(2026, 8).unwrap();
    assert!(august.contains(d(2026, 8, 1)));
    assert!(august.contains(d(2026, 8, 31)));
    assert!(!august.contains(d(2026, 9, 1)));
}

#[test]
fn test_unbounded_period_is_default() {
    assert_eq!(ReportingPeriod::default(), ReportingPeriod::all_time());
}

#[test]
fn test_reversed_bounds_are_rejected() {
    assert!(ReportingPeriod::new(Some(d(2026, 6, 1)), Some(d(2026, 5, 1))).is_err());
}
