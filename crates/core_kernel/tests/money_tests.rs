//! Integration tests for Money and Rate

use core_kernel::{Money, Rate};
use rust_decimal_macros::dec;

#[test]
fn test_income_statement_tax_worked_example() {
    // The fixed withholding policy: revenue 1,000,000 -> tax 20,000
    let revenue = Money::from_rupiah(1_000_000);
    let tax = Rate::new(dec!(0.02)).apply_floor(&revenue);
    assert_eq!(tax, Money::from_rupiah(20_000));

    let gross_after_tax = revenue - tax;
    assert_eq!(gross_after_tax, Money::from_rupiah(980_000));

    let expense = Money::from_rupiah(300_000);
    assert_eq!(gross_after_tax - expense, Money::from_rupiah(680_000));
}

#[test]
fn test_negative_balances_are_representable() {
    let balance = Money::from_rupiah(100_000) - Money::from_rupiah(250_000);
    assert!(balance.is_negative());
    assert_eq!(balance.abs(), Money::from_rupiah(150_000));
}

#[test]
fn test_serde_round_trip() {
    let m = Money::from_rupiah(750_000);
    let json = serde_json::to_string(&m).unwrap();
    let back: Money = serde_json::from_str(&json).unwrap();
    assert_eq!(m, back);
}
