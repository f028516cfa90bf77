//! Custom Test Assertions
//!
//! Assertion helpers for monetary values and statements that give
//! more meaningful failure messages than bare `assert_eq!`.

use core_kernel::Money;
use domain_ledger::TrialBalance;

/// Asserts that a Money value equals an expected whole-rupiah amount
pub fn assert_rupiah(actual: Money, expected: i64) {
    assert_eq!(
        actual,
        Money::from_rupiah(expected),
        "Expected Rp {expected}, got {actual}"
    );
}

/// Asserts that a Money value is zero
pub fn assert_money_zero(money: Money) {
    assert!(money.is_zero(), "Expected zero, got {money}");
}

/// Asserts that a Money value is strictly positive
pub fn assert_money_positive(money: Money) {
    assert!(money.is_positive(), "Expected positive amount, got {money}");
}

/// Asserts that a trial balance has matching columns and no difference
pub fn assert_trial_balance_balanced(trial: &TrialBalance) {
    assert_eq!(
        trial.total_debit, trial.total_credit,
        "Trial balance columns differ: debit {}, credit {}",
        trial.total_debit, trial.total_credit
    );
    assert!(
        trial.difference.is_zero(),
        "Trial balance difference is {}, expected zero",
        trial.difference
    );
}

/// Asserts that a trial balance carries a row for the given account code
pub fn assert_trial_balance_has_account(trial: &TrialBalance, code: &str) {
    assert!(
        trial.rows.iter().any(|row| row.account_code == code),
        "Trial balance has no row for account {code}; rows: {:?}",
        trial
            .rows
            .iter()
            .map(|row| row.account_code.as_str())
            .collect::<Vec<_>>()
    );
}
