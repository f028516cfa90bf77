//! Property-Based Test Generators
//!
//! Proptest strategies for generating test data that maintains the
//! domain invariants (positive posted amounts, valid calendar dates,
//! known route categories).

use chrono::NaiveDate;
use proptest::prelude::*;

use core_kernel::Money;
use domain_events::RouteCategory;
use domain_ledger::AccountCategory;

/// Strategy for whole-rupiah amounts that may be posted to the ledger
pub fn positive_rupiah_strategy() -> impl Strategy<Value = i64> {
    1i64..1_000_000_000i64
}

/// Strategy for whole-rupiah amounts including zero and negatives
pub fn rupiah_strategy() -> impl Strategy<Value = i64> {
    -1_000_000_000i64..1_000_000_000i64
}

/// Strategy for strictly positive Money values
pub fn positive_money_strategy() -> impl Strategy<Value = Money> {
    positive_rupiah_strategy().prop_map(Money::from_rupiah)
}

/// Strategy for Money values of any sign
pub fn money_strategy() -> impl Strategy<Value = Money> {
    rupiah_strategy().prop_map(Money::from_rupiah)
}

/// Strategy for account categories
pub fn account_category_strategy() -> impl Strategy<Value = AccountCategory> {
    prop_oneof![
        Just(AccountCategory::Asset),
        Just(AccountCategory::Liability),
        Just(AccountCategory::Equity),
        Just(AccountCategory::Revenue),
        Just(AccountCategory::Expense),
    ]
}

/// Strategy for manifest route categories
pub fn route_category_strategy() -> impl Strategy<Value = RouteCategory> {
    prop_oneof![
        Just(RouteCategory::Hulu),
        Just(RouteCategory::Ketapang),
        Just(RouteCategory::Pantura),
        Just(RouteCategory::Putussibau),
        Just(RouteCategory::Truk),
        Just(RouteCategory::Kalteng),
    ]
}

/// Strategy for dates within the 2020-2030 operating window
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (2020i32..2031i32, 1u32..13u32, 1u32..29u32).prop_map(|(y, m, d)| {
        NaiveDate::from_ymd_opt(y, m, d).unwrap_or_else(|| panic!("invalid generated date"))
    })
}

/// Strategy for resi numbers in the office's format
pub fn resi_strategy() -> impl Strategy<Value = String> {
    (1u32..100_000u32).prop_map(|n| format!("BMM-{n:05}"))
}
