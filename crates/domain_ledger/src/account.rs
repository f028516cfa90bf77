//! Account types for the chart of accounts
//!
//! This module defines the account structure for double-entry bookkeeping.

use serde::{Deserialize, Serialize};

use core_kernel::AccountId;

/// The side on which an account's balance is conventionally positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalSide {
    Debit,
    Credit,
}

/// Categories of accounts in the chart of accounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountCategory {
    /// Asset accounts (debit normal balance)
    Asset,
    /// Liability accounts (credit normal balance)
    Liability,
    /// Equity accounts (credit normal balance)
    Equity,
    /// Revenue accounts (credit normal balance)
    Revenue,
    /// Expense accounts (debit normal balance)
    Expense,
}

impl AccountCategory {
    /// Returns the normal balance side for this category
    pub fn normal_side(&self) -> NormalSide {
        if self.is_debit_normal() {
            NormalSide::Debit
        } else {
            NormalSide::Credit
        }
    }

    /// Returns true if this category has a debit normal balance
    pub fn is_debit_normal(&self) -> bool {
        matches!(self, AccountCategory::Asset | AccountCategory::Expense)
    }
}

/// An account in the chart of accounts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,
    /// Account code (e.g., "111")
    pub code: String,
    /// Account name (e.g., "Kas")
    pub name: String,
    /// Account category
    pub category: AccountCategory,
}

impl Account {
    /// Creates a new account
    pub fn new(
        id: AccountId,
        code: impl Into<String>,
        name: impl Into<String>,
        category: AccountCategory,
    ) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
            category,
        }
    }

    /// Returns the account's normal balance side
    pub fn normal_side(&self) -> NormalSide {
        self.category.normal_side()
    }

    /// Returns true when the account name contains the needle,
    /// case-insensitively. Used for best-effort fallback lookups.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }

    /// Cash-flow classification: accounts whose name mentions
    /// "kas" or "bank" are treated as cash accounts.
    pub fn is_cash_account(&self) -> bool {
        self.name_contains("kas") || self.name_contains("bank")
    }
}

/// The standard chart of accounts used by the cargo back office
pub struct CargoChartOfAccounts;

impl CargoChartOfAccounts {
    /// Creates the standard accounts seeded on first run
    pub fn standard_accounts() -> Vec<(&'static str, &'static str, AccountCategory)> {
        vec![
            // Assets
            ("111", "Kas", AccountCategory::Asset),
            ("112", "Bank", AccountCategory::Asset),
            ("113", "Piutang Usaha", AccountCategory::Asset),
            ("114", "Piutang Karyawan", AccountCategory::Asset),
            // Liabilities
            ("211", "Hutang Usaha", AccountCategory::Liability),
            // Equity
            ("311", "Modal Pemilik", AccountCategory::Equity),
            // Revenue
            ("411", "Pendapatan Jasa", AccountCategory::Revenue),
            // Expenses
            ("511", "Beban Angkut", AccountCategory::Expense),
            ("512", "Beban Gaji", AccountCategory::Expense),
            ("513", "Beban BBM", AccountCategory::Expense),
            ("514", "Beban Operasional", AccountCategory::Expense),
        ]
    }
}
