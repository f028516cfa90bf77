//! Account bindings
//!
//! A derivation rule names the accounts it needs by role. Each role is
//! bound to a canonical code plus a name hint; resolution tries the
//! exact code first and falls back to a case-insensitive substring
//! match on account names, so a renumbered chart keeps working as long
//! as the names stay recognizable.

use serde::{Deserialize, Serialize};

use core_kernel::AccountId;
use domain_ledger::Ledger;

/// One role's canonical code and name-based fallback
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountBinding {
    pub code: String,
    pub name_hint: String,
}

impl AccountBinding {
    pub fn new(code: impl Into<String>, name_hint: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name_hint: name_hint.into(),
        }
    }

    pub fn resolve(&self, ledger: &Ledger) -> Option<AccountId> {
        ledger
            .account_by_code(&self.code)
            .or_else(|| ledger.find_account_by_name(&self.name_hint))
            .map(|a| a.id)
    }
}

/// The full set of roles the derivation rules draw on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountBindings {
    pub cash: AccountBinding,
    pub receivable: AccountBinding,
    pub employee_receivable: AccountBinding,
    pub payable: AccountBinding,
    pub revenue: AccountBinding,
    pub freight_expense: AccountBinding,
    pub wage_expense: AccountBinding,
}

impl Default for AccountBindings {
    /// Bindings for the standard chart of the cargo office
    fn default() -> Self {
        Self {
            cash: AccountBinding::new("111", "Kas"),
            receivable: AccountBinding::new("113", "Piutang Usaha"),
            employee_receivable: AccountBinding::new("114", "Piutang Karyawan"),
            payable: AccountBinding::new("211", "Hutang"),
            revenue: AccountBinding::new("411", "Pendapatan"),
            freight_expense: AccountBinding::new("511", "Beban Angkut"),
            wage_expense: AccountBinding::new("512", "Beban Gaji"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_ledger::{AccountCategory, CargoChartOfAccounts};

    #[test]
    fn test_resolves_by_exact_code() {
        let ledger = Ledger::with_chart(CargoChartOfAccounts::standard_accounts()).unwrap();
        let bindings = AccountBindings::default();
        let id = bindings.cash.resolve(&ledger).unwrap();
        assert_eq!(ledger.account(id).unwrap().name, "Kas");
    }

    #[test]
    fn test_falls_back_to_name_substring() {
        let mut ledger = Ledger::new();
        // Renumbered chart: code lookup misses, name hint still lands
        ledger
            .register_account("1-100", "Kas Besar", AccountCategory::Asset)
            .unwrap();
        let bindings = AccountBindings::default();
        let id = bindings.cash.resolve(&ledger).unwrap();
        assert_eq!(ledger.account(id).unwrap().code, "1-100");
    }

    #[test]
    fn test_unresolvable_binding_is_none() {
        let ledger = Ledger::new();
        assert!(AccountBindings::default().revenue.resolve(&ledger).is_none());
    }
}
