//! Account DTOs

use serde::{Deserialize, Serialize};

use core_kernel::{AccountId, Money};
use domain_ledger::{Account, AccountCategory, NormalSide};

#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub code: String,
    pub name: String,
    pub category: AccountCategory,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAccountRequest {
    pub code: Option<String>,
    pub name: Option<String>,
    pub category: Option<AccountCategory>,
}

#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub id: AccountId,
    pub code: String,
    pub name: String,
    pub category: AccountCategory,
    pub normal_side: NormalSide,
    pub balance: Money,
}

impl AccountResponse {
    pub fn from_account(account: &Account, balance: Money) -> Self {
        Self {
            id: account.id,
            code: account.code.clone(),
            name: account.name.clone(),
            category: account.category,
            normal_side: account.normal_side(),
            balance,
        }
    }
}
