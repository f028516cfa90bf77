//! Shared application state
//!
//! The whole back office lives behind one `RwLock`: every mutating
//! request takes the write lock for its duration, so a source-event
//! save and its derivation are observed atomically. Reports take the
//! read lock and may run concurrently.

use std::sync::Arc;

use tokio::sync::RwLock;

use domain_derivation::DerivationRegistry;
use domain_events::{
    CashAdvanceRegister, CashbookRegister, InboundRegister, ManifestRegister, OutboundRegister,
    PayrollRegister,
};
use domain_ledger::{CargoChartOfAccounts, Ledger, LedgerError};
use domain_receivable::InvoiceBook;

use crate::config::ApiConfig;

/// All persistent back-office state
#[derive(Debug, Default)]
pub struct BackOffice {
    pub ledger: Ledger,
    pub inbound: InboundRegister,
    pub outbound: OutboundRegister,
    pub manifests: ManifestRegister,
    pub cash_advances: CashAdvanceRegister,
    pub payroll: PayrollRegister,
    pub cashbook: CashbookRegister,
    pub invoices: InvoiceBook,
    pub derivations: DerivationRegistry,
}

impl BackOffice {
    /// Empty state with no accounts registered
    pub fn new() -> Self {
        Self::default()
    }

    /// State seeded with the office's standard chart of accounts
    pub fn with_standard_chart() -> Result<Self, LedgerError> {
        Ok(Self {
            ledger: Ledger::with_chart(CargoChartOfAccounts::standard_accounts())?,
            ..Self::default()
        })
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub back_office: Arc<RwLock<BackOffice>>,
    pub config: ApiConfig,
}

impl AppState {
    pub fn new(back_office: BackOffice, config: ApiConfig) -> Self {
        Self {
            back_office: Arc::new(RwLock::new(back_office)),
            config,
        }
    }
}
