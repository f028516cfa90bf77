//! The derivation registry
//!
//! Persistence code calls `on_save`/`on_delete` explicitly, inside the
//! same request-scoped write as the triggering event, so ledger state is
//! never observably out of step with event state. The registry is the
//! single dispatch point: one variant per event kind, one rule per
//! variant.
//!
//! A rule that cannot resolve its accounts skips the whole derivation
//! without failing the event save. The skip is logged and recorded on a
//! queryable failure list for operator review.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{AccountId, Money};
use domain_events::{CashAdvance, InboundShipment, Manifest, PayrollRun};
use domain_ledger::{EntryDraft, Ledger};

use crate::bindings::{AccountBinding, AccountBindings};
use crate::error::DerivationError;
use crate::key;

/// A source-event save or delete, dispatched by variant
#[derive(Debug, Clone, Copy)]
pub enum SourceEvent<'a> {
    Inbound(&'a InboundShipment),
    Manifest(&'a Manifest),
    CashAdvance(&'a CashAdvance),
    Payroll(&'a PayrollRun),
}

/// One skipped derivation, kept for operator review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailedDerivation {
    pub occurred_at: DateTime<Utc>,
    /// Key (or key prefix) of the derivation that was skipped
    pub derivation_key: String,
    /// Role that could not be resolved, with its code and name hint
    pub missing_account: String,
}

#[derive(Debug, Clone)]
pub struct DerivationRegistry {
    bindings: AccountBindings,
    failures: Vec<FailedDerivation>,
}

impl Default for DerivationRegistry {
    fn default() -> Self {
        Self::new(AccountBindings::default())
    }
}

impl DerivationRegistry {
    pub fn new(bindings: AccountBindings) -> Self {
        Self {
            bindings,
            failures: Vec::new(),
        }
    }

    pub fn bindings(&self) -> &AccountBindings {
        &self.bindings
    }

    /// Derivations skipped because an account could not be resolved
    pub fn failures(&self) -> &[FailedDerivation] {
        &self.failures
    }

    pub fn clear_failures(&mut self) {
        self.failures.clear();
    }

    /// Applies the derivation rule for a saved event
    ///
    /// Idempotent: saving the same unchanged event again leaves exactly
    /// the same entries behind.
    pub fn on_save(
        &mut self,
        ledger: &mut Ledger,
        event: SourceEvent<'_>,
    ) -> Result<(), DerivationError> {
        match event {
            SourceEvent::Inbound(shipment) => self.derive_inbound(ledger, shipment),
            SourceEvent::Manifest(manifest) => self.derive_manifest(ledger, manifest),
            SourceEvent::CashAdvance(advance) => self.derive_cash_advance(ledger, advance),
            SourceEvent::Payroll(run) => self.derive_payroll(ledger, run),
        }
    }

    /// Retracts every entry the event's derivation produced
    pub fn on_delete(
        &mut self,
        ledger: &mut Ledger,
        event: SourceEvent<'_>,
    ) -> Result<(), DerivationError> {
        match event {
            SourceEvent::Inbound(shipment) => {
                ledger.retract_key(&key::inbound(&shipment.resi));
            }
            SourceEvent::Manifest(manifest) => {
                ledger.retract_key(&key::manifest_payable(manifest.category, &manifest.resi));
                ledger.retract_key(&key::manifest_advance(manifest.category, &manifest.resi));
            }
            SourceEvent::CashAdvance(advance) => {
                ledger.retract_key(&key::cash_advance(advance.id));
            }
            SourceEvent::Payroll(run) => {
                ledger.retract_prefix(&key::payroll_prefix(run.employee_id, run.year, run.month));
            }
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Rules, one per event kind
    // ------------------------------------------------------------------

    /// Inbound shipment: debit receivable, credit revenue
    fn derive_inbound(
        &mut self,
        ledger: &mut Ledger,
        shipment: &InboundShipment,
    ) -> Result<(), DerivationError> {
        let entry_key = key::inbound(&shipment.resi);
        if !shipment.total_cost.is_positive() {
            ledger.retract_key(&entry_key);
            return Ok(());
        }

        let Some((receivable, revenue)) = self.resolve_pair(
            ledger,
            &entry_key,
            ("receivable", |b: &AccountBindings| &b.receivable),
            ("revenue", |b: &AccountBindings| &b.revenue),
        ) else {
            return Ok(());
        };

        let date = shipment
            .stt_date
            .or(shipment.received_date)
            .unwrap_or_else(|| shipment.created_at.date_naive());
        ledger.upsert_by_key(
            &entry_key,
            EntryDraft::new(
                date,
                format!("Pendapatan jasa resi {}", shipment.resi),
                receivable,
                revenue,
                shipment.total_cost,
            ),
        )?;
        Ok(())
    }

    /// Manifest: payable leg for the total, cash leg for the advance
    ///
    /// A leg whose amount has dropped to zero is retracted on its own;
    /// the other leg stays.
    fn derive_manifest(
        &mut self,
        ledger: &mut Ledger,
        manifest: &Manifest,
    ) -> Result<(), DerivationError> {
        let payable_key = key::manifest_payable(manifest.category, &manifest.resi);
        let advance_key = key::manifest_advance(manifest.category, &manifest.resi);

        if !manifest.total.is_positive() {
            ledger.retract_key(&payable_key);
        }
        if !manifest.advance.is_positive() {
            ledger.retract_key(&advance_key);
        }
        if !manifest.total.is_positive() && !manifest.advance.is_positive() {
            return Ok(());
        }

        // Resolve everything the positive legs need before touching
        // either: a half-applied manifest is worse than a skipped one.
        let Some(freight) =
            self.resolve(ledger, &payable_key, "freight expense", &self.bindings.freight_expense.clone())
        else {
            return Ok(());
        };
        let payable = if manifest.total.is_positive() {
            match self.resolve(ledger, &payable_key, "payable", &self.bindings.payable.clone()) {
                Some(id) => Some(id),
                None => return Ok(()),
            }
        } else {
            None
        };
        let cash = if manifest.advance.is_positive() {
            match self.resolve(ledger, &advance_key, "cash", &self.bindings.cash.clone()) {
                Some(id) => Some(id),
                None => return Ok(()),
            }
        } else {
            None
        };

        let date = manifest
            .ship_date
            .unwrap_or_else(|| manifest.created_at.date_naive());

        if let Some(payable) = payable {
            ledger.upsert_by_key(
                &payable_key,
                EntryDraft::new(
                    date,
                    format!("Hutang manifest {} resi {}", manifest.category, manifest.resi),
                    freight,
                    payable,
                    manifest.total,
                ),
            )?;
        }
        if let Some(cash) = cash {
            ledger.upsert_by_key(
                &advance_key,
                EntryDraft::new(
                    date,
                    format!(
                        "Uang muka manifest {} resi {}",
                        manifest.category, manifest.resi
                    ),
                    freight,
                    cash,
                    manifest.advance,
                ),
            )?;
        }
        Ok(())
    }

    /// Cash advance: debit employee receivable, credit cash
    fn derive_cash_advance(
        &mut self,
        ledger: &mut Ledger,
        advance: &CashAdvance,
    ) -> Result<(), DerivationError> {
        let entry_key = key::cash_advance(advance.id);
        if !advance.amount.is_positive() {
            ledger.retract_key(&entry_key);
            return Ok(());
        }

        let Some((employee_receivable, cash)) = self.resolve_pair(
            ledger,
            &entry_key,
            ("employee receivable", |b: &AccountBindings| {
                &b.employee_receivable
            }),
            ("cash", |b: &AccountBindings| &b.cash),
        ) else {
            return Ok(());
        };

        ledger.upsert_by_key(
            &entry_key,
            EntryDraft::new(
                advance.date,
                format!("Kasbon {}", advance.employee_name),
                employee_receivable,
                cash,
                advance.amount,
            ),
        )?;
        Ok(())
    }

    /// Payroll: retract the whole prefix, then re-derive up to two
    /// entries. Recreating from scratch on every save sidesteps
    /// partial-update bugs when the set of entries changes shape.
    fn derive_payroll(&mut self, ledger: &mut Ledger, run: &PayrollRun) -> Result<(), DerivationError> {
        let prefix = key::payroll_prefix(run.employee_id, run.year, run.month);

        let advance_due = run.advance_deduction.is_positive();
        let net_due = run.net_pay.is_positive();
        if !run.gross().is_positive() || (!advance_due && !net_due) {
            ledger.retract_prefix(&prefix);
            return Ok(());
        }

        // Resolve before retracting: a skipped derivation must leave
        // the previously derived entries exactly as they were.
        let Some(wages) = self.resolve(ledger, &prefix, "wage expense", &self.bindings.wage_expense.clone())
        else {
            return Ok(());
        };
        let employee_receivable = if advance_due {
            match self.resolve(
                ledger,
                &prefix,
                "employee receivable",
                &self.bindings.employee_receivable.clone(),
            ) {
                Some(id) => Some(id),
                None => return Ok(()),
            }
        } else {
            None
        };
        let cash = if net_due {
            match self.resolve(ledger, &prefix, "cash", &self.bindings.cash.clone()) {
                Some(id) => Some(id),
                None => return Ok(()),
            }
        } else {
            None
        };

        ledger.retract_prefix(&prefix);
        let date = payday(run);

        if let Some(employee_receivable) = employee_receivable {
            ledger.post(
                EntryDraft::new(
                    date,
                    format!(
                        "Potongan kasbon gaji {} {}-{:02}",
                        run.employee_name, run.year, run.month
                    ),
                    wages,
                    employee_receivable,
                    run.advance_deduction,
                )
                .with_key(key::payroll_advance(run.employee_id, run.year, run.month)),
            )?;
        }
        if let Some(cash) = cash {
            ledger.post(
                EntryDraft::new(
                    date,
                    format!(
                        "Gaji bersih {} {}-{:02}",
                        run.employee_name, run.year, run.month
                    ),
                    wages,
                    cash,
                    run.net_pay,
                )
                .with_key(key::payroll_net(run.employee_id, run.year, run.month)),
            )?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Account resolution
    // ------------------------------------------------------------------

    fn resolve(
        &mut self,
        ledger: &Ledger,
        derivation_key: &str,
        role: &str,
        binding: &AccountBinding,
    ) -> Option<AccountId> {
        match binding.resolve(ledger) {
            Some(id) => Some(id),
            None => {
                let missing_account =
                    format!("{role} ({} / \"{}\")", binding.code, binding.name_hint);
                tracing::warn!(
                    derivation_key,
                    missing_account,
                    "skipping derivation, account unresolved"
                );
                self.failures.push(FailedDerivation {
                    occurred_at: Utc::now(),
                    derivation_key: derivation_key.to_string(),
                    missing_account,
                });
                None
            }
        }
    }

    fn resolve_pair(
        &mut self,
        ledger: &Ledger,
        derivation_key: &str,
        debit: (&str, fn(&AccountBindings) -> &AccountBinding),
        credit: (&str, fn(&AccountBindings) -> &AccountBinding),
    ) -> Option<(AccountId, AccountId)> {
        let debit_binding = debit.1(&self.bindings).clone();
        let credit_binding = credit.1(&self.bindings).clone();
        let debit_id = self.resolve(ledger, derivation_key, debit.0, &debit_binding)?;
        let credit_id = self.resolve(ledger, derivation_key, credit.0, &credit_binding)?;
        Some((debit_id, credit_id))
    }
}

/// Last day of the run's month; wages are booked at period close
fn payday(run: &PayrollRun) -> NaiveDate {
    let (next_year, next_month) = if run.month == 12 {
        (run.year + 1, 1)
    } else {
        (run.year, run.month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .unwrap_or_else(|| run.created_at.date_naive())
}
