//! Financial statement generation
//!
//! Statements are assembled from per-account balances on every request;
//! nothing here is cached. The 2% withholding tax applied to revenue is
//! a fixed business policy constant, not something read from the chart
//! of accounts.

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{AccountId, Money, Rate, ReportingPeriod};

use crate::account::{AccountCategory, NormalSide};
use crate::error::LedgerError;
use crate::ledger::Ledger;

/// The fixed withholding-tax policy applied to total revenue
pub const WITHHOLDING_TAX_RATE: Rate = Rate::new(dec!(0.02));

/// One named amount on a statement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementLine {
    pub account_code: String,
    pub account_name: String,
    pub amount: Money,
}

/// Trial balance: every non-zero account balance split into debit and
/// credit columns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialBalance {
    pub rows: Vec<TrialBalanceRow>,
    pub total_debit: Money,
    pub total_credit: Money,
    /// `total_debit − total_credit`; zero for a consistent ledger.
    /// Exposed as a diagnostic, not an error: manual unbalanced entries
    /// are allowed and must show up here.
    pub difference: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialBalanceRow {
    pub account_code: String,
    pub account_name: String,
    pub debit: Money,
    pub credit: Money,
}

/// Income statement with the fixed 2% withholding tax
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeStatement {
    pub revenue_lines: Vec<StatementLine>,
    pub total_revenue: Money,
    pub withholding_tax: Money,
    pub gross_after_tax: Money,
    pub expense_lines: Vec<StatementLine>,
    pub total_expense: Money,
    pub net_income: Money,
}

/// Balance sheet with net income folded into equity as retained earnings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceSheet {
    pub asset_lines: Vec<StatementLine>,
    pub total_assets: Money,
    pub liability_lines: Vec<StatementLine>,
    pub total_liabilities: Money,
    pub equity_lines: Vec<StatementLine>,
    pub opening_equity: Money,
    pub retained_earnings: Money,
    pub total_equity: Money,
    /// `assets − (liabilities + equity)`, expected ≈ 0
    pub balance_check: Money,
}

/// Direct-method cash flow over the cash/bank accounts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashFlowStatement {
    pub inflows: Vec<CashFlowLine>,
    pub outflows: Vec<CashFlowLine>,
    pub total_inflow: Money,
    pub total_outflow: Money,
    pub net_cash_flow: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashFlowLine {
    pub date: NaiveDate,
    pub description: String,
    /// The account on the other side of the entry
    pub counterparty: String,
    pub amount: Money,
}

/// Running-balance transaction listing for one account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralLedgerDetail {
    pub account_code: String,
    pub account_name: String,
    pub normal_side: NormalSide,
    pub rows: Vec<GeneralLedgerRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralLedgerRow {
    pub date: NaiveDate,
    pub description: String,
    pub counterparty: String,
    pub debit: Money,
    pub credit: Money,
    pub running_balance: Money,
}

/// Dashboard summary cards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_assets: Money,
    pub total_revenue: Money,
    pub total_expense: Money,
    pub net_income: Money,
}

/// Builds the trial balance over a reporting period
pub fn trial_balance(ledger: &Ledger, period: ReportingPeriod) -> Result<TrialBalance, LedgerError> {
    let mut rows = Vec::new();
    let mut total_debit = Money::zero();
    let mut total_credit = Money::zero();

    for account in ledger.accounts_sorted() {
        let balance = ledger.balance(account.id, period)?;
        if balance.is_zero() {
            continue;
        }

        // An abnormal (sign-reversed) balance is reported on the
        // opposite column as an absolute value, never hidden.
        let (debit, credit) = match (account.normal_side(), balance.is_negative()) {
            (NormalSide::Debit, false) => (balance, Money::zero()),
            (NormalSide::Debit, true) => (Money::zero(), balance.abs()),
            (NormalSide::Credit, false) => (Money::zero(), balance),
            (NormalSide::Credit, true) => (balance.abs(), Money::zero()),
        };

        total_debit += debit;
        total_credit += credit;
        rows.push(TrialBalanceRow {
            account_code: account.code.clone(),
            account_name: account.name.clone(),
            debit,
            credit,
        });
    }

    Ok(TrialBalance {
        rows,
        total_debit,
        total_credit,
        difference: total_debit - total_credit,
    })
}

/// Builds the income statement over a reporting period
pub fn income_statement(
    ledger: &Ledger,
    period: ReportingPeriod,
) -> Result<IncomeStatement, LedgerError> {
    let (revenue_lines, total_revenue) =
        category_lines(ledger, AccountCategory::Revenue, period, true)?;
    let (expense_lines, total_expense) =
        category_lines(ledger, AccountCategory::Expense, period, true)?;

    let withholding_tax = WITHHOLDING_TAX_RATE.apply_floor(&total_revenue);
    let gross_after_tax = total_revenue - withholding_tax;
    let net_income = gross_after_tax - total_expense;

    Ok(IncomeStatement {
        revenue_lines,
        total_revenue,
        withholding_tax,
        gross_after_tax,
        expense_lines,
        total_expense,
        net_income,
    })
}

/// Builds the balance sheet over a reporting period
pub fn balance_sheet(ledger: &Ledger, period: ReportingPeriod) -> Result<BalanceSheet, LedgerError> {
    let (asset_lines, total_assets) = category_lines(ledger, AccountCategory::Asset, period, true)?;
    let (liability_lines, total_liabilities) =
        category_lines(ledger, AccountCategory::Liability, period, true)?;
    // Equity accounts are always listed, zero balances included
    let (equity_lines, opening_equity) =
        category_lines(ledger, AccountCategory::Equity, period, false)?;

    let retained_earnings = income_statement(ledger, period)?.net_income;
    let total_equity = opening_equity + retained_earnings;
    let balance_check = total_assets - (total_liabilities + total_equity);

    Ok(BalanceSheet {
        asset_lines,
        total_assets,
        liability_lines,
        total_liabilities,
        equity_lines,
        opening_equity,
        retained_earnings,
        total_equity,
        balance_check,
    })
}

/// Builds the direct-method cash-flow report over a reporting period
///
/// Cash accounts are those whose name mentions "kas" or "bank". An
/// entry debiting a cash account is an inflow, crediting one is an
/// outflow; in both cases the counterparty is the account on the other
/// side. Line items keep date order with insertion order breaking ties.
pub fn cash_flow(ledger: &Ledger, period: ReportingPeriod) -> Result<CashFlowStatement, LedgerError> {
    let cash_ids: Vec<AccountId> = ledger
        .accounts_sorted()
        .into_iter()
        .filter(|a| a.is_cash_account())
        .map(|a| a.id)
        .collect();

    let mut inflows = Vec::new();
    let mut outflows = Vec::new();
    let mut total_inflow = Money::zero();
    let mut total_outflow = Money::zero();

    let mut entries: Vec<_> = ledger
        .entries()
        .iter()
        .filter(|e| period.contains(e.date))
        .collect();
    entries.sort_by(|a, b| a.date.cmp(&b.date).then(a.seq.cmp(&b.seq)));

    for entry in entries {
        if cash_ids.contains(&entry.debit_account) {
            let counterparty = account_name(ledger, entry.credit_account);
            total_inflow += entry.amount;
            inflows.push(CashFlowLine {
                date: entry.date,
                description: entry.description.clone(),
                counterparty,
                amount: entry.amount,
            });
        }
        if cash_ids.contains(&entry.credit_account) {
            let counterparty = account_name(ledger, entry.debit_account);
            total_outflow += entry.amount;
            outflows.push(CashFlowLine {
                date: entry.date,
                description: entry.description.clone(),
                counterparty,
                amount: entry.amount,
            });
        }
    }

    Ok(CashFlowStatement {
        inflows,
        outflows,
        total_inflow,
        total_outflow,
        net_cash_flow: total_inflow - total_outflow,
    })
}

/// Builds the running-balance general-ledger detail for one account
///
/// Rows are date ascending, ties broken by insertion order; the running
/// balance accumulates on the account's normal side.
pub fn general_ledger(ledger: &Ledger, id: AccountId) -> Result<GeneralLedgerDetail, LedgerError> {
    let account = ledger
        .account(id)
        .ok_or_else(|| LedgerError::AccountNotFound(id.to_string()))?;
    let normal_side = account.normal_side();

    let mut running = Money::zero();
    let mut rows = Vec::new();
    for entry in ledger.account_entries(id) {
        let (debit, credit) = if entry.debit_account == id {
            (entry.amount, Money::zero())
        } else {
            (Money::zero(), entry.amount)
        };

        running += match normal_side {
            NormalSide::Debit => debit - credit,
            NormalSide::Credit => credit - debit,
        };

        let counterparty = if entry.debit_account == id {
            account_name(ledger, entry.credit_account)
        } else {
            account_name(ledger, entry.debit_account)
        };

        rows.push(GeneralLedgerRow {
            date: entry.date,
            description: entry.description.clone(),
            counterparty,
            debit,
            credit,
            running_balance: running,
        });
    }

    Ok(GeneralLedgerDetail {
        account_code: account.code.clone(),
        account_name: account.name.clone(),
        normal_side,
        rows,
    })
}

/// Builds the dashboard summary cards over all time
pub fn dashboard(ledger: &Ledger) -> Result<DashboardSummary, LedgerError> {
    let period = ReportingPeriod::all_time();
    let income = income_statement(ledger, period)?;
    let (_, total_assets) = category_lines(ledger, AccountCategory::Asset, period, true)?;

    Ok(DashboardSummary {
        total_assets,
        total_revenue: income.total_revenue,
        total_expense: income.total_expense,
        net_income: income.net_income,
    })
}

fn category_lines(
    ledger: &Ledger,
    category: AccountCategory,
    period: ReportingPeriod,
    skip_zero: bool,
) -> Result<(Vec<StatementLine>, Money), LedgerError> {
    let mut lines = Vec::new();
    let mut total = Money::zero();
    for account in ledger.accounts_in_category(category) {
        let balance = ledger.balance(account.id, period)?;
        if skip_zero && balance.is_zero() {
            continue;
        }
        total += balance;
        lines.push(StatementLine {
            account_code: account.code.clone(),
            account_name: account.name.clone(),
            amount: balance,
        });
    }
    Ok((lines, total))
}

fn account_name(ledger: &Ledger, id: AccountId) -> String {
    ledger
        .account(id)
        .map(|a| a.name.clone())
        .unwrap_or_else(|| id.to_string())
}
