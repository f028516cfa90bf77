//! Employee cash advances and monthly payroll runs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use core_kernel::{CashAdvanceId, EmployeeId, Money, PayrollId};

use crate::error::EventError;

/// A cash advance handed to an employee
///
/// The same employee may take several advances on the same day, so the
/// record has no natural key beyond its id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashAdvance {
    pub id: CashAdvanceId,
    pub employee_id: EmployeeId,
    pub employee_name: String,
    pub date: NaiveDate,
    pub amount: Money,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl CashAdvance {
    pub fn new(
        employee_id: EmployeeId,
        employee_name: impl Into<String>,
        date: NaiveDate,
        amount: Money,
    ) -> Self {
        Self {
            id: CashAdvanceId::new_v7(),
            employee_id,
            employee_name: employee_name.into(),
            date,
            amount,
            note: None,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct CashAdvanceRegister {
    advances: HashMap<CashAdvanceId, CashAdvance>,
}

impl CashAdvanceRegister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, advance: CashAdvance) -> Result<CashAdvanceId, EventError> {
        if advance.employee_name.trim().is_empty() {
            return Err(EventError::validation("employee name is required"));
        }
        let id = advance.id;
        self.advances.insert(id, advance);
        Ok(id)
    }

    pub fn update(&mut self, advance: CashAdvance) -> Result<(), EventError> {
        if !self.advances.contains_key(&advance.id) {
            return Err(EventError::not_found("cash advance"));
        }
        self.advances.insert(advance.id, advance);
        Ok(())
    }

    pub fn remove(&mut self, id: CashAdvanceId) -> Result<CashAdvance, EventError> {
        self.advances
            .remove(&id)
            .ok_or_else(|| EventError::not_found("cash advance"))
    }

    pub fn get(&self, id: CashAdvanceId) -> Option<&CashAdvance> {
        self.advances.get(&id)
    }

    /// All advances, most recent date first
    pub fn list(&self) -> Vec<&CashAdvance> {
        let mut all: Vec<_> = self.advances.values().collect();
        all.sort_by(|a, b| b.date.cmp(&a.date).then(a.employee_name.cmp(&b.employee_name)));
        all
    }

    pub fn for_employee(&self, employee_id: EmployeeId) -> Vec<&CashAdvance> {
        self.list()
            .into_iter()
            .filter(|a| a.employee_id == employee_id)
            .collect()
    }
}

/// One employee's payroll for one month
///
/// `net_pay` is derived and must never be set directly; the register
/// recomputes it on every insert/update before anything downstream sees
/// the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRun {
    pub id: PayrollId,
    pub employee_id: EmployeeId,
    pub employee_name: String,
    pub year: i32,
    pub month: u32,
    pub base_pay: Money,
    pub overtime: Money,
    pub bonus: Money,
    pub advance_deduction: Money,
    pub absence_deduction: Money,
    pub insurance_deduction: Money,
    pub other_deduction: Money,
    pub net_pay: Money,
    pub created_at: DateTime<Utc>,
}

impl PayrollRun {
    pub fn new(
        employee_id: EmployeeId,
        employee_name: impl Into<String>,
        year: i32,
        month: u32,
        base_pay: Money,
    ) -> Self {
        let mut run = Self {
            id: PayrollId::new_v7(),
            employee_id,
            employee_name: employee_name.into(),
            year,
            month,
            base_pay,
            overtime: Money::zero(),
            bonus: Money::zero(),
            advance_deduction: Money::zero(),
            absence_deduction: Money::zero(),
            insurance_deduction: Money::zero(),
            other_deduction: Money::zero(),
            net_pay: Money::zero(),
            created_at: Utc::now(),
        };
        run.recompute_net();
        run
    }

    pub fn gross(&self) -> Money {
        self.base_pay + self.overtime + self.bonus
    }

    pub fn total_deductions(&self) -> Money {
        self.advance_deduction + self.absence_deduction + self.insurance_deduction
            + self.other_deduction
    }

    pub fn recompute_net(&mut self) {
        self.net_pay = self.gross() - self.total_deductions();
    }
}

#[derive(Debug, Default, Clone)]
pub struct PayrollRegister {
    runs: HashMap<PayrollId, PayrollRun>,
}

impl PayrollRegister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, mut run: PayrollRun) -> Result<PayrollId, EventError> {
        self.validate(&run)?;
        run.recompute_net();
        let id = run.id;
        self.runs.insert(id, run);
        Ok(id)
    }

    pub fn update(&mut self, mut run: PayrollRun) -> Result<(), EventError> {
        if !self.runs.contains_key(&run.id) {
            return Err(EventError::not_found("payroll run"));
        }
        self.validate(&run)?;
        run.recompute_net();
        self.runs.insert(run.id, run);
        Ok(())
    }

    pub fn remove(&mut self, id: PayrollId) -> Result<PayrollRun, EventError> {
        self.runs
            .remove(&id)
            .ok_or_else(|| EventError::not_found("payroll run"))
    }

    pub fn get(&self, id: PayrollId) -> Option<&PayrollRun> {
        self.runs.get(&id)
    }

    /// All runs, newest period first, then by employee name
    pub fn list(&self) -> Vec<&PayrollRun> {
        let mut all: Vec<_> = self.runs.values().collect();
        all.sort_by(|a, b| {
            (b.year, b.month)
                .cmp(&(a.year, a.month))
                .then(a.employee_name.cmp(&b.employee_name))
        });
        all
    }

    pub fn for_period(&self, year: i32, month: u32) -> Vec<&PayrollRun> {
        self.list()
            .into_iter()
            .filter(|r| r.year == year && r.month == month)
            .collect()
    }

    fn validate(&self, run: &PayrollRun) -> Result<(), EventError> {
        if run.employee_name.trim().is_empty() {
            return Err(EventError::validation("employee name is required"));
        }
        if !(1..=12).contains(&run.month) {
            return Err(EventError::validation("month must be between 1 and 12"));
        }
        let taken = self.runs.values().any(|r| {
            r.employee_id == run.employee_id
                && r.year == run.year
                && r.month == run.month
                && r.id != run.id
        });
        if taken {
            return Err(EventError::DuplicatePayrollPeriod {
                employee: run.employee_name.clone(),
                year: run.year,
                month: run.month,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn rp(amount: i64) -> Money {
        Money::from_rupiah(amount)
    }

    fn employee() -> EmployeeId {
        EmployeeId::new_v7()
    }

    #[test]
    fn test_net_pay_formula() {
        let mut run = PayrollRun::new(employee(), "Budi", 2026, 8, rp(3_000_000));
        run.overtime = rp(200_000);
        run.bonus = rp(100_000);
        run.advance_deduction = rp(500_000);
        run.absence_deduction = rp(50_000);
        run.insurance_deduction = rp(75_000);
        run.other_deduction = rp(25_000);
        run.recompute_net();

        assert_eq!(run.gross(), rp(3_300_000));
        assert_eq!(run.total_deductions(), rp(650_000));
        assert_eq!(run.net_pay, rp(2_650_000));
    }

    #[test]
    fn test_register_overwrites_stale_net_pay() {
        let mut register = PayrollRegister::new();
        let mut run = PayrollRun::new(employee(), "Budi", 2026, 8, rp(3_000_000));
        run.net_pay = rp(1);
        let id = register.insert(run).unwrap();
        assert_eq!(register.get(id).unwrap().net_pay, rp(3_000_000));
    }

    #[test]
    fn test_one_run_per_employee_per_period() {
        let mut register = PayrollRegister::new();
        let budi = employee();
        register
            .insert(PayrollRun::new(budi, "Budi", 2026, 8, rp(3_000_000)))
            .unwrap();

        let err = register
            .insert(PayrollRun::new(budi, "Budi", 2026, 8, rp(2_000_000)))
            .unwrap_err();
        assert!(matches!(err, EventError::DuplicatePayrollPeriod { .. }));

        // Next month is fine, and so is another employee this month
        register
            .insert(PayrollRun::new(budi, "Budi", 2026, 9, rp(3_000_000)))
            .unwrap();
        register
            .insert(PayrollRun::new(employee(), "Sari", 2026, 8, rp(2_500_000)))
            .unwrap();
    }

    #[test]
    fn test_month_out_of_range_rejected() {
        let mut register = PayrollRegister::new();
        let err = register
            .insert(PayrollRun::new(employee(), "Budi", 2026, 13, rp(1_000_000)))
            .unwrap_err();
        assert!(matches!(err, EventError::Validation(_)));
    }

    #[test]
    fn test_cash_advances_may_repeat_per_day() {
        let mut register = CashAdvanceRegister::new();
        let budi = employee();
        let date = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();
        register
            .insert(CashAdvance::new(budi, "Budi", date, rp(100_000)))
            .unwrap();
        register
            .insert(CashAdvance::new(budi, "Budi", date, rp(50_000)))
            .unwrap();

        assert_eq!(register.for_employee(budi).len(), 2);
    }
}
