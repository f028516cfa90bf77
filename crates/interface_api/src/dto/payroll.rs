//! Cash advance and payroll DTOs

use chrono::NaiveDate;
use serde::Deserialize;

use core_kernel::{EmployeeId, Money};
use domain_events::{CashAdvance, PayrollRun};

#[derive(Debug, Deserialize)]
pub struct CashAdvanceRequest {
    /// Omitted on first advance for a new employee; a fresh id is
    /// minted then
    #[serde(default)]
    pub employee_id: Option<EmployeeId>,
    pub employee_name: String,
    pub date: NaiveDate,
    pub amount: Money,
    #[serde(default)]
    pub note: Option<String>,
}

impl CashAdvanceRequest {
    pub fn apply(self, advance: &mut CashAdvance) {
        advance.employee_id = self.employee_id.unwrap_or(advance.employee_id);
        advance.employee_name = self.employee_name;
        advance.date = self.date;
        advance.amount = self.amount;
        advance.note = self.note;
    }
}

#[derive(Debug, Deserialize)]
pub struct PayrollRequest {
    #[serde(default)]
    pub employee_id: Option<EmployeeId>,
    pub employee_name: String,
    pub year: i32,
    pub month: u32,
    pub base_pay: Money,
    #[serde(default)]
    pub overtime: Money,
    #[serde(default)]
    pub bonus: Money,
    #[serde(default)]
    pub advance_deduction: Money,
    #[serde(default)]
    pub absence_deduction: Money,
    #[serde(default)]
    pub insurance_deduction: Money,
    #[serde(default)]
    pub other_deduction: Money,
}

impl PayrollRequest {
    /// Writes the request onto a run; net pay is re-derived by the
    /// register on save
    pub fn apply(self, run: &mut PayrollRun) {
        run.employee_id = self.employee_id.unwrap_or(run.employee_id);
        run.employee_name = self.employee_name;
        run.year = self.year;
        run.month = self.month;
        run.base_pay = self.base_pay;
        run.overtime = self.overtime;
        run.bonus = self.bonus;
        run.advance_deduction = self.advance_deduction;
        run.absence_deduction = self.absence_deduction;
        run.insurance_deduction = self.insurance_deduction;
        run.other_deduction = self.other_deduction;
        run.recompute_net();
    }
}

#[derive(Debug, Deserialize)]
pub struct PayrollListQuery {
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub month: Option<u32>,
}
