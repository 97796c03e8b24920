use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::OwnerSummary;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Payroll {
    pub id: Uuid,
    pub user_id: Uuid,
    pub month: String,
    pub basic_salary: f64,
    pub allowances: f64,
    pub deductions: f64,
    pub increment: f64,
    pub net_pay: f64,
    pub payment_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePayrollInput {
    pub user_id: Option<Uuid>,
    pub month: Option<String>,
    pub basic_salary: Option<f64>,
    pub allowances: Option<f64>,
    pub deductions: Option<f64>,
    pub increment: Option<f64>,
}

/// Net pay is fixed when the record is written. Increment is recorded
/// alongside but does not contribute.
pub fn net_pay(basic_salary: f64, allowances: f64, deductions: f64) -> f64 {
    basic_salary + allowances - deductions
}

impl Payroll {
    pub fn new(
        user_id: Uuid,
        month: String,
        basic_salary: f64,
        allowances: f64,
        deductions: f64,
        increment: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            month,
            basic_salary,
            allowances,
            deductions,
            increment,
            net_pay: net_pay(basic_salary, allowances, deductions),
            payment_date: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollWithOwner {
    #[serde(flatten)]
    pub payroll: Payroll,
    pub owner: Option<OwnerSummary>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PayrollWithOwnerRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub month: String,
    pub basic_salary: f64,
    pub allowances: f64,
    pub deductions: f64,
    pub increment: f64,
    pub net_pay: f64,
    pub payment_date: DateTime<Utc>,
    pub owner_name: Option<String>,
    pub owner_email: Option<String>,
    pub owner_department: Option<String>,
}

impl From<PayrollWithOwnerRow> for PayrollWithOwner {
    fn from(row: PayrollWithOwnerRow) -> Self {
        let owner = match (row.owner_name, row.owner_email) {
            (Some(name), Some(email)) => Some(OwnerSummary {
                id: row.user_id,
                name,
                email,
                department: row.owner_department,
            }),
            _ => None,
        };

        Self {
            payroll: Payroll {
                id: row.id,
                user_id: row.user_id,
                month: row.month,
                basic_salary: row.basic_salary,
                allowances: row.allowances,
                deductions: row.deductions,
                increment: row.increment,
                net_pay: row.net_pay,
                payment_date: row.payment_date,
            },
            owner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_net_pay_excludes_increment() {
        let payroll = Payroll::new(Uuid::new_v4(), "2025-01".to_string(), 5000.0, 750.0, 250.0, 400.0);

        assert_eq!(payroll.net_pay, 5500.0);
        assert_eq!(payroll.increment, 400.0);
    }
}
