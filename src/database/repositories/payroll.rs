use anyhow::Result;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::models::{Payroll, PayrollWithOwner, PayrollWithOwnerRow};

#[derive(Clone)]
pub struct PayrollRepository {
    pool: SqlitePool,
}

impl PayrollRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_payroll(&self, payroll: &Payroll) -> Result<Payroll> {
        let payroll = sqlx::query_as::<_, Payroll>(
            r#"
            INSERT INTO
                payrolls (
                    id,
                    user_id,
                    month,
                    basic_salary,
                    allowances,
                    deductions,
                    increment,
                    net_pay,
                    payment_date
                )
            VALUES
                (?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING
                id,
                user_id,
                month,
                basic_salary,
                allowances,
                deductions,
                increment,
                net_pay,
                payment_date
            "#,
        )
        .bind(payroll.id)
        .bind(payroll.user_id)
        .bind(&payroll.month)
        .bind(payroll.basic_salary)
        .bind(payroll.allowances)
        .bind(payroll.deductions)
        .bind(payroll.increment)
        .bind(payroll.net_pay)
        .bind(payroll.payment_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(payroll)
    }

    pub async fn get_payrolls_for_user(&self, user_id: Uuid) -> Result<Vec<Payroll>> {
        let payrolls = sqlx::query_as::<_, Payroll>(
            r#"
            SELECT
                id,
                user_id,
                month,
                basic_salary,
                allowances,
                deductions,
                increment,
                net_pay,
                payment_date
            FROM
                payrolls
            WHERE
                user_id = ?
            ORDER BY
                payment_date DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(payrolls)
    }

    pub async fn get_all_payrolls(&self) -> Result<Vec<PayrollWithOwner>> {
        let rows = sqlx::query_as::<_, PayrollWithOwnerRow>(
            r#"
            SELECT
                p.id,
                p.user_id,
                p.month,
                p.basic_salary,
                p.allowances,
                p.deductions,
                p.increment,
                p.net_pay,
                p.payment_date,
                u.name AS owner_name,
                u.email AS owner_email,
                u.department AS owner_department
            FROM
                payrolls p
                LEFT JOIN users u ON u.id = p.user_id
            ORDER BY
                p.payment_date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PayrollWithOwner::from).collect())
    }

    pub async fn total_net_pay(&self) -> Result<f64> {
        let total: f64 = sqlx::query_scalar("SELECT COALESCE(SUM(net_pay), 0.0) FROM payrolls")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }
}
