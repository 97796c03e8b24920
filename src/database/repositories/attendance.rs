use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::models::{Attendance, AttendanceStatus};

#[derive(Clone)]
pub struct AttendanceRepository {
    pool: SqlitePool,
}

impl AttendanceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_for_day(&self, user_id: Uuid, date: NaiveDate) -> Result<Option<Attendance>> {
        let attendance = sqlx::query_as::<_, Attendance>(
            r#"
            SELECT
                id,
                user_id,
                date,
                clock_in,
                clock_out,
                status
            FROM
                attendance
            WHERE
                user_id = ?
                AND date = ?
            "#,
        )
        .bind(user_id)
        .bind(date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(attendance)
    }

    pub async fn clock_in(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        clock_in: DateTime<Utc>,
    ) -> Result<Attendance> {
        let attendance = sqlx::query_as::<_, Attendance>(
            r#"
            INSERT INTO
                attendance (id, user_id, date, clock_in, status)
            VALUES
                (?, ?, ?, ?, ?)
            RETURNING
                id,
                user_id,
                date,
                clock_in,
                clock_out,
                status
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(date)
        .bind(clock_in)
        .bind(AttendanceStatus::Present)
        .fetch_one(&self.pool)
        .await?;

        Ok(attendance)
    }

    pub async fn clock_out(&self, id: Uuid, clock_out: DateTime<Utc>) -> Result<Attendance> {
        let attendance = sqlx::query_as::<_, Attendance>(
            r#"
            UPDATE attendance
            SET
                clock_out = ?
            WHERE
                id = ?
            RETURNING
                id,
                user_id,
                date,
                clock_in,
                clock_out,
                status
            "#,
        )
        .bind(clock_out)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(attendance)
    }

    pub async fn get_history(&self, user_id: Uuid) -> Result<Vec<Attendance>> {
        let history = sqlx::query_as::<_, Attendance>(
            r#"
            SELECT
                id,
                user_id,
                date,
                clock_in,
                clock_out,
                status
            FROM
                attendance
            WHERE
                user_id = ?
            ORDER BY
                date DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(history)
    }

    pub async fn count_present_on(&self, date: NaiveDate) -> Result<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM attendance WHERE date = ? AND status = ?")
                .bind(date)
                .bind(AttendanceStatus::Present)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }
}
