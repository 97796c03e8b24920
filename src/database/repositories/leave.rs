use anyhow::Result;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::models::{Leave, LeaveStatus, LeaveWithOwnerRow, NewLeave, PendingLeave};

#[derive(Clone)]
pub struct LeaveRepository {
    pool: SqlitePool,
}

impl LeaveRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_leave(&self, input: NewLeave) -> Result<Leave> {
        let leave = sqlx::query_as::<_, Leave>(
            r#"
            INSERT INTO
                leaves (
                    id,
                    user_id,
                    leave_type,
                    start_date,
                    end_date,
                    reason,
                    status,
                    applied_on
                )
            VALUES
                (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING
                id,
                user_id,
                leave_type,
                start_date,
                end_date,
                reason,
                status,
                applied_on
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(input.user_id)
        .bind(input.leave_type)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(input.reason)
        .bind(input.status)
        .bind(input.applied_on)
        .fetch_one(&self.pool)
        .await?;

        Ok(leave)
    }

    /// Leaves owned by `user_id`, newest application first
    pub async fn get_leaves_for_user(&self, user_id: Uuid) -> Result<Vec<Leave>> {
        let leaves = sqlx::query_as::<_, Leave>(
            r#"
            SELECT
                id,
                user_id,
                leave_type,
                start_date,
                end_date,
                reason,
                status,
                applied_on
            FROM
                leaves
            WHERE
                user_id = ?
            ORDER BY
                applied_on DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(leaves)
    }

    /// Pending leaves with their owner's summary, newest application first
    pub async fn get_pending_leaves(&self) -> Result<Vec<PendingLeave>> {
        let rows = sqlx::query_as::<_, LeaveWithOwnerRow>(
            r#"
            SELECT
                l.id,
                l.user_id,
                l.leave_type,
                l.start_date,
                l.end_date,
                l.reason,
                l.status,
                l.applied_on,
                u.name AS owner_name,
                u.email AS owner_email,
                u.department AS owner_department
            FROM
                leaves l
                LEFT JOIN users u ON u.id = l.user_id
            WHERE
                l.status = ?
            ORDER BY
                l.applied_on DESC
            "#,
        )
        .bind(LeaveStatus::Pending)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PendingLeave::from).collect())
    }

    /// Overwrite the status. Returns `None` when the id does not resolve.
    pub async fn update_status(&self, id: Uuid, status: LeaveStatus) -> Result<Option<Leave>> {
        let leave = sqlx::query_as::<_, Leave>(
            r#"
            UPDATE leaves
            SET
                status = ?
            WHERE
                id = ?
            RETURNING
                id,
                user_id,
                leave_type,
                start_date,
                end_date,
                reason,
                status,
                applied_on
            "#,
        )
        .bind(status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(leave)
    }

    pub async fn count_by_status(&self, status: LeaveStatus) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM leaves WHERE status = ?")
            .bind(status)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
