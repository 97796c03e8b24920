use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::models::{AuditLog, CreateAuditLogInput};

#[derive(Clone)]
pub struct AuditLogRepository {
    pool: SqlitePool,
}

impl AuditLogRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn log_action(&self, input: CreateAuditLogInput) -> Result<AuditLog> {
        let audit_log = sqlx::query_as::<_, AuditLog>(
            r#"
            INSERT INTO
                audit_logs (
                    id,
                    action,
                    details,
                    performed_by,
                    ip_address,
                    user_agent,
                    created_at
                )
            VALUES
                (?, ?, ?, ?, ?, ?, ?)
            RETURNING
                id,
                action,
                details,
                performed_by,
                ip_address,
                user_agent,
                created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(input.action)
        .bind(input.details)
        .bind(input.performed_by)
        .bind(input.ip_address)
        .bind(input.user_agent)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(audit_log)
    }

    pub async fn get_recent(&self, limit: i64) -> Result<Vec<AuditLog>> {
        let logs = sqlx::query_as::<_, AuditLog>(
            r#"
            SELECT
                id,
                action,
                details,
                performed_by,
                ip_address,
                user_agent,
                created_at
            FROM
                audit_logs
            ORDER BY
                created_at DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(logs)
    }
}
