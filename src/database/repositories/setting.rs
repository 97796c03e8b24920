use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::database::models::{Setting, SettingPatch};

/// Key of the one settings row
const SINGLETON_ID: i64 = 1;

#[derive(Clone)]
pub struct SettingRepository {
    pool: SqlitePool,
}

impl SettingRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Return the settings record, creating it with defaults on first access
    pub async fn get(&self) -> Result<Setting> {
        let now = Utc::now();

        // Column defaults carry the initial values; the fixed key makes a
        // repeated or concurrent first read a no-op.
        sqlx::query(
            r#"
            INSERT OR IGNORE INTO
                settings (id, created_at, updated_at)
            VALUES
                (?, ?, ?)
            "#,
        )
        .bind(SINGLETON_ID)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        let setting = sqlx::query_as::<_, Setting>(
            r#"
            SELECT
                company_name,
                contact_email,
                address,
                allow_remote_clock_in,
                dark_mode,
                auto_approve_leave,
                maintenance_mode,
                created_at,
                updated_at
            FROM
                settings
            WHERE
                id = ?
            "#,
        )
        .bind(SINGLETON_ID)
        .fetch_one(&self.pool)
        .await?;

        Ok(setting)
    }

    /// Merge `patch` onto the stored record and persist the result
    pub async fn update(&self, patch: SettingPatch) -> Result<Setting> {
        let mut setting = self.get().await?;
        setting.merge(patch);

        let setting = sqlx::query_as::<_, Setting>(
            r#"
            UPDATE settings
            SET
                company_name = ?,
                contact_email = ?,
                address = ?,
                allow_remote_clock_in = ?,
                dark_mode = ?,
                auto_approve_leave = ?,
                maintenance_mode = ?,
                updated_at = ?
            WHERE
                id = ?
            RETURNING
                company_name,
                contact_email,
                address,
                allow_remote_clock_in,
                dark_mode,
                auto_approve_leave,
                maintenance_mode,
                created_at,
                updated_at
            "#,
        )
        .bind(&setting.company_name)
        .bind(&setting.contact_email)
        .bind(&setting.address)
        .bind(setting.allow_remote_clock_in)
        .bind(setting.dark_mode)
        .bind(setting.auto_approve_leave)
        .bind(setting.maintenance_mode)
        .bind(setting.updated_at)
        .bind(SINGLETON_ID)
        .fetch_one(&self.pool)
        .await?;

        Ok(setting)
    }
}
