use anyhow::Result;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::models::{User, UserRole};

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_user(&self, user: &User) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO
                users (
                    id,
                    name,
                    email,
                    password_hash,
                    role,
                    department,
                    created_at,
                    updated_at
                )
            VALUES
                (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING
                id,
                name,
                email,
                password_hash,
                role,
                department,
                created_at,
                updated_at
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role)
        .bind(&user.department)
        .bind(user.created_at)
        .bind(user.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT
                id,
                name,
                email,
                password_hash,
                role,
                department,
                created_at,
                updated_at
            FROM
                users
            WHERE
                email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT
                id,
                name,
                email,
                password_hash,
                role,
                department,
                created_at,
                updated_at
            FROM
                users
            WHERE
                id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn get_all_users(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT
                id,
                name,
                email,
                password_hash,
                role,
                department,
                created_at,
                updated_at
            FROM
                users
            ORDER BY
                created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    pub async fn get_users_by_role(&self, role: UserRole) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT
                id,
                name,
                email,
                password_hash,
                role,
                department,
                created_at,
                updated_at
            FROM
                users
            WHERE
                role = ?
            ORDER BY
                name ASC
            "#,
        )
        .bind(role)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    pub async fn count_by_role(&self, role: UserRole) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role = ?")
            .bind(role)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Persist name, email, role and department as currently held by `user`
    pub async fn update_user(&self, user: &User) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET
                name = ?,
                email = ?,
                role = ?,
                department = ?,
                updated_at = ?
            WHERE
                id = ?
            RETURNING
                id,
                name,
                email,
                password_hash,
                role,
                department,
                created_at,
                updated_at
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.role)
        .bind(&user.department)
        .bind(user.updated_at)
        .bind(user.id)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn update_profile(
        &self,
        id: Uuid,
        name: &str,
        password_hash: &str,
    ) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET
                name = ?,
                password_hash = ?,
                updated_at = ?
            WHERE
                id = ?
            RETURNING
                id,
                name,
                email,
                password_hash,
                role,
                department,
                created_at,
                updated_at
            "#,
        )
        .bind(name)
        .bind(password_hash)
        .bind(chrono::Utc::now())
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn delete_user(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind(email)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }
}
