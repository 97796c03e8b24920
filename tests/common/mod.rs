#![allow(dead_code)]

use actix_web::{
    App, Error,
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    http::header,
};
use anyhow::Result;
use fake::{Fake, faker::internet::en::SafeEmail, faker::name::en::Name};
use sqlx::SqlitePool;
use std::env;
use tempfile::TempDir;

use ems::database::init_database;
use ems::database::models::{Setting, SettingPatch, User, UserRole};
use ems::database::repositories::{SettingRepository, UserRepository};
use ems::middleware::RequestId;
use ems::{AppState, Config};

pub const TEST_PASSWORD: &str = "password123";

/// A fresh database in a temporary directory plus the state built on it
pub struct TestContext {
    pub pool: SqlitePool,
    pub config: Config,
    pub state: AppState,
    _temp_dir: TempDir,
}

impl TestContext {
    pub async fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let database_url = format!("sqlite:{}/test.db", temp_dir.path().display());

        let config = Config {
            database_url: database_url.clone(),
            ..Config::test_config()
        };

        let pool = init_database(&database_url).await?;
        let state = AppState::new(pool.clone(), config.clone());

        Ok(TestContext {
            pool,
            config,
            state,
            _temp_dir: temp_dir,
        })
    }

    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse<impl MessageBody + use<>>,
            Error = Error,
            InitError = (),
        > + use<>,
    > {
        let state = self.state.clone();
        App::new()
            .configure(move |cfg| state.configure(cfg))
            .wrap(RequestId)
    }

    /// Insert a user with the given role straight into the database and
    /// issue a token for it.
    pub async fn create_user(&self, role: UserRole) -> Result<(User, String)> {
        let email: String = SafeEmail().fake();
        self.create_user_with_email(role, &email).await
    }

    pub async fn create_user_with_email(
        &self,
        role: UserRole,
        email: &str,
    ) -> Result<(User, String)> {
        let name: String = Name().fake();
        let password_hash = bcrypt::hash(TEST_PASSWORD, self.config.bcrypt_cost)?;
        let user = User::new(
            name,
            email.to_string(),
            password_hash,
            role,
            Some("Engineering".to_string()),
        );

        let user = UserRepository::new(self.pool.clone())
            .create_user(&user)
            .await?;
        let token = self.state.auth_service.generate_token(&user)?;

        Ok((user, token))
    }

    pub async fn update_settings(&self, patch: SettingPatch) -> Result<Setting> {
        SettingRepository::new(self.pool.clone()).update(patch).await
    }

    pub async fn count_rows(&self, table: &str) -> i64 {
        let query = format!("SELECT COUNT(*) FROM {}", table);
        sqlx::query_scalar::<_, i64>(&query)
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count records")
    }
}

pub fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token))
}

pub fn setup_test_env() {
    unsafe {
        env::set_var("RUST_LOG", "debug");
    }
    let _ = env_logger::builder().is_test(true).try_init();
}
