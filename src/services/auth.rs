use anyhow::{Result, anyhow};
use bcrypt::{hash, verify};
use chrono::{TimeDelta, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::Config;
use crate::database::models::{
    AdminCreateUserInput, AuthResponse, CreateUserInput, LoginInput, UpdateProfileInput, User,
    UserRole, non_empty,
};
use crate::database::repositories::{SettingRepository, UserRepository};
use crate::error::AppError;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid, // user id
    pub email: String,
    pub role: UserRole,
    pub exp: usize, // expiration time
}

#[derive(Clone)]
pub struct AuthService {
    user_repository: UserRepository,
    setting_repository: SettingRepository,
    config: Config,
}

impl AuthService {
    pub fn new(
        config: Config,
        user_repository: UserRepository,
        setting_repository: SettingRepository,
    ) -> Self {
        Self {
            user_repository,
            setting_repository,
            config,
        }
    }

    /// Public signup. Always creates an employee account.
    pub async fn register(&self, request: CreateUserInput) -> Result<AuthResponse, AppError> {
        let (Some(name), Some(email), Some(password)) = (
            non_empty(request.name),
            non_empty(request.email),
            non_empty(request.password),
        ) else {
            return Err(AppError::BadRequest("Please add all fields".to_string()));
        };

        let user = self
            .create_account(
                name,
                email,
                &password,
                UserRole::Employee,
                non_empty(request.department),
            )
            .await?;

        let token = self.generate_token(&user)?;

        Ok(AuthResponse {
            token,
            user: user.into(),
        })
    }

    /// Admin onboarding; the role defaults to employee
    pub async fn create_user(&self, request: AdminCreateUserInput) -> Result<User, AppError> {
        let (Some(name), Some(email), Some(password)) = (
            non_empty(request.name),
            non_empty(request.email),
            non_empty(request.password),
        ) else {
            return Err(AppError::BadRequest("Please add all fields".to_string()));
        };

        self.create_account(
            name,
            email,
            &password,
            request.role.unwrap_or_default(),
            non_empty(request.department),
        )
        .await
    }

    async fn create_account(
        &self,
        name: String,
        email: String,
        password: &str,
        role: UserRole,
        department: Option<String>,
    ) -> Result<User, AppError> {
        if self.user_repository.email_exists(&email).await? {
            return Err(AppError::BadRequest("User already exists".to_string()));
        }

        let password_hash = self.hash_password(password)?;
        let user = User::new(name, email, password_hash, role, department);

        Ok(self.user_repository.create_user(&user).await?)
    }

    pub async fn login(&self, request: LoginInput) -> Result<AuthResponse, AppError> {
        let email = non_empty(request.email).unwrap_or_default();
        let password = request.password.unwrap_or_default();

        let settings = self.setting_repository.get().await?;
        let user = self.user_repository.find_by_email(&email).await?;

        // Unknown accounts are held back too, so maintenance does not reveal
        // which emails exist
        if settings.maintenance_mode
            && user.as_ref().map(|u| u.role) != Some(UserRole::Admin)
        {
            return Err(AppError::ServiceUnavailable(
                "System is under maintenance. Please try again later.".to_string(),
            ));
        }

        let Some(user) = user else {
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        };
        if !self.verify_password(&password, &user.password_hash)? {
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        let token = self.generate_token(&user)?;

        Ok(AuthResponse {
            token,
            user: user.into(),
        })
    }

    /// Change the caller's name and/or password and issue a fresh token
    pub async fn update_profile(
        &self,
        user: &User,
        request: UpdateProfileInput,
    ) -> Result<AuthResponse, AppError> {
        let name = non_empty(request.name).unwrap_or_else(|| user.name.clone());
        let password_hash = match non_empty(request.password) {
            Some(password) => self.hash_password(&password)?,
            None => user.password_hash.clone(),
        };

        let updated = self
            .user_repository
            .update_profile(user.id, &name, &password_hash)
            .await?;
        let token = self.generate_token(&updated)?;

        Ok(AuthResponse {
            token,
            user: updated.into(),
        })
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret.as_ref()),
            &Validation::new(Algorithm::HS256),
        )?;

        Ok(token_data.claims)
    }

    pub fn generate_token(&self, user: &User) -> Result<String> {
        let lifetime = TimeDelta::try_days(self.config.jwt_expiration_days)
            .filter(|lifetime| *lifetime > TimeDelta::zero())
            .ok_or_else(|| anyhow!("Token lifetime out of range"))?;
        let expiration = Utc::now()
            .checked_add_signed(lifetime)
            .ok_or_else(|| anyhow!("Token expiry out of range"))?
            .timestamp() as usize;

        let claims = Claims {
            sub: user.id,
            email: user.email.clone(),
            role: user.role,
            exp: expiration,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_ref()),
        )?;

        Ok(token)
    }

    fn hash_password(&self, password: &str) -> Result<String> {
        Ok(hash(password, self.config.bcrypt_cost)?)
    }

    fn verify_password(&self, password: &str, password_hash: &str) -> Result<bool> {
        Ok(verify(password, password_hash)?)
    }
}
