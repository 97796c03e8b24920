use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::macros::string_enum;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: UserRole,
    pub department: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

string_enum! {
    #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
    #[serde(rename_all = "lowercase")]
    pub enum UserRole {
        #[default]
        Employee => "employee",
        Manager => "manager",
        Admin => "admin",
    }
}

/// Public signup payload. Fields are optional so that a missing one becomes
/// a validation message instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub department: Option<String>,
}

/// Admin onboarding payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCreateUserInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<UserRole>,
    pub department: Option<String>,
}

/// Admin edit payload; absent fields keep their stored value
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
    pub department: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileInput {
    pub name: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub department: Option<String>,
}

/// Owner fields attached to records listed for managers and admins.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OwnerSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub department: Option<String>,
}

impl User {
    pub fn new(
        name: String,
        email: String,
        password_hash: String,
        role: UserRole,
        department: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            role,
            department,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply an admin edit. Empty strings count as absent.
    pub fn apply_update(&mut self, input: UpdateUserInput) {
        if let Some(name) = non_empty(input.name) {
            self.name = name;
        }
        if let Some(email) = non_empty(input.email) {
            self.email = email;
        }
        if let Some(role) = input.role {
            self.role = role;
        }
        if let Some(department) = non_empty(input.department) {
            self.department = Some(department);
        }
        self.updated_at = Utc::now();
    }
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            department: user.department,
        }
    }
}

/// Trim a submitted string and drop it if nothing is left
pub fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_user() -> User {
        User::new(
            "Jane Doe".to_string(),
            "jane@example.com".to_string(),
            "hash".to_string(),
            UserRole::Employee,
            Some("Engineering".to_string()),
        )
    }

    #[test]
    fn test_apply_update_keeps_absent_fields() {
        let mut user = sample_user();

        user.apply_update(UpdateUserInput {
            role: Some(UserRole::Manager),
            name: Some("   ".to_string()),
            ..Default::default()
        });

        assert_eq!(user.name, "Jane Doe");
        assert_eq!(user.email, "jane@example.com");
        assert_eq!(user.role, UserRole::Manager);
        assert_eq!(user.department.as_deref(), Some("Engineering"));
    }

    #[test]
    fn test_role_parsing_is_case_insensitive() {
        assert_eq!("ADMIN".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert!("owner".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_password_hash_is_never_serialized() {
        let json = serde_json::to_value(sample_user()).unwrap();

        assert!(json.get("passwordHash").is_none());
        assert_eq!(json["role"], "employee");
    }
}
