use serde::{Deserialize, Serialize};

use super::user::UserInfo;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Token plus the account fields, flattened into one object.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    /// JWT authentication token
    pub token: String,
    #[serde(flatten)]
    pub user: UserInfo,
}
