use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AuditLog {
    pub id: Uuid,
    pub action: String,
    pub details: Option<String>,
    pub performed_by: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateAuditLogInput {
    pub action: String,
    pub details: Option<String>,
    pub performed_by: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

// Action names shown on the admin dashboard
pub struct AuditAction;

impl AuditAction {
    pub const USER_ADDED: &str = "User Added";
    pub const USER_UPDATED: &str = "User Updated";
    pub const USER_REMOVED: &str = "User Removed";
    pub const PAYROLL_RUN: &str = "Payroll Run";
    pub const SETTINGS_UPDATED: &str = "Settings Updated";
    pub const LEAVE_APPROVED: &str = "Leave Approved";
    pub const LEAVE_REJECTED: &str = "Leave Rejected";
}
