use serde::{Deserialize, Serialize};

use super::audit_log::AuditLog;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ManagerDashboardStats {
    pub total_employees: i64,
    pub present_today: i64,
    pub pending_leaves: i64,
    pub on_leave: i64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_employees: i64,
    pub total_payroll: f64,
    pub admins_count: i64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    pub stats: AdminStats,
    pub alerts: Vec<String>,
    pub logs: Vec<AuditLog>,
}
