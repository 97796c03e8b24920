use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::macros::string_enum;
use super::user::OwnerSummary;

/// Leave type that the auto-approve setting applies to
pub const SICK_LEAVE: &str = "Sick Leave";

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Leave {
    pub id: Uuid,
    pub user_id: Uuid,
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
    pub applied_on: DateTime<Utc>,
}

string_enum! {
    #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
    pub enum LeaveStatus {
        Pending => "Pending",
        Approved => "Approved",
        Rejected => "Rejected",
    }
}

/// Application payload as submitted by an employee
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyLeaveInput {
    pub leave_type: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub reason: Option<String>,
}

/// Fully validated leave, ready to insert
#[derive(Debug, Clone)]
pub struct NewLeave {
    pub user_id: Uuid,
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
    pub applied_on: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DecideLeaveInput {
    pub status: Option<LeaveStatus>,
}

/// Pending leave together with a summary of its owner
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingLeave {
    #[serde(flatten)]
    pub leave: Leave,
    pub owner: Option<OwnerSummary>,
}

/// Row shape of the leave/owner join
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LeaveWithOwnerRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
    pub applied_on: DateTime<Utc>,
    pub owner_name: Option<String>,
    pub owner_email: Option<String>,
    pub owner_department: Option<String>,
}

impl From<LeaveWithOwnerRow> for PendingLeave {
    fn from(row: LeaveWithOwnerRow) -> Self {
        let owner = match (row.owner_name, row.owner_email) {
            (Some(name), Some(email)) => Some(OwnerSummary {
                id: row.user_id,
                name,
                email,
                department: row.owner_department,
            }),
            _ => None,
        };

        Self {
            leave: Leave {
                id: row.id,
                user_id: row.user_id,
                leave_type: row.leave_type,
                start_date: row.start_date,
                end_date: row.end_date,
                reason: row.reason,
                status: row.status,
                applied_on: row.applied_on,
            },
            owner,
        }
    }
}
