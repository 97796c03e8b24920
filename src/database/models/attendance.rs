use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::macros::string_enum;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub clock_in: DateTime<Utc>,
    pub clock_out: Option<DateTime<Utc>>,
    pub status: AttendanceStatus,
}

string_enum! {
    #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
    pub enum AttendanceStatus {
        Present => "Present",
        Absent => "Absent",
        Leave => "Leave",
    }
}

/// Today's clock state for the caller
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceStatusResponse {
    pub clocked_in: bool,
    pub clock_in_time: Option<DateTime<Utc>>,
    pub clock_out_time: Option<DateTime<Utc>>,
}

impl From<Option<Attendance>> for AttendanceStatusResponse {
    fn from(record: Option<Attendance>) -> Self {
        match record {
            Some(attendance) => Self {
                clocked_in: true,
                clock_in_time: Some(attendance.clock_in),
                clock_out_time: attendance.clock_out,
            },
            None => Self {
                clocked_in: false,
                clock_in_time: None,
                clock_out_time: None,
            },
        }
    }
}
