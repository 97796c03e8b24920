use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::database::models::{
    ApplyLeaveInput, Leave, LeaveStatus, NewLeave, PendingLeave, SICK_LEAVE, Setting, non_empty,
};
use crate::database::repositories::LeaveRepository;
use crate::error::AppError;

/// Status a new application starts in. Evaluated once, at creation.
pub fn initial_status(settings: &Setting, leave_type: &str) -> LeaveStatus {
    if settings.auto_approve_leave && leave_type == SICK_LEAVE {
        LeaveStatus::Approved
    } else {
        LeaveStatus::Pending
    }
}

/// Check an application and turn it into an insertable record
pub fn prepare_application(
    settings: &Setting,
    owner_id: Uuid,
    input: ApplyLeaveInput,
    applied_on: DateTime<Utc>,
) -> Result<NewLeave, AppError> {
    let (Some(leave_type), Some(start_date), Some(end_date), Some(reason)) = (
        non_empty(input.leave_type),
        input.start_date,
        input.end_date,
        non_empty(input.reason),
    ) else {
        return Err(AppError::BadRequest("All fields are required".to_string()));
    };

    if end_date < start_date {
        return Err(AppError::BadRequest(
            "End date cannot be before start date".to_string(),
        ));
    }

    let status = initial_status(settings, &leave_type);

    Ok(NewLeave {
        user_id: owner_id,
        leave_type,
        start_date,
        end_date,
        reason,
        status,
        applied_on,
    })
}

#[derive(Clone)]
pub struct LeaveService {
    leave_repository: LeaveRepository,
}

impl LeaveService {
    pub fn new(leave_repository: LeaveRepository) -> Self {
        Self { leave_repository }
    }

    /// Settings are handed in by the caller rather than read here
    pub async fn apply(
        &self,
        settings: &Setting,
        owner_id: Uuid,
        input: ApplyLeaveInput,
    ) -> Result<Leave, AppError> {
        let new_leave = prepare_application(settings, owner_id, input, Utc::now())?;
        let leave = self.leave_repository.create_leave(new_leave).await?;

        log::info!(
            "Leave {} ({}) applied by {} with status {}",
            leave.id,
            leave.leave_type,
            owner_id,
            leave.status
        );

        Ok(leave)
    }

    pub async fn list_mine(&self, owner_id: Uuid) -> Result<Vec<Leave>, AppError> {
        Ok(self.leave_repository.get_leaves_for_user(owner_id).await?)
    }

    pub async fn list_pending(&self) -> Result<Vec<PendingLeave>, AppError> {
        Ok(self.leave_repository.get_pending_leaves().await?)
    }

    /// Record a decision. A leave that was already decided can be decided
    /// again; the latest decision wins.
    pub async fn decide(
        &self,
        leave_id: Uuid,
        status: Option<LeaveStatus>,
    ) -> Result<Leave, AppError> {
        let status = match status {
            Some(status @ (LeaveStatus::Approved | LeaveStatus::Rejected)) => status,
            _ => {
                return Err(AppError::BadRequest(
                    "Status must be Approved or Rejected".to_string(),
                ));
            }
        };

        self.leave_repository
            .update_status(leave_id, status)
            .await?
            .ok_or_else(|| AppError::NotFound("Leave not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn settings(auto_approve_leave: bool) -> Setting {
        Setting {
            auto_approve_leave,
            ..Default::default()
        }
    }

    fn application(leave_type: &str) -> ApplyLeaveInput {
        ApplyLeaveInput {
            leave_type: Some(leave_type.to_string()),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 10),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 12),
            reason: Some("trip".to_string()),
        }
    }

    #[test]
    fn test_default_settings_keep_every_type_pending() {
        for leave_type in [SICK_LEAVE, "Casual Leave", "Annual Vacation", "Remote Work"] {
            assert_eq!(initial_status(&settings(false), leave_type), LeaveStatus::Pending);
        }
    }

    #[test]
    fn test_auto_approve_only_applies_to_sick_leave() {
        assert_eq!(initial_status(&settings(true), SICK_LEAVE), LeaveStatus::Approved);
        assert_eq!(initial_status(&settings(true), "Casual Leave"), LeaveStatus::Pending);
        assert_eq!(initial_status(&settings(true), "sick leave"), LeaveStatus::Pending);
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let mut input = application("Annual Vacation");
        input.reason = None;

        let result = prepare_application(&settings(false), Uuid::new_v4(), input, Utc::now());

        match result {
            Err(AppError::BadRequest(message)) => assert_eq!(message, "All fields are required"),
            other => panic!("expected validation error, got {:?}", other.map(|l| l.status)),
        }
    }

    #[test]
    fn test_reversed_dates_are_rejected() {
        let mut input = application("Annual Vacation");
        input.end_date = NaiveDate::from_ymd_opt(2025, 1, 9);

        let result = prepare_application(&settings(false), Uuid::new_v4(), input, Utc::now());

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_prepared_application_is_owned_by_caller() {
        let owner = Uuid::new_v4();
        let now = Utc::now();

        let leave =
            prepare_application(&settings(true), owner, application(SICK_LEAVE), now).unwrap();

        assert_eq!(leave.user_id, owner);
        assert_eq!(leave.status, LeaveStatus::Approved);
        assert_eq!(leave.applied_on, now);
        assert_eq!(leave.reason, "trip");
    }
}
