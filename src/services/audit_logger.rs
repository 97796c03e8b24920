use crate::database::models::{AuditAction, AuditLog, CreateAuditLogInput, LeaveStatus};
use crate::database::repositories::AuditLogRepository;
use crate::middleware::RequestInfo;
use crate::services::user_context::UserContext;

/// Writes the audit trail shown on the admin dashboard. The entry is written
/// separately from the change it describes; a failed write is logged and
/// never fails the request.
#[derive(Clone)]
pub struct AuditLogger {
    repository: AuditLogRepository,
}

impl AuditLogger {
    pub fn new(repository: AuditLogRepository) -> Self {
        Self { repository }
    }

    pub async fn log_action(
        &self,
        actor: &UserContext,
        action: &str,
        details: String,
        req_info: &RequestInfo,
    ) -> Option<AuditLog> {
        let input = CreateAuditLogInput {
            action: action.to_string(),
            details: Some(details),
            performed_by: actor.user.name.clone(),
            ip_address: Some(req_info.ip_address.clone()),
            user_agent: Some(req_info.user_agent.clone()),
        };

        match self.repository.log_action(input).await {
            Ok(entry) => Some(entry),
            Err(err) => {
                log::error!(
                    "Failed to record audit entry '{}' (correlation_id={:?}): {}",
                    action,
                    req_info.correlation_id,
                    err
                );
                None
            }
        }
    }

    pub async fn log_leave_decision(
        &self,
        actor: &UserContext,
        leave_id: uuid::Uuid,
        status: LeaveStatus,
        req_info: &RequestInfo,
    ) -> Option<AuditLog> {
        let action = match status {
            LeaveStatus::Rejected => AuditAction::LEAVE_REJECTED,
            _ => AuditAction::LEAVE_APPROVED,
        };

        self.log_action(
            actor,
            action,
            format!("Leave {} marked {}", leave_id, status),
            req_info,
        )
        .await
    }
}
