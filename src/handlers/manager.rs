use actix_web::{HttpResponse, Result, web};
use chrono::Utc;

use crate::database::models::{LeaveStatus, ManagerDashboardStats, UserRole};
use crate::database::repositories::{AttendanceRepository, LeaveRepository, UserRepository};
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;
use crate::services::UserContext;

/// Headcounts for the manager dashboard. "On leave" counts every approved
/// leave, not only those covering today.
pub async fn get_dashboard_stats(
    ctx: UserContext,
    user_repo: web::Data<UserRepository>,
    attendance_repo: web::Data<AttendanceRepository>,
    leave_repo: web::Data<LeaveRepository>,
) -> Result<HttpResponse> {
    ctx.requires_manager()?;

    let today = Utc::now().date_naive();

    let stats = ManagerDashboardStats {
        total_employees: user_repo
            .count_by_role(UserRole::Employee)
            .await
            .map_err(AppError::from)?,
        present_today: attendance_repo
            .count_present_on(today)
            .await
            .map_err(AppError::from)?,
        pending_leaves: leave_repo
            .count_by_status(LeaveStatus::Pending)
            .await
            .map_err(AppError::from)?,
        on_leave: leave_repo
            .count_by_status(LeaveStatus::Approved)
            .await
            .map_err(AppError::from)?,
    };

    Ok(ApiResponse::success(stats))
}

pub async fn get_employees(
    ctx: UserContext,
    user_repo: web::Data<UserRepository>,
) -> Result<HttpResponse> {
    ctx.requires_manager()?;

    let employees = user_repo
        .get_users_by_role(UserRole::Employee)
        .await
        .map_err(AppError::from)?;

    Ok(ApiResponse::success(employees))
}
