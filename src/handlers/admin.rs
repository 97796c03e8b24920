use actix_web::{HttpResponse, Result, web};
use uuid::Uuid;

use crate::database::models::{
    AdminCreateUserInput, AdminDashboard, AdminStats, AuditAction, LeaveStatus, UpdateUserInput,
    User, UserInfo, UserRole,
};
use crate::database::repositories::{
    AuditLogRepository, LeaveRepository, PayrollRepository, SettingRepository, UserRepository,
};
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;
use crate::middleware::RequestInfo;
use crate::services::{AuditLogger, AuthService, UserContext};

const RECENT_LOG_LIMIT: i64 = 10;

pub async fn get_users(
    ctx: UserContext,
    user_repo: web::Data<UserRepository>,
) -> Result<HttpResponse> {
    ctx.requires_admin()?;

    let users = user_repo.get_all_users().await.map_err(|e| {
        log::error!("Failed to list users: {}", e);
        AppError::internal_server_error_message("Failed to list users")
    })?;

    Ok(ApiResponse::success(users))
}

pub async fn create_user(
    ctx: UserContext,
    auth_service: web::Data<AuthService>,
    audit_logger: web::Data<AuditLogger>,
    req_info: RequestInfo,
    request: web::Json<AdminCreateUserInput>,
) -> Result<HttpResponse> {
    ctx.requires_admin()?;

    let user = auth_service.create_user(request.into_inner()).await?;

    audit_logger
        .log_action(
            &ctx,
            AuditAction::USER_ADDED,
            format!("Added {} ({}) as {}", user.name, user.email, user.role),
            &req_info,
        )
        .await;

    Ok(ApiResponse::created(UserInfo::from(user)))
}

pub async fn update_user(
    ctx: UserContext,
    path: web::Path<Uuid>,
    user_repo: web::Data<UserRepository>,
    audit_logger: web::Data<AuditLogger>,
    req_info: RequestInfo,
    request: web::Json<UpdateUserInput>,
) -> Result<HttpResponse> {
    ctx.requires_admin()?;

    let user_id = path.into_inner();
    let mut user = find_user(&user_repo, user_id).await?;
    let input = request.into_inner();

    if let Some(email) = input.email.as_deref().map(str::trim) {
        let changed = !email.is_empty() && email != user.email;
        if changed && user_repo.email_exists(email).await.map_err(AppError::from)? {
            return Err(AppError::BadRequest("Email is already in use".to_string()).into());
        }
    }

    user.apply_update(input);
    let updated = user_repo.update_user(&user).await.map_err(AppError::from)?;

    audit_logger
        .log_action(
            &ctx,
            AuditAction::USER_UPDATED,
            format!("Updated {} ({})", updated.name, updated.role),
            &req_info,
        )
        .await;

    Ok(ApiResponse::success(UserInfo::from(updated)))
}

pub async fn delete_user(
    ctx: UserContext,
    path: web::Path<Uuid>,
    user_repo: web::Data<UserRepository>,
    audit_logger: web::Data<AuditLogger>,
    req_info: RequestInfo,
) -> Result<HttpResponse> {
    ctx.requires_admin()?;

    let user_id = path.into_inner();
    if user_id == ctx.user_id() {
        return Err(AppError::BadRequest("You cannot delete your own account".to_string()).into());
    }

    let user = find_user(&user_repo, user_id).await?;
    user_repo.delete_user(user.id).await.map_err(AppError::from)?;

    audit_logger
        .log_action(
            &ctx,
            AuditAction::USER_REMOVED,
            format!("Removed {} ({})", user.name, user.email),
            &req_info,
        )
        .await;

    Ok(ApiResponse::success_message("User removed"))
}

pub async fn get_dashboard(
    ctx: UserContext,
    user_repo: web::Data<UserRepository>,
    payroll_repo: web::Data<PayrollRepository>,
    leave_repo: web::Data<LeaveRepository>,
    setting_repo: web::Data<SettingRepository>,
    audit_repo: web::Data<AuditLogRepository>,
) -> Result<HttpResponse> {
    ctx.requires_admin()?;

    let stats = AdminStats {
        total_employees: user_repo
            .count_by_role(UserRole::Employee)
            .await
            .map_err(AppError::from)?,
        total_payroll: payroll_repo.total_net_pay().await.map_err(AppError::from)?,
        admins_count: user_repo
            .count_by_role(UserRole::Admin)
            .await
            .map_err(AppError::from)?,
    };

    let pending_leaves = leave_repo
        .count_by_status(LeaveStatus::Pending)
        .await
        .map_err(AppError::from)?;
    let settings = setting_repo.get().await.map_err(AppError::from)?;

    let mut alerts = Vec::new();
    if pending_leaves > 0 {
        alerts.push(format!("{} leave request(s) awaiting approval", pending_leaves));
    }
    if settings.maintenance_mode {
        alerts.push("Maintenance mode is enabled".to_string());
    }

    let logs = audit_repo
        .get_recent(RECENT_LOG_LIMIT)
        .await
        .map_err(AppError::from)?;

    Ok(ApiResponse::success(AdminDashboard {
        stats,
        alerts,
        logs,
    }))
}

async fn find_user(user_repo: &UserRepository, user_id: Uuid) -> Result<User, AppError> {
    user_repo
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}
