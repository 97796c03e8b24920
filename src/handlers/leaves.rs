use actix_web::{HttpResponse, Result, web};
use uuid::Uuid;

use crate::database::models::{ApplyLeaveInput, DecideLeaveInput};
use crate::database::repositories::SettingRepository;
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;
use crate::middleware::RequestInfo;
use crate::services::{AuditLogger, LeaveService, UserContext};

/// Apply for leave as the caller. The initial status depends on the
/// settings at the time of the request.
pub async fn apply_leave(
    ctx: UserContext,
    leave_service: web::Data<LeaveService>,
    setting_repo: web::Data<SettingRepository>,
    input: web::Json<ApplyLeaveInput>,
) -> Result<HttpResponse> {
    let settings = setting_repo.get().await.map_err(AppError::from)?;

    let leave = leave_service
        .apply(&settings, ctx.user_id(), input.into_inner())
        .await?;

    Ok(ApiResponse::created(leave))
}

pub async fn get_my_leaves(
    ctx: UserContext,
    leave_service: web::Data<LeaveService>,
) -> Result<HttpResponse> {
    let leaves = leave_service.list_mine(ctx.user_id()).await?;

    Ok(ApiResponse::success(leaves))
}

pub async fn get_pending_leaves(
    ctx: UserContext,
    leave_service: web::Data<LeaveService>,
) -> Result<HttpResponse> {
    ctx.requires_manager()?;

    let leaves = leave_service.list_pending().await?;

    Ok(ApiResponse::success(leaves))
}

pub async fn update_leave_status(
    ctx: UserContext,
    path: web::Path<Uuid>,
    leave_service: web::Data<LeaveService>,
    audit_logger: web::Data<AuditLogger>,
    req_info: RequestInfo,
    input: web::Json<DecideLeaveInput>,
) -> Result<HttpResponse> {
    ctx.requires_manager()?;

    let leave = leave_service
        .decide(path.into_inner(), input.into_inner().status)
        .await?;

    audit_logger
        .log_leave_decision(&ctx, leave.id, leave.status, &req_info)
        .await;

    Ok(ApiResponse::success(leave))
}
