use actix_web::{HttpResponse, Result, web};

use crate::database::models::{AuditAction, SettingPatch};
use crate::database::repositories::SettingRepository;
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;
use crate::middleware::RequestInfo;
use crate::services::{AuditLogger, UserContext};

pub async fn get_settings(
    _ctx: UserContext,
    setting_repo: web::Data<SettingRepository>,
) -> Result<HttpResponse> {
    let settings = setting_repo.get().await.map_err(AppError::from)?;

    Ok(ApiResponse::success(settings))
}

pub async fn update_settings(
    ctx: UserContext,
    setting_repo: web::Data<SettingRepository>,
    audit_logger: web::Data<AuditLogger>,
    req_info: RequestInfo,
    patch: web::Json<SettingPatch>,
) -> Result<HttpResponse> {
    ctx.requires_admin()?;

    let settings = setting_repo
        .update(patch.into_inner())
        .await
        .map_err(AppError::from)?;

    audit_logger
        .log_action(
            &ctx,
            AuditAction::SETTINGS_UPDATED,
            format!(
                "Maintenance {}, auto-approve sick leave {}",
                on_off(settings.maintenance_mode),
                on_off(settings.auto_approve_leave)
            ),
            &req_info,
        )
        .await;

    Ok(ApiResponse::success(settings))
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}
