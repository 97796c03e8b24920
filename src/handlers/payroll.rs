use actix_web::{HttpResponse, Result, web};

use crate::database::models::{AuditAction, CreatePayrollInput, Payroll, non_empty};
use crate::database::repositories::{PayrollRepository, UserRepository};
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;
use crate::middleware::RequestInfo;
use crate::services::{AuditLogger, UserContext};

pub async fn get_my_payroll(
    ctx: UserContext,
    payroll_repo: web::Data<PayrollRepository>,
) -> Result<HttpResponse> {
    let payrolls = payroll_repo
        .get_payrolls_for_user(ctx.user_id())
        .await
        .map_err(AppError::from)?;

    Ok(ApiResponse::success(payrolls))
}

pub async fn get_all_payroll(
    ctx: UserContext,
    payroll_repo: web::Data<PayrollRepository>,
) -> Result<HttpResponse> {
    ctx.requires_admin()?;

    let payrolls = payroll_repo.get_all_payrolls().await.map_err(|e| {
        log::error!("Failed to list payroll records: {}", e);
        AppError::from(e)
    })?;

    Ok(ApiResponse::success(payrolls))
}

/// Record one month's pay for an employee; net pay is computed here and
/// never taken from the request.
pub async fn create_payroll(
    ctx: UserContext,
    payroll_repo: web::Data<PayrollRepository>,
    user_repo: web::Data<UserRepository>,
    audit_logger: web::Data<AuditLogger>,
    req_info: RequestInfo,
    input: web::Json<CreatePayrollInput>,
) -> Result<HttpResponse> {
    ctx.requires_admin()?;

    let input = input.into_inner();
    let (Some(user_id), Some(month), Some(basic_salary)) =
        (input.user_id, non_empty(input.month), input.basic_salary)
    else {
        return Err(AppError::BadRequest(
            "User, month and basic salary are required".to_string(),
        )
        .into());
    };

    let employee = user_repo
        .find_by_id(user_id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let payroll = Payroll::new(
        employee.id,
        month,
        basic_salary,
        input.allowances.unwrap_or_default(),
        input.deductions.unwrap_or_default(),
        input.increment.unwrap_or_default(),
    );
    let payroll = payroll_repo
        .create_payroll(&payroll)
        .await
        .map_err(AppError::from)?;

    audit_logger
        .log_action(
            &ctx,
            AuditAction::PAYROLL_RUN,
            format!(
                "Paid {} for {}: net {:.2}",
                employee.name, payroll.month, payroll.net_pay
            ),
            &req_info,
        )
        .await;

    Ok(ApiResponse::created(payroll))
}
