use actix_web::{HttpResponse, Result, web};
use chrono::Utc;

use crate::database::models::AttendanceStatusResponse;
use crate::database::repositories::AttendanceRepository;
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;
use crate::services::UserContext;

const ALREADY_CLOCKED_IN: &str = "You have already clocked in today.";

pub async fn get_status(
    ctx: UserContext,
    attendance_repo: web::Data<AttendanceRepository>,
) -> Result<HttpResponse> {
    let today = Utc::now().date_naive();
    let record = attendance_repo
        .find_for_day(ctx.user_id(), today)
        .await
        .map_err(AppError::from)?;

    Ok(ApiResponse::success(AttendanceStatusResponse::from(record)))
}

pub async fn clock_in(
    ctx: UserContext,
    attendance_repo: web::Data<AttendanceRepository>,
) -> Result<HttpResponse> {
    let now = Utc::now();
    let today = now.date_naive();

    let existing = attendance_repo
        .find_for_day(ctx.user_id(), today)
        .await
        .map_err(AppError::from)?;
    if existing.is_some() {
        return Err(AppError::BadRequest(ALREADY_CLOCKED_IN.to_string()).into());
    }

    // A concurrent clock-in can still hit the (user, date) unique index
    let attendance = match attendance_repo.clock_in(ctx.user_id(), today, now).await {
        Ok(attendance) => attendance,
        Err(e) if is_unique_violation(&e) => {
            return Err(AppError::BadRequest(ALREADY_CLOCKED_IN.to_string()).into());
        }
        Err(e) => return Err(AppError::from(e).into()),
    };

    log::info!("User {} clocked in for {}", ctx.user_id(), today);

    Ok(ApiResponse::created(attendance))
}

pub async fn clock_out(
    ctx: UserContext,
    attendance_repo: web::Data<AttendanceRepository>,
) -> Result<HttpResponse> {
    let now = Utc::now();

    let record = attendance_repo
        .find_for_day(ctx.user_id(), now.date_naive())
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::BadRequest("You have not clocked in yet.".to_string()))?;

    if record.clock_out.is_some() {
        return Err(AppError::BadRequest("You have already clocked out today.".to_string()).into());
    }

    let attendance = attendance_repo
        .clock_out(record.id, now)
        .await
        .map_err(AppError::from)?;

    Ok(ApiResponse::success(attendance))
}

pub async fn get_history(
    ctx: UserContext,
    attendance_repo: web::Data<AttendanceRepository>,
) -> Result<HttpResponse> {
    let history = attendance_repo
        .get_history(ctx.user_id())
        .await
        .map_err(AppError::from)?;

    Ok(ApiResponse::success(history))
}

fn is_unique_violation(error: &anyhow::Error) -> bool {
    error
        .downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .is_some_and(|e| e.is_unique_violation())
}
