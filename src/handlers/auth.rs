use actix_web::{HttpResponse, Result, web};

use crate::database::models::{CreateUserInput, LoginInput, UpdateProfileInput, UserInfo};
use crate::handlers::shared::ApiResponse;
use crate::services::{AuthService, UserContext};

pub async fn register(
    auth_service: web::Data<AuthService>,
    request: web::Json<CreateUserInput>,
) -> Result<HttpResponse> {
    let response = auth_service.register(request.into_inner()).await?;

    log::info!("Registered user {}", response.user.email);

    Ok(ApiResponse::created(response))
}

pub async fn login(
    auth_service: web::Data<AuthService>,
    request: web::Json<LoginInput>,
) -> Result<HttpResponse> {
    let response = auth_service.login(request.into_inner()).await?;

    Ok(ApiResponse::success(response))
}

/// Echo back who the bearer token belongs to
pub async fn verify(ctx: UserContext) -> Result<HttpResponse> {
    Ok(ApiResponse::success(UserInfo::from(ctx.user)))
}

pub async fn update_profile(
    ctx: UserContext,
    auth_service: web::Data<AuthService>,
    request: web::Json<UpdateProfileInput>,
) -> Result<HttpResponse> {
    let response = auth_service
        .update_profile(&ctx.user, request.into_inner())
        .await?;

    Ok(ApiResponse::success(response))
}
