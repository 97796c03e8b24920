use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web::Data};
use futures_util::future::LocalBoxFuture;
use uuid::Uuid;

use crate::database::models::{User, UserRole};
use crate::database::repositories::UserRepository;
use crate::error::AppError;
use crate::services::auth::AuthService;

/// Role sets declared by handlers
pub const MANAGEMENT: &[UserRole] = &[UserRole::Manager, UserRole::Admin];
pub const ADMIN_ONLY: &[UserRole] = &[UserRole::Admin];

/// The one role check every handler goes through. An empty allow-list means
/// the route has no role restriction.
pub fn authorize(allowed: &[UserRole], actual: UserRole) -> bool {
    allowed.is_empty() || allowed.contains(&actual)
}

/// The authenticated caller, resolved from the bearer token to a stored user.
/// Taking it as a handler argument makes the route require authentication.
#[derive(Debug, Clone)]
pub struct UserContext {
    pub user: User,
}

impl UserContext {
    pub fn user_id(&self) -> Uuid {
        self.user.id
    }

    pub fn role(&self) -> UserRole {
        self.user.role
    }

    pub fn require_roles(&self, allowed: &[UserRole]) -> Result<(), AppError> {
        if authorize(allowed, self.role()) {
            Ok(())
        } else {
            log::warn!(
                "User {} with role {} denied; requires one of {:?}",
                self.user_id(),
                self.role(),
                allowed
            );
            Err(AppError::Forbidden(format!(
                "Not authorized as {}",
                describe_roles(allowed)
            )))
        }
    }

    pub fn requires_admin(&self) -> Result<(), AppError> {
        self.require_roles(ADMIN_ONLY)
    }

    pub fn requires_manager(&self) -> Result<(), AppError> {
        self.require_roles(MANAGEMENT)
    }
}

fn describe_roles(allowed: &[UserRole]) -> String {
    allowed
        .iter()
        .map(|role| match role {
            UserRole::Manager => format!("a {}", role),
            _ => format!("an {}", role),
        })
        .collect::<Vec<_>>()
        .join(" or ")
}

fn bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

impl FromRequest for UserContext {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token = bearer_token(req);
        let auth_service = req.app_data::<Data<AuthService>>().cloned();
        let user_repository = req.app_data::<Data<UserRepository>>().cloned();

        Box::pin(async move {
            let token = token
                .ok_or_else(|| AppError::Unauthorized("Not authorized, no token".to_string()))?;

            let (Some(auth_service), Some(user_repository)) = (auth_service, user_repository)
            else {
                log::error!("Authentication services are not registered as app data");
                return Err(AppError::internal_server_error());
            };

            let claims = auth_service.verify_token(&token).map_err(|e| {
                log::debug!("Rejected bearer token: {}", e);
                AppError::Unauthorized("Not authorized, token failed".to_string())
            })?;

            let user = user_repository.find_by_id(claims.sub).await?.ok_or_else(|| {
                AppError::Unauthorized("Not authorized, user not found".to_string())
            })?;

            Ok(UserContext { user })
        })
    }
}
