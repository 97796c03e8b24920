use actix_web::web;
use sqlx::SqlitePool;

pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod services;

pub use config::Config;
pub use error::AppError;
pub use services::{AuditLogger, AuthService, LeaveService};

use database::repositories::{
    AttendanceRepository, AuditLogRepository, LeaveRepository, PayrollRepository,
    SettingRepository, UserRepository,
};

/// Request bodies may carry up to 10 MiB of JSON
const JSON_LIMIT: usize = 10 * 1024 * 1024;

/// Shared services and repositories handed to every worker.
#[derive(Clone)]
pub struct AppState {
    pub config: web::Data<Config>,
    pub auth_service: web::Data<AuthService>,
    pub leave_service: web::Data<LeaveService>,
    pub audit_logger: web::Data<AuditLogger>,
    pub user_repository: web::Data<UserRepository>,
    pub leave_repository: web::Data<LeaveRepository>,
    pub setting_repository: web::Data<SettingRepository>,
    pub attendance_repository: web::Data<AttendanceRepository>,
    pub payroll_repository: web::Data<PayrollRepository>,
    pub audit_log_repository: web::Data<AuditLogRepository>,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: Config) -> Self {
        let user_repository = UserRepository::new(pool.clone());
        let setting_repository = SettingRepository::new(pool.clone());
        let leave_repository = LeaveRepository::new(pool.clone());
        let audit_log_repository = AuditLogRepository::new(pool.clone());

        let auth_service = AuthService::new(
            config.clone(),
            user_repository.clone(),
            setting_repository.clone(),
        );
        let leave_service = LeaveService::new(leave_repository.clone());
        let audit_logger = AuditLogger::new(audit_log_repository.clone());

        Self {
            config: web::Data::new(config),
            auth_service: web::Data::new(auth_service),
            leave_service: web::Data::new(leave_service),
            audit_logger: web::Data::new(audit_logger),
            user_repository: web::Data::new(user_repository),
            leave_repository: web::Data::new(leave_repository),
            setting_repository: web::Data::new(setting_repository),
            attendance_repository: web::Data::new(AttendanceRepository::new(pool.clone())),
            payroll_repository: web::Data::new(PayrollRepository::new(pool)),
            audit_log_repository: web::Data::new(audit_log_repository),
        }
    }

    /// Register the shared state, the extractor error handlers and the
    /// `/api` routes on an app.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.config.clone())
            .app_data(self.auth_service.clone())
            .app_data(self.leave_service.clone())
            .app_data(self.audit_logger.clone())
            .app_data(self.user_repository.clone())
            .app_data(self.leave_repository.clone())
            .app_data(self.setting_repository.clone())
            .app_data(self.attendance_repository.clone())
            .app_data(self.payroll_repository.clone())
            .app_data(self.audit_log_repository.clone())
            .app_data(json_config())
            .app_data(path_config())
            .configure(routes::configure);
    }
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT)
        .error_handler(|err, _req| {
            log::debug!("Rejected request body: {}", err);
            AppError::BadRequest(format!("Invalid request body: {}", err)).into()
        })
}

// Ids that do not parse cannot name an existing record
fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|_err, _req| AppError::NotFound("Resource not found".to_string()).into())
}
