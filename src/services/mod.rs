pub mod audit_logger;
pub mod auth;
pub mod leave;
pub mod user_context;

pub use audit_logger::AuditLogger;
pub use auth::AuthService;
pub use leave::LeaveService;
pub use user_context::UserContext;
