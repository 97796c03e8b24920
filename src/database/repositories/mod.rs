pub mod attendance;
pub mod audit_log;
pub mod leave;
pub mod payroll;
pub mod setting;
pub mod user;

// Re-export all repositories for easy importing
pub use attendance::AttendanceRepository;
pub use audit_log::AuditLogRepository;
pub use leave::LeaveRepository;
pub use payroll::PayrollRepository;
pub use setting::SettingRepository;
pub use user::UserRepository;
