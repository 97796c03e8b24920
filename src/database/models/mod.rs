mod macros;

pub mod attendance;
pub mod audit_log;
pub mod auth;
pub mod leave;
pub mod payroll;
pub mod setting;
pub mod stats;
pub mod user;

// Re-export all models for easy importing
pub use attendance::*;
pub use audit_log::*;
pub use auth::*;
pub use leave::*;
pub use payroll::*;
pub use setting::*;
pub use stats::*;
pub use user::*;
