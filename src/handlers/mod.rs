pub mod admin;
pub mod attendance;
pub mod auth;
pub mod leaves;
pub mod manager;
pub mod payroll;
pub mod settings;
pub mod shared;
