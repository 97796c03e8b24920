use actix_web::web;

pub mod admin;
pub mod attendance;
pub mod auth;
pub mod leaves;
pub mod manager;
pub mod payroll;
pub mod settings;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(auth::configure)
            .configure(admin::configure)
            .configure(manager::configure)
            .configure(attendance::configure)
            .configure(leaves::configure)
            .configure(payroll::configure)
            .configure(settings::configure),
    );
}
