use actix_web::web;

use crate::handlers::manager;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/manager")
            .route(
                "/dashboard-stats",
                web::get().to(manager::get_dashboard_stats),
            )
            .route("/employees", web::get().to(manager::get_employees)),
    );
}
