use actix_web::web;

use crate::handlers::attendance;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/attendance")
            .route("/status", web::get().to(attendance::get_status))
            .route("/clock-in", web::post().to(attendance::clock_in))
            .route("/clock-out", web::put().to(attendance::clock_out))
            .route("/history", web::get().to(attendance::get_history)),
    );
}
