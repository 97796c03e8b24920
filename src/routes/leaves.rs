use actix_web::web;

use crate::handlers::leaves;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/leaves")
            .route("/apply", web::post().to(leaves::apply_leave))
            .route("/my-leaves", web::get().to(leaves::get_my_leaves))
            .route("/pending", web::get().to(leaves::get_pending_leaves))
            .route("/{id}", web::put().to(leaves::update_leave_status)),
    );
}
