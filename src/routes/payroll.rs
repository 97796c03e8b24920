use actix_web::web;

use crate::handlers::payroll;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/payroll")
            .route("/my-history", web::get().to(payroll::get_my_payroll))
            .route("/all", web::get().to(payroll::get_all_payroll))
            .route("/create", web::post().to(payroll::create_payroll)),
    );
}
