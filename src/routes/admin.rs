use actix_web::web;

use crate::handlers::admin;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .route("/users", web::get().to(admin::get_users))
            .route("/users", web::post().to(admin::create_user))
            .route("/users/add", web::post().to(admin::create_user))
            .route("/users/{id}", web::put().to(admin::update_user))
            .route("/users/{id}", web::delete().to(admin::delete_user))
            .route("/dashboard", web::get().to(admin::get_dashboard)),
    );
}
