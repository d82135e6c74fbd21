use actix_web::web;

use crate::handlers::{pages::not_found, system::health_check};

mod pages;
mod projects;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    cfg.configure(projects::config_routes)
        .configure(pages::config_routes);

    cfg.default_service(web::to(not_found));
}
