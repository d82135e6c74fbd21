use actix_web::web;

use crate::{constants::PAGES, handlers::pages, AppState};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    for (path, file) in PAGES {
        cfg.route(
            path,
            web::get().to(move |state: web::Data<AppState>| pages::send_page(state, file)),
        );
    }

    cfg.service(
        web::resource("/resume.pdf")
            .route(web::get().to(pages::resume_pdf))
    )
    .service(
        web::resource("/css/{filename:.*}")
            .route(web::get().to(pages::css))
    )
    .service(
        web::resource("/images/{filename:.*}")
            .route(web::get().to(pages::images))
    )
    .service(
        web::resource("/resume_file/{filename:.*}")
            .route(web::get().to(pages::resume_file))
    )
    .service(
        web::resource("/{filename}.html")
            .route(web::get().to(pages::root_html))
    );
}
