use actix_web::{web, HttpRequest};

use crate::{api_errors::ApiError, handlers::projects};

/// Ids that are not integers name no project.
fn project_id_error(err: actix_web::error::PathError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "Rejected project id");
    ApiError::NotFound("Project not found".to_string()).into()
}

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/projects")
            .app_data(web::PathConfig::default().error_handler(project_id_error))
            .service(
                web::resource("")
                    .route(web::get().to(projects::get_projects))
                    .route(web::post().to(projects::create_project))
            )
            .service(
                web::resource("/featured")
                    .route(web::get().to(projects::get_featured_projects))
            )
            .service(
                web::resource("/search")
                    .route(web::get().to(projects::search_projects))
            )
            .service(
                web::resource("/count")
                    .route(web::get().to(projects::count_projects))
            )
            .service(
                web::resource("/{project_id}")
                    .route(web::get().to(projects::get_project))
                    .route(web::put().to(projects::update_project))
                    .route(web::delete().to(projects::delete_project))
            )
    );
}
