use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use crate::{
    api_errors::ApiError,
    entities::project::{MessageResponse, ProjectCountResponse, ProjectCreatedResponse},
    errors::AppError,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Unwraps a JSON body extraction; any failure there is reported as `failure`.
fn json_body(
    body: Result<web::Json<Value>, actix_web::Error>,
    failure: &'static str,
) -> Result<Value, ApiError> {
    body.map(web::Json::into_inner).map_err(|e| {
        ApiError::from_app_error(AppError::InternalError(e.to_string()), failure)
    })
}

#[instrument(skip(state))]
pub async fn get_projects(state: web::Data<AppState>) -> Result<impl Responder, ApiError> {
    let projects = state
        .project_handler
        .list_projects()
        .await
        .map_err(|e| ApiError::from_app_error(e, "Failed to fetch projects"))?;

    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(state))]
pub async fn get_project(
    project_id: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<impl Responder, ApiError> {
    let project = state
        .project_handler
        .get_project(project_id.into_inner())
        .await
        .map_err(|e| ApiError::from_app_error(e, "Failed to fetch project"))?;

    Ok(HttpResponse::Ok().json(project))
}

#[instrument(skip(state, body))]
pub async fn create_project(
    state: web::Data<AppState>,
    body: Result<web::Json<Value>, actix_web::Error>,
) -> Result<impl Responder, ApiError> {
    const FAILURE: &str = "Failed to create project";

    let payload = json_body(body, FAILURE)?;
    let id = state
        .project_handler
        .create_project(payload)
        .await
        .map_err(|e| ApiError::from_app_error(e, FAILURE))?;

    tracing::info!(id, "Project created");
    Ok(HttpResponse::Created().json(ProjectCreatedResponse::new(id)))
}

#[instrument(skip(state, body))]
pub async fn update_project(
    project_id: web::Path<i64>,
    state: web::Data<AppState>,
    body: Result<web::Json<Value>, actix_web::Error>,
) -> Result<impl Responder, ApiError> {
    const FAILURE: &str = "Failed to update project";

    let payload = json_body(body, FAILURE)?;
    state
        .project_handler
        .update_project(project_id.into_inner(), payload)
        .await
        .map_err(|e| ApiError::from_app_error(e, FAILURE))?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Project updated successfully")))
}

#[instrument(skip(state))]
pub async fn delete_project(
    project_id: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<impl Responder, ApiError> {
    state
        .project_handler
        .delete_project(project_id.into_inner())
        .await
        .map_err(|e| ApiError::from_app_error(e, "Failed to delete project"))?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Project deleted successfully")))
}

#[instrument(skip(state))]
pub async fn get_featured_projects(state: web::Data<AppState>) -> Result<impl Responder, ApiError> {
    let projects = state
        .project_handler
        .get_featured_projects()
        .await
        .map_err(|e| ApiError::from_app_error(e, "Failed to fetch featured projects"))?;

    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(state))]
pub async fn search_projects(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> Result<impl Responder, ApiError> {
    let projects = state
        .project_handler
        .search_projects(&query.q)
        .await
        .map_err(|e| ApiError::from_app_error(e, "Failed to search projects"))?;

    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(state))]
pub async fn count_projects(state: web::Data<AppState>) -> Result<impl Responder, ApiError> {
    let count = state
        .project_handler
        .count_projects()
        .await
        .map_err(|e| ApiError::from_app_error(e, "Failed to count projects"))?;

    Ok(HttpResponse::Ok().json(ProjectCountResponse { count }))
}
