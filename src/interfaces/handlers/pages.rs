use actix_files::NamedFile;
use actix_web::{web, HttpResponse, ResponseError};
use tracing::instrument;

use crate::{
    api_errors::ApiError,
    constants::{FALLBACK_RESUME_FILE, RESUME_DIR},
    files::{send_existing_file, send_first_existing},
    AppState,
};

/// Serves one of the fixed pages from the site root.
pub async fn send_page(state: web::Data<AppState>, file: &'static str) -> Result<NamedFile, ApiError> {
    send_existing_file(&state.site_root, file).await
}

#[instrument(skip(state))]
pub async fn root_html(
    state: web::Data<AppState>,
    filename: web::Path<String>,
) -> Result<NamedFile, ApiError> {
    let requested = format!("{}.html", filename.into_inner());
    send_existing_file(&state.site_root, &requested).await
}

#[instrument(skip(state))]
pub async fn resume_pdf(state: web::Data<AppState>) -> Result<NamedFile, ApiError> {
    let resume_dir = state.site_root.join(RESUME_DIR);
    let candidates = [state.resume_file.as_str(), FALLBACK_RESUME_FILE];
    send_first_existing(&resume_dir, &candidates).await
}

pub async fn css(
    state: web::Data<AppState>,
    filename: web::Path<String>,
) -> Result<NamedFile, ApiError> {
    send_existing_file(&state.site_root.join("css"), &filename).await
}

pub async fn images(
    state: web::Data<AppState>,
    filename: web::Path<String>,
) -> Result<NamedFile, ApiError> {
    send_existing_file(&state.site_root.join("images"), &filename).await
}

pub async fn resume_file(
    state: web::Data<AppState>,
    filename: web::Path<String>,
) -> Result<NamedFile, ApiError> {
    send_existing_file(&state.site_root.join(RESUME_DIR), &filename).await
}

pub async fn not_found() -> HttpResponse {
    ApiError::not_found().error_response()
}
