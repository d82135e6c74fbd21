use actix_web::{get, web, HttpResponse, Responder};
use humantime::format_duration;
use serde::Serialize;
use std::time::Duration;

use crate::{constants::START_TIME, repositories::project::ProjectRepository, AppState};

#[derive(Serialize)]
struct HealthCheckResponse {
    status: String,
    version: String,
    uptime: String,
    started_at: String,
    timestamp: String,
    database: String,
    project_count: Option<i64>,
}

#[get("/api/health")]
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let now_utc = chrono::Utc::now();
    let uptime = now_utc.signed_duration_since(*START_TIME);
    let human_uptime = format_duration(Duration::from_secs(uptime.num_seconds().max(0) as u64));

    // count_projects would create a missing database file.
    let (database, project_count) = match state.project_handler.project_repo.check_connection().await {
        Ok(()) => ("OK", state.project_handler.count_projects().await.ok()),
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the database");
            ("Unavailable", None)
        }
    };

    HttpResponse::Ok().json(HealthCheckResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: human_uptime.to_string(),
        started_at: START_TIME.to_rfc3339(),
        timestamp: now_utc.to_rfc3339(),
        database: database.to_string(),
        project_count,
    })
}
