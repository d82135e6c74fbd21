use std::path::PathBuf;

mod domain;
mod interfaces;
mod infrastructure;
pub mod api_errors;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{db, files};

use repositories::sqlx_repo::SqlxProjectRepo;
use use_cases::projects::ProjectHandler;

pub struct AppState {
    pub project_handler: AppProjectHandler,
    pub site_root: PathBuf,
    pub resume_file: String,
}

pub type AppProjectHandler = ProjectHandler<SqlxProjectRepo>;

impl AppState {
    pub fn new(config: &settings::AppConfig) -> Self {
        let project_repo = SqlxProjectRepo::new(config.database_path());
        let project_handler = ProjectHandler::new(project_repo);

        AppState {
            project_handler,
            site_root: config.site_root(),
            resume_file: config.resume_file.clone(),
        }
    }
}
