use serde_json::Value;

use crate::{
    constants::REQUIRED_PROJECT_FIELDS,
    entities::project::{NewProject, Project, UpdateProjectRequest},
    errors::AppError,
    repositories::project::ProjectRepository,
};

pub struct ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R) -> Self {
        ProjectHandler { project_repo }
    }

    /// Prepares storage; seeds sample projects into an empty table when asked
    pub async fn initialize(&self, seed_sample_data: bool) -> Result<(), AppError> {
        if seed_sample_data {
            self.project_repo.init_database().await
        } else {
            self.project_repo.create_schema().await
        }
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        self.project_repo.list_projects().await
    }

    pub async fn get_project(&self, id: i64) -> Result<Project, AppError> {
        self.project_repo
            .get_project_by_id(id)
            .await?
            .ok_or_else(project_not_found)
    }

    /// Checks the raw body for every required field before decoding it, so
    /// the client learns which field is missing.
    pub async fn create_project(&self, payload: Value) -> Result<i64, AppError> {
        let body = payload
            .as_object()
            .ok_or_else(|| AppError::InternalError("Request body is not a JSON object".into()))?;

        if let Some(missing) = REQUIRED_PROJECT_FIELDS
            .iter()
            .find(|field| !body.contains_key(**field))
        {
            return Err(AppError::ValidationError(format!("Missing required field: {}", missing)));
        }

        let new_project: NewProject = serde_json::from_value(payload)?;
        self.project_repo.create_project(&new_project).await
    }

    pub async fn update_project(&self, id: i64, payload: Value) -> Result<(), AppError> {
        let update: UpdateProjectRequest = serde_json::from_value(payload)?;

        if let Some(field) = update.null_required_field() {
            return Err(AppError::ValidationError(format!("Field cannot be null: {}", field)));
        }

        match self.project_repo.update_project(id, &update).await? {
            true => Ok(()),
            false => Err(project_not_found()),
        }
    }

    pub async fn delete_project(&self, id: i64) -> Result<(), AppError> {
        match self.project_repo.delete_project(id).await? {
            true => Ok(()),
            false => Err(project_not_found()),
        }
    }

    pub async fn get_featured_projects(&self) -> Result<Vec<Project>, AppError> {
        self.project_repo.get_featured_projects().await
    }

    pub async fn search_projects(&self, term: &str) -> Result<Vec<Project>, AppError> {
        self.project_repo.search_projects(term).await
    }

    pub async fn count_projects(&self) -> Result<i64, AppError> {
        self.project_repo.count_projects().await
    }
}

fn project_not_found() -> AppError {
    AppError::NotFound("Project not found".to_string())
}
