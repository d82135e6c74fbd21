use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use sqlx::{Connection, QueryBuilder, Sqlite, SqliteConnection};
use tracing::{info, warn};

use crate::{
    db::{
        seed::sample_projects,
        sqlite::{ensure_parent_dir, open_connection, open_existing_connection, CREATE_PROJECTS_TABLE},
    },
    entities::project::{NewProject, Project, ProjectRow, UpdateProjectRequest},
    errors::AppError,
    repositories::sqlx_repo::SqlxProjectRepo,
};

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Creates the `projects` table if needed and seeds it when empty
    async fn init_database(&self) -> Result<(), AppError>;

    /// Creates the `projects` table if needed, without seeding
    async fn create_schema(&self) -> Result<(), AppError>;

    async fn list_projects(&self) -> Result<Vec<Project>, AppError>;

    /// `Ok(None)` when no project has this id
    async fn get_project_by_id(&self, id: i64) -> Result<Option<Project>, AppError>;

    /// Inserts the project and returns its assigned id
    async fn create_project(&self, project: &NewProject) -> Result<i64, AppError>;

    /// Applies the present fields. `Ok(false)` when the id is unknown or no
    /// field was present.
    async fn update_project(&self, id: i64, update: &UpdateProjectRequest) -> Result<bool, AppError>;

    /// `Ok(false)` when there was nothing to delete
    async fn delete_project(&self, id: i64) -> Result<bool, AppError>;

    async fn get_featured_projects(&self) -> Result<Vec<Project>, AppError>;

    /// Case-insensitive substring match on title, description and tech stack
    async fn search_projects(&self, term: &str) -> Result<Vec<Project>, AppError>;

    async fn count_projects(&self) -> Result<i64, AppError>;

    /// Fails when the database file or the `projects` table is gone; never
    /// creates either
    async fn check_connection(&self) -> Result<(), AppError>;
}

impl SqlxProjectRepo {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        SqlxProjectRepo { db_path: db_path.into() }
    }

    async fn connect(&self) -> Result<SqliteConnection, AppError> {
        Ok(open_connection(&self.db_path).await?)
    }
}

async fn insert_project(
    conn: &mut SqliteConnection,
    project: &NewProject,
    now: NaiveDateTime,
) -> Result<i64, sqlx::Error> {
    if project.tech_stack.has_embedded_separator() {
        warn!(
            title = %project.title,
            "Tech stack entry contains a comma and will not round-trip"
        );
    }

    let result = sqlx::query(
        r#"
        INSERT INTO projects (
            title, description, image_path, project_type, year, status,
            tech_stack, github_url, live_url, featured, created_at, updated_at
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(project.title.as_str())
    .bind(project.description.as_str())
    .bind(project.image_path.as_str())
    .bind(project.project_type.as_str())
    .bind(project.year)
    .bind(project.status.as_str())
    .bind(project.tech_stack.to_stored())
    .bind(project.github_url.as_deref())
    .bind(project.live_url.as_deref())
    .bind(i64::from(project.featured))
    .bind(now)
    .bind(now)
    .execute(&mut *conn)
    .await?;

    Ok(result.last_insert_rowid())
}

async fn project_exists(conn: &mut SqliteConnection, id: i64) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM projects WHERE id = ?")
        .bind(id)
        .fetch_one(&mut *conn)
        .await
        .map(|count| count > 0)
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn init_database(&self) -> Result<(), AppError> {
        ensure_parent_dir(&self.db_path).await?;
        let mut conn = self.connect().await?;

        sqlx::query(CREATE_PROJECTS_TABLE).execute(&mut conn).await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM projects")
            .fetch_one(&mut conn)
            .await?;

        if count == 0 {
            let now = Utc::now().naive_utc();
            let samples = sample_projects();
            for project in &samples {
                insert_project(&mut conn, project, now).await?;
            }
            info!("Seeded projects table with {} sample projects", samples.len());
        }

        conn.close().await?;
        Ok(())
    }

    async fn create_schema(&self) -> Result<(), AppError> {
        ensure_parent_dir(&self.db_path).await?;
        let mut conn = self.connect().await?;
        sqlx::query(CREATE_PROJECTS_TABLE).execute(&mut conn).await?;
        conn.close().await?;
        Ok(())
    }

    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        let mut conn = self.connect().await?;
        let rows = sqlx::query_as::<_, ProjectRow>(
            "SELECT * FROM projects ORDER BY featured DESC, year DESC, id ASC",
        )
        .fetch_all(&mut conn)
        .await?;
        conn.close().await?;

        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn get_project_by_id(&self, id: i64) -> Result<Option<Project>, AppError> {
        let mut conn = self.connect().await?;
        let row = sqlx::query_as::<_, ProjectRow>("SELECT * FROM projects WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut conn)
            .await?;
        conn.close().await?;

        Ok(row.map(Project::from))
    }

    async fn create_project(&self, project: &NewProject) -> Result<i64, AppError> {
        let mut conn = self.connect().await?;
        let id = insert_project(&mut conn, project, Utc::now().naive_utc()).await?;
        conn.close().await?;

        Ok(id)
    }

    async fn update_project(&self, id: i64, update: &UpdateProjectRequest) -> Result<bool, AppError> {
        let mut conn = self.connect().await?;

        if !project_exists(&mut conn, id).await? || update.is_empty() {
            conn.close().await?;
            return Ok(false);
        }

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE projects SET ");
        {
            let mut set = builder.separated(", ");

            if let Some(title) = update.title.value_ref() {
                set.push("title = ").push_bind_unseparated(title.clone());
            }
            if let Some(description) = update.description.value_ref() {
                set.push("description = ").push_bind_unseparated(description.clone());
            }
            if let Some(image_path) = update.image_path.value_ref() {
                set.push("image_path = ").push_bind_unseparated(image_path.clone());
            }
            if let Some(project_type) = update.project_type.value_ref() {
                set.push("project_type = ").push_bind_unseparated(project_type.clone());
            }
            if let Some(year) = update.year.value_ref() {
                set.push("year = ").push_bind_unseparated(*year);
            }
            if let Some(status) = update.status.value_ref() {
                set.push("status = ").push_bind_unseparated(status.clone());
            }
            if let Some(tech_stack) = update.tech_stack.value_ref() {
                if tech_stack.has_embedded_separator() {
                    warn!(id, "Tech stack entry contains a comma and will not round-trip");
                }
                set.push("tech_stack = ").push_bind_unseparated(tech_stack.to_stored());
            }
            // Nullable columns: an explicit null clears them.
            if let Some(github_url) = update.github_url.as_ref_option() {
                set.push("github_url = ").push_bind_unseparated(github_url.cloned());
            }
            if let Some(live_url) = update.live_url.as_ref_option() {
                set.push("live_url = ").push_bind_unseparated(live_url.cloned());
            }
            if let Some(featured) = update.featured.value_ref() {
                set.push("featured = ").push_bind_unseparated(i64::from(*featured));
            }

            set.push("updated_at = ").push_bind_unseparated(Utc::now().naive_utc());
        }
        builder.push(" WHERE id = ").push_bind(id);

        builder.build().execute(&mut conn).await?;
        conn.close().await?;

        Ok(true)
    }

    async fn delete_project(&self, id: i64) -> Result<bool, AppError> {
        let mut conn = self.connect().await?;
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&mut conn)
            .await?;
        conn.close().await?;

        Ok(result.rows_affected() > 0)
    }

    async fn get_featured_projects(&self) -> Result<Vec<Project>, AppError> {
        let mut conn = self.connect().await?;
        let rows = sqlx::query_as::<_, ProjectRow>(
            "SELECT * FROM projects WHERE featured = 1 ORDER BY year DESC, id ASC",
        )
        .fetch_all(&mut conn)
        .await?;
        conn.close().await?;

        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn search_projects(&self, term: &str) -> Result<Vec<Project>, AppError> {
        let pattern = format!("%{}%", term);

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT * FROM projects WHERE title LIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR description LIKE ").push_bind(pattern.clone());
        builder.push(" OR tech_stack LIKE ").push_bind(pattern);
        builder.push(" ORDER BY featured DESC, year DESC, id ASC");

        let mut conn = self.connect().await?;
        let rows = builder
            .build_query_as::<ProjectRow>()
            .fetch_all(&mut conn)
            .await?;
        conn.close().await?;

        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn count_projects(&self) -> Result<i64, AppError> {
        let mut conn = self.connect().await?;
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM projects")
            .fetch_one(&mut conn)
            .await?;
        conn.close().await?;

        Ok(count)
    }

    async fn check_connection(&self) -> Result<(), AppError> {
        let mut conn = open_existing_connection(&self.db_path).await?;
        let tables: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'projects'",
        )
        .fetch_one(&mut conn)
        .await?;
        conn.close().await?;

        if tables == 0 {
            return Err(AppError::StorageError("projects table is missing".to_string()));
        }
        Ok(())
    }
}
