use std::path::Path;

use sqlx::{sqlite::SqliteConnectOptions, Connection, SqliteConnection};
use tracing::debug;

pub const CREATE_PROJECTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS projects (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        description TEXT NOT NULL,
        image_path TEXT NOT NULL,
        project_type TEXT NOT NULL,
        year INTEGER NOT NULL,
        status TEXT NOT NULL,
        tech_stack TEXT NOT NULL,
        github_url TEXT,
        live_url TEXT,
        featured INTEGER NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
"#;

pub fn connect_options(db_path: &Path) -> SqliteConnectOptions {
    SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
}

/// Opens a fresh connection. Callers close it when their statement is done;
/// nothing is pooled.
pub async fn open_connection(db_path: &Path) -> Result<SqliteConnection, sqlx::Error> {
    debug!(path = %db_path.display(), "Opening SQLite connection");
    SqliteConnection::connect_with(&connect_options(db_path)).await
}

/// Opens the database only if the file is already there.
pub async fn open_existing_connection(db_path: &Path) -> Result<SqliteConnection, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(false);
    SqliteConnection::connect_with(&options).await
}

pub async fn ensure_parent_dir(db_path: &Path) -> std::io::Result<()> {
    match db_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => tokio::fs::create_dir_all(parent).await,
        _ => Ok(()),
    }
}
