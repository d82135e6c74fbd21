use std::path::PathBuf;

/// Holds only the database path; each repository call opens its own
/// connection.
#[derive(Clone, Debug)]
pub struct SqlxProjectRepo {
    pub db_path: PathBuf,
}
