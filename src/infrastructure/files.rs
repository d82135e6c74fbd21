use std::path::{Component, Path, PathBuf};

use actix_files::NamedFile;
use tracing::warn;

use crate::api_errors::ApiError;

/// Joins a client-supplied relative path onto `base`. Returns `None` for
/// anything that could leave `base`: parent, root or prefix components, or
/// an empty path.
pub fn safe_join(base: &Path, requested: &str) -> Option<PathBuf> {
    let mut joined = base.to_path_buf();
    let mut has_segment = false;

    for component in Path::new(requested).components() {
        match component {
            Component::Normal(segment) => {
                joined.push(segment);
                has_segment = true;
            }
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    has_segment.then_some(joined)
}

/// Sends `base/requested` if it is an existing regular file, 404 otherwise.
pub async fn send_existing_file(base: &Path, requested: &str) -> Result<NamedFile, ApiError> {
    let path = safe_join(base, requested).ok_or_else(ApiError::not_found)?;

    match tokio::fs::metadata(&path).await {
        Ok(meta) if meta.is_file() => NamedFile::open_async(&path).await.map_err(|e| {
            warn!(path = %path.display(), error = %e, "Failed to open static file");
            ApiError::not_found()
        }),
        _ => Err(ApiError::not_found()),
    }
}

/// Sends the first of `candidates` that exists under `base`.
pub async fn send_first_existing<S: AsRef<str>>(
    base: &Path,
    candidates: &[S],
) -> Result<NamedFile, ApiError> {
    for candidate in candidates {
        if let Ok(file) = send_existing_file(base, candidate.as_ref()).await {
            return Ok(file);
        }
    }
    Err(ApiError::not_found())
}
