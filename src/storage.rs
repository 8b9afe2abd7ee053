use crate::errors::AppError;
use crate::models::StoredState;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

const DEFAULT_DATA_PATH: &str = "data/journey.json";

pub fn resolve_data_path() -> PathBuf {
    match env::var("APP_DATA_PATH") {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_DATA_PATH),
    }
}

/// Reads the stored document. A missing or unreadable file yields an empty
/// document so the tracker starts from defaults.
pub async fn load_data(path: &Path) -> StoredState {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse data file {}: {err}", path.display());
                StoredState::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => StoredState::default(),
        Err(err) => {
            error!("failed to read data file {}: {err}", path.display());
            StoredState::default()
        }
    }
}

/// Writes the whole document next to `path` and renames it into place.
pub async fn persist_data(path: &Path, data: &StoredState) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    fs::write(&tmp, payload).await?;
    fs::rename(&tmp, path).await?;
    Ok(())
}
