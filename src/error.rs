use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("preference file is not valid json: {0}")]
    Json(#[from] serde_json::Error),
}
