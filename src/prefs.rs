//! Durable local preference store.
//!
//! Holds exactly one value, the theme, under the key `theme` in
//! `prefs.json` inside the platform config directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::PrefsError;
use crate::theme::Theme;

const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "allaboutcats";
const APP_NAME: &str = "all_about_cats";
pub const PREFS_FILE_NAME: &str = "prefs.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredPrefs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<Theme>,
}

#[derive(Debug, Clone)]
pub struct PrefsStore {
    path: PathBuf,
}

impl PrefsStore {
    /// Store rooted at the platform config directory.
    pub fn from_project_dirs() -> Result<Self, PrefsError> {
        let dir = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or(PrefsError::ConfigDirNotFound)?;
        Ok(Self::with_dir(dir))
    }

    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(PREFS_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored theme. A missing file is `Ok(None)`.
    pub fn load_theme(&self) -> Result<Option<Theme>, PrefsError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No stored preferences");
                return Ok(None);
            }
            Err(source) => {
                return Err(PrefsError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        let prefs: StoredPrefs = serde_json::from_str(&content)?;
        Ok(prefs.theme)
    }

    /// Overwrites the stored theme.
    pub fn save_theme(&self, theme: Theme) -> Result<(), PrefsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| PrefsError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let content = serde_json::to_string_pretty(&StoredPrefs { theme: Some(theme) })?;
        fs::write(&self.path, content).map_err(|source| PrefsError::Io {
            path: self.path.clone(),
            source,
        })?;
        info!(%theme, path = %self.path.display(), "Saved theme preference");
        Ok(())
    }
}
