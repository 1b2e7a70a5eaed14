use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

const APP_DIR: &str = "cpyprofile";
const PROFILES_FILE: &str = "profiles.json";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone)]
pub struct AppPaths {
    config_dir: PathBuf,
}

impl AppPaths {
    pub fn discover(config_dir: Option<PathBuf>) -> AppResult<Self> {
        let config_dir = match config_dir {
            Some(dir) => dir,
            None => dirs::config_dir()
                .ok_or_else(|| AppError::Config("unable to resolve config directory".to_string()))?
                .join(APP_DIR),
        };

        fs::create_dir_all(&config_dir)?;

        Ok(Self { config_dir })
    }

    pub fn profiles_file(&self) -> PathBuf {
        self.config_dir.join(PROFILES_FILE)
    }

    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}
