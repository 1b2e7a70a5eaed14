use std::fs;
use std::path::PathBuf;

use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};
use crate::profile::SettingStore;

use super::write_private;

/// Settings kept as a flat JSON object. Keys this crate does not know about
/// survive a write.
#[derive(Debug, Clone)]
pub struct FileSettingStore {
    path: PathBuf,
}

impl FileSettingStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn load(&self) -> AppResult<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str(&raw)? {
            Value::Object(map) => Ok(map),
            _ => Err(AppError::Config(format!(
                "{} must contain a json object",
                self.path.display()
            ))),
        }
    }
}

impl SettingStore for FileSettingStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let settings = self.load()?;
        match settings.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(value)) => Ok(Some(value.clone())),
            Some(other) => Err(AppError::Config(format!(
                "setting `{key}` must be a string, found {other}"
            ))),
        }
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut settings = self.load()?;
        settings.insert(key.to_string(), Value::String(value.to_string()));

        let payload = serde_json::to_string_pretty(&settings)?;
        write_private(&self.path, payload).await
    }
}
