use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{AppError, AppResult};
use crate::profile::{CatalogProvider, Profile, ProfileCatalog};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default)]
    pub profiles: Vec<ProfileEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileEntry {
    pub name: String,
    pub user: String,
    pub host: String,
    pub port: u16,
}

impl CatalogFile {
    pub fn parse(raw: &str) -> AppResult<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    pub fn into_catalog(self) -> AppResult<ProfileCatalog> {
        let mut seen = HashSet::new();
        let mut catalog = ProfileCatalog::new();
        for entry in self.profiles {
            if !seen.insert(entry.name.clone()) {
                return Err(AppError::Config(format!(
                    "duplicate profile name `{}` in catalog",
                    entry.name
                )));
            }
            catalog.insert(entry.name, Profile::new(entry.user, entry.host, entry.port));
        }
        Ok(catalog)
    }
}

/// Reads the catalog from `profiles.json` on every listing.
#[derive(Debug, Clone)]
pub struct FileCatalogProvider {
    path: PathBuf,
}

impl FileCatalogProvider {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn load_sync(&self) -> AppResult<CatalogFile> {
        if !self.path.exists() {
            return Ok(CatalogFile::default());
        }
        CatalogFile::parse(&fs::read_to_string(&self.path)?)
    }
}

impl CatalogProvider for FileCatalogProvider {
    async fn list_profiles(&self) -> AppResult<ProfileCatalog> {
        if !tokio::fs::try_exists(&self.path).await? {
            return Ok(ProfileCatalog::new());
        }

        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|err| {
            AppError::Catalog(format!("unable to read {}: {err}", self.path.display()))
        })?;
        CatalogFile::parse(&raw)?.into_catalog()
    }

    fn default_profile_name(&self) -> Option<String> {
        match self.load_sync() {
            Ok(file) => file.default,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "unable to read default profile");
                None
            }
        }
    }
}
