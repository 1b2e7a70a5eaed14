#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use cpyprofile::error::{AppError, AppResult};
use cpyprofile::profile::{
    CatalogProvider, ChoiceItem, ChoicePresenter, Profile, ProfileCatalog, SettingStore,
};

pub fn sample_catalog() -> ProfileCatalog {
    [
        ("PROFA", Profile::new("u1", "h1", 1)),
        ("PROFB", Profile::new("u2", "h2", 2)),
    ]
    .into_iter()
    .collect()
}

#[derive(Debug, Default)]
pub struct FakeCatalog {
    pub catalog: RefCell<ProfileCatalog>,
    pub default_name: Option<String>,
    pub fail: Cell<bool>,
    pub listings: Cell<usize>,
}

impl FakeCatalog {
    pub fn new(catalog: ProfileCatalog, default_name: Option<&str>) -> Self {
        Self {
            catalog: RefCell::new(catalog),
            default_name: default_name.map(ToOwned::to_owned),
            ..Self::default()
        }
    }
}

impl CatalogProvider for FakeCatalog {
    async fn list_profiles(&self) -> AppResult<ProfileCatalog> {
        self.listings.set(self.listings.get() + 1);
        if self.fail.get() {
            return Err(AppError::Catalog("connection refused".to_string()));
        }
        Ok(self.catalog.borrow().clone())
    }

    fn default_profile_name(&self) -> Option<String> {
        self.default_name.clone()
    }
}

#[derive(Debug, Default)]
pub struct MemorySettings {
    pub values: RefCell<HashMap<String, String>>,
    pub writes: Cell<usize>,
}

impl MemorySettings {
    pub fn with(key: &str, value: &str) -> Self {
        let settings = Self::default();
        settings
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        settings
    }
}

impl SettingStore for MemorySettings {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.writes.set(self.writes.get() + 1);
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Picks the item with the given label, or cancels when `None`.
#[derive(Debug)]
pub struct PickLabel {
    pub label: Option<&'static str>,
    pub seen: RefCell<Vec<ChoiceItem>>,
}

impl PickLabel {
    pub fn new(label: Option<&'static str>) -> Self {
        Self {
            label,
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl ChoicePresenter for PickLabel {
    async fn pick(&self, _placeholder: &str, items: &[ChoiceItem]) -> AppResult<Option<usize>> {
        *self.seen.borrow_mut() = items.to_vec();
        Ok(self
            .label
            .and_then(|label| items.iter().position(|item| item.label == label)))
    }
}
