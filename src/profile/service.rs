use std::borrow::Cow;

use tracing::{debug, info};

use crate::error::AppResult;

use super::PROFILES_SETTING;
use super::catalog::ProfileCatalog;
use super::document::DocumentSource;
use super::resolver;
use super::selection::{self, ChoicePresenter};

/// Lists the profiles that can serve resource lookups.
#[allow(async_fn_in_trait)]
pub trait CatalogProvider {
    async fn list_profiles(&self) -> AppResult<ProfileCatalog>;
    fn default_profile_name(&self) -> Option<String>;
}

/// Durable key/value settings.
#[allow(async_fn_in_trait)]
pub trait SettingStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;
}

/// Composes the resolver with its collaborators.
#[derive(Debug)]
pub struct ProfileService<'a, C, S, D> {
    catalog: &'a C,
    settings: &'a S,
    documents: &'a D,
}

impl<'a, C, S, D> ProfileService<'a, C, S, D>
where
    C: CatalogProvider,
    S: SettingStore,
    D: DocumentSource,
{
    pub fn new(catalog: &'a C, settings: &'a S, documents: &'a D) -> Self {
        Self {
            catalog,
            settings,
            documents,
        }
    }

    pub fn configured_profile(&self) -> AppResult<Option<String>> {
        self.settings.get(PROFILES_SETTING)
    }

    pub async fn profile_from_settings(
        &self,
        catalog: Option<&ProfileCatalog>,
    ) -> AppResult<Option<String>> {
        let catalog = self.catalog_or_fetch(catalog).await?;
        let setting = self.configured_profile()?;
        Ok(resolver::from_settings(&catalog, setting.as_deref()).map(ToOwned::to_owned))
    }

    pub async fn profile_from_document(
        &self,
        program_name: &str,
        catalog: Option<&ProfileCatalog>,
    ) -> AppResult<Option<String>> {
        let catalog = self.catalog_or_fetch(catalog).await?;
        let documents = self.documents.open_documents();
        Ok(resolver::from_documents(program_name, &catalog, &documents).map(ToOwned::to_owned))
    }

    /// Settings first, then open documents, against a single catalog snapshot.
    pub async fn resolve_for_program(&self, program_name: &str) -> AppResult<Option<String>> {
        let catalog = self.catalog.list_profiles().await?;
        if let Some(profile) = self.profile_from_settings(Some(&catalog)).await? {
            return Ok(Some(profile));
        }

        let resolved = self
            .profile_from_document(program_name, Some(&catalog))
            .await?;
        if resolved.is_none() {
            debug!(program = program_name, "no profile resolved");
        }
        Ok(resolved)
    }

    /// Lets the user pick a profile and persists the choice.
    pub async fn select_profile<P: ChoicePresenter>(
        &self,
        presenter: &P,
        catalog: Option<&ProfileCatalog>,
    ) -> AppResult<Option<String>> {
        let catalog = self.catalog_or_fetch(catalog).await?;
        let default_name = self.catalog.default_profile_name();
        let items = selection::present_choices(&catalog, default_name.as_deref());

        let Some(chosen) = selection::choose(&items, presenter).await? else {
            debug!("profile selection cancelled");
            return Ok(None);
        };

        self.persist_choice(&chosen).await?;
        Ok(Some(chosen))
    }

    pub async fn persist_choice(&self, name: &str) -> AppResult<()> {
        self.settings.set(PROFILES_SETTING, name).await?;
        info!(profile = name, "configured profile updated");
        Ok(())
    }

    async fn catalog_or_fetch<'c>(
        &self,
        catalog: Option<&'c ProfileCatalog>,
    ) -> AppResult<Cow<'c, ProfileCatalog>> {
        match catalog {
            Some(catalog) => Ok(Cow::Borrowed(catalog)),
            None => Ok(Cow::Owned(self.catalog.list_profiles().await?)),
        }
    }
}
