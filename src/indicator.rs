//! The visible "active profile" indicator.
//!
//! [`IndicatorState`] is owned by whoever composes the session and is handed
//! to [`Synchronizer::refresh`] by mutable reference. Disposing consumes it.

use std::fmt;

use tracing::debug;

use crate::error::AppResult;
use crate::profile::service::{CatalogProvider, SettingStore};
use crate::profile::{PROFILES_SETTING, resolver};

pub const INDICATOR_PREFIX: &str = "CPY profile: ";
pub const UNDEFINED_TEXT: &str = "CPY profile: undefined";

/// Renders indicator text somewhere the user can see it.
pub trait IndicatorSink {
    type Handle;

    fn create_indicator(&mut self) -> Self::Handle;
    fn set_text(&mut self, handle: &Self::Handle, text: &str);
    fn show(&mut self, handle: &Self::Handle);
    fn dispose(&mut self, handle: Self::Handle);
}

pub struct IndicatorState<K: IndicatorSink> {
    sink: K,
    handle: K::Handle,
    text: String,
}

impl<K: IndicatorSink> fmt::Debug for IndicatorState<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndicatorState")
            .field("text", &self.text)
            .finish_non_exhaustive()
    }
}

impl<K: IndicatorSink> IndicatorState<K> {
    pub fn create(mut sink: K) -> Self {
        let handle = sink.create_indicator();
        sink.set_text(&handle, UNDEFINED_TEXT);
        sink.show(&handle);
        Self {
            sink,
            handle,
            text: UNDEFINED_TEXT.to_string(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    fn set_text(&mut self, text: String) {
        self.sink.set_text(&self.handle, &text);
        self.text = text;
    }

    /// Releases the indicator and hands the sink back.
    pub fn dispose(mut self) -> K {
        self.sink.dispose(self.handle);
        self.sink
    }
}

pub fn indicator_text(profile: Option<&str>) -> String {
    match profile {
        Some(name) => format!("{INDICATOR_PREFIX}{name}"),
        None => UNDEFINED_TEXT.to_string(),
    }
}

/// Recomputes the indicator from the configured profile only.
#[derive(Debug)]
pub struct Synchronizer<'a, C, S> {
    catalog: &'a C,
    settings: &'a S,
}

impl<'a, C: CatalogProvider, S: SettingStore> Synchronizer<'a, C, S> {
    pub fn new(catalog: &'a C, settings: &'a S) -> Self {
        Self { catalog, settings }
    }

    /// On error the indicator keeps its previous text.
    pub async fn refresh<K: IndicatorSink>(&self, state: &mut IndicatorState<K>) -> AppResult<()> {
        let catalog = self.catalog.list_profiles().await?;
        let setting = self.settings.get(PROFILES_SETTING)?;
        let text = indicator_text(resolver::from_settings(&catalog, setting.as_deref()));
        debug!(%text, "indicator refreshed");
        state.set_text(text);
        Ok(())
    }
}
