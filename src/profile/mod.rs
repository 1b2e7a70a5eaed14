pub mod catalog;
pub mod document;
pub mod resolver;
pub mod selection;
pub mod service;

pub use catalog::{Profile, ProfileCatalog};
pub use document::{DocumentSource, OpenDocument};
pub use selection::{ChoiceItem, ChoicePresenter, present_choices};
pub use service::{CatalogProvider, ProfileService, SettingStore};

/// Setting key holding the configured profile name.
pub const PROFILES_SETTING: &str = "profiles";
