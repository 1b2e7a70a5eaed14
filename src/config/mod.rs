pub mod catalog;
pub mod paths;
pub mod settings;

pub use catalog::FileCatalogProvider;
pub use paths::AppPaths;
pub use settings::FileSettingStore;

use std::path::Path;

use crate::error::AppResult;

pub(crate) async fn write_private(path: &Path, payload: String) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    tokio::fs::write(path, payload).await?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let mut perms = tokio::fs::metadata(path).await?.permissions();
        perms.set_mode(0o600);
        tokio::fs::set_permissions(path, perms).await?;
    }

    Ok(())
}
