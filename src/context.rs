use crate::cli::Cli;
use crate::config::{AppPaths, FileCatalogProvider, FileSettingStore};
use crate::error::AppResult;
use crate::output::Output;

#[derive(Debug)]
pub struct AppContext {
    pub verbose: u8,
    pub paths: AppPaths,
    pub catalog: FileCatalogProvider,
    pub settings: FileSettingStore,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(cli: &Cli) -> AppResult<Self> {
        let paths = AppPaths::discover(cli.config_dir.clone())?;
        let catalog = FileCatalogProvider::new(paths.profiles_file());
        let settings = FileSettingStore::new(paths.settings_file());
        let output = Output::new(cli.json);

        Ok(Self {
            verbose: cli.verbose,
            paths,
            catalog,
            settings,
            output,
        })
    }
}
