// std imports
use std::path::{Path, PathBuf};

// local imports
use crate::{
    appdirs::AppDirs,
    error::Result,
    settings::{Settings, SourceFile},
};

// ---

pub const APP_NAME: &str = "pagesift";
pub const CONFIG_ENV: &str = "PAGESIFT_CONFIG";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Returns the embedded default settings.
pub fn default() -> &'static Settings {
    Default::default()
}

/// Returns a loader that applies `paths` on top of the default configuration.
pub fn at<I, P>(paths: I) -> Loader
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    Loader::new(paths.into_iter().map(|path| path.as_ref().into()).collect())
}

pub fn app_dirs() -> Option<AppDirs> {
    AppDirs::new(APP_NAME)
}

/// Location of the page catalog when neither the command line nor the settings name one.
pub fn default_cache_file() -> Option<PathBuf> {
    app_dirs().map(|dirs| dirs.catalog_file())
}

// ---

pub struct Loader {
    paths: Vec<PathBuf>,
    no_default: bool,
}

impl Loader {
    fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            paths,
            no_default: false,
        }
    }

    /// Skips the user configuration file when set.
    pub fn no_default(self, val: bool) -> Self {
        Self { no_default: val, ..self }
    }

    pub fn load(self) -> Result<Settings> {
        let user = if self.no_default { None } else { user_config() };
        let files = user
            .map(|path| SourceFile::new(path).required(false))
            .into_iter()
            .chain(self.paths.into_iter().map(SourceFile::new));

        Ok(Settings::load(files)?)
    }
}

fn user_config() -> Option<PathBuf> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => Some(path.into()),
        _ => app_dirs().map(|dirs| dirs.config_file()),
    }
}
