// std imports
use std::include_str;
use std::path::PathBuf;
use std::sync::LazyLock;

// third-party imports
use config::{Config, ConfigError, File, FileFormat};
use serde::Deserialize;

// local imports
use crate::output::OutputFormat;
use crate::query::Precedence;

// ---

static DEFAULT_SETTINGS_RAW: &str = include_str!("../etc/defaults/config.toml");
static DEFAULT_SETTINGS: LazyLock<Settings> = LazyLock::new(|| Settings::load([]).unwrap());

// ---

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub cache_file: Option<PathBuf>,
    pub output: OutputFormat,
    #[serde(default)]
    pub query: QuerySettings,
    #[serde(default)]
    pub export: ExportSettings,
}

impl Settings {
    /// Builds settings from the embedded defaults overlaid with `files` in order.
    pub fn load<I>(files: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = SourceFile>,
    {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS_RAW, FileFormat::Toml));

        for file in files {
            log::debug!("adding configuration source {}", file.filename.display());
            builder = builder.add_source(File::from(file.filename).required(file.required));
        }

        builder.build()?.try_deserialize()
    }
}

impl Default for Settings {
    fn default() -> Self {
        DEFAULT_SETTINGS.clone()
    }
}

impl Default for &'static Settings {
    fn default() -> Self {
        &DEFAULT_SETTINGS
    }
}

// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct QuerySettings {
    #[serde(default)]
    pub precedence: Precedence,
}

// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ExportSettings {
    #[serde(default)]
    pub overwrite: bool,
}

// ---

/// A configuration file, with its format derived from the extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub filename: PathBuf,
    pub required: bool,
}

impl SourceFile {
    pub fn new(filename: impl Into<PathBuf>) -> Self {
        Self {
            filename: filename.into(),
            required: true,
        }
    }

    pub fn required(self, required: bool) -> Self {
        Self { required, ..self }
    }
}
