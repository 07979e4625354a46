// std imports
use std::path::PathBuf;

// local imports
use crate::{catalog::CACHE_FILE_NAME, config::CONFIG_FILE_NAME};

// ---

/// Per-user locations of the catalog and the configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub data_dir: PathBuf,
    pub config_dir: PathBuf,
}

impl AppDirs {
    pub fn new(name: &str) -> Option<Self> {
        Some(Self {
            data_dir: base_dir(Kind::Data)?.join(name),
            config_dir: base_dir(Kind::Config)?.join(name),
        })
    }

    pub fn catalog_file(&self) -> PathBuf {
        self.data_dir.join(CACHE_FILE_NAME)
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }
}

#[derive(Debug, Clone, Copy)]
enum Kind {
    Data,
    Config,
}

// XDG layout on macOS as well, so the catalog lives next to other command line tools' data.
#[cfg(target_os = "macos")]
fn base_dir(kind: Kind) -> Option<PathBuf> {
    let (var, fallback): (_, &[&str]) = match kind {
        Kind::Data => ("XDG_DATA_HOME", &[".local", "share"]),
        Kind::Config => ("XDG_CONFIG_HOME", &[".config"]),
    };

    std::env::var_os(var)
        .and_then(dirs_sys::is_absolute_path)
        .or_else(|| dirs::home_dir().map(|home| fallback.iter().fold(home, |path, part| path.join(part))))
}

#[cfg(not(target_os = "macos"))]
fn base_dir(kind: Kind) -> Option<PathBuf> {
    match kind {
        Kind::Data => dirs::data_dir(),
        Kind::Config => dirs::config_dir(),
    }
}

#[cfg(test)]
mod tests;
