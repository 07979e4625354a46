// std imports
use std::io::{self, Write};
use std::path::PathBuf;

// third-party imports
use config::ConfigError;
use owo_colors::OwoColorize;
use thiserror::Error;

// local imports
use crate::filtering::FilterError;
use crate::xerr::HighlightQuoted;

/// Error is an error which may occur in the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid filter: {0}")]
    Filter(#[from] FilterError),
    #[error("failed to read {path}: {source}", path = .path.hlq())]
    FileRead { path: PathBuf, source: io::Error },
    #[error("failed to write {path}: {source}", path = .path.hlq())]
    FileWrite { path: PathBuf, source: io::Error },
    #[error("failed to parse pages from {path}: {source}", path = .path.hlq())]
    InvalidPages { path: PathBuf, source: json::Error },
    #[error("failed to detect application directories")]
    AppDirs,
    #[error("failed to export {failed} of {total} preview(s)")]
    Export { failed: usize, total: usize },
    #[error("option {option} requires {required}", option = .option.hlq(), required = .required.hlq())]
    MissingOption { option: &'static str, required: &'static str },
}

impl Error {
    pub fn log(&self) {
        self.log_to(&mut io::stderr()).ok();
    }

    pub fn log_to<W: Write>(&self, target: &mut W) -> io::Result<()> {
        writeln!(target, "{} {}", "error:".bright_red().bold(), self)
    }
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests;
