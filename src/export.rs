// std imports
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

// third-party imports
use thiserror::Error;

// local imports
use crate::error::{Error, Result};
use crate::model::Page;
use crate::xerr::HighlightQuoted;

// ---

/// A preview that could not be exported.
#[derive(Error, Debug)]
pub enum ExportFailure {
    #[error("missing: {path}", path = .path.hlq())]
    Missing { path: PathBuf },
    #[error("{path}: target already exists", path = .target.hlq())]
    Exists { target: PathBuf },
    #[error("{name}: {source}", name = .source_path.hlq())]
    Copy {
        source_path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Default)]
pub struct ExportReport {
    pub exported: Vec<PathBuf>,
    pub failures: Vec<ExportFailure>,
}

impl ExportReport {
    pub fn total(&self) -> usize {
        self.exported.len() + self.failures.len()
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Copies the preview image of every page into `dest`, keeping its file name.
///
/// Failures of individual files are collected in the report and do not stop the export.
/// Only a failure to create `dest` is returned as an error.
pub fn export_previews<'a, I>(pages: I, dest: &Path, overwrite: bool) -> Result<ExportReport>
where
    I: IntoIterator<Item = &'a Page>,
{
    fs::create_dir_all(dest).map_err(|source| Error::FileWrite {
        path: dest.into(),
        source,
    })?;

    let mut report = ExportReport::default();
    for page in pages {
        match export_preview(page, dest, overwrite) {
            Ok(target) => {
                log::debug!("exported {} to {}", page.file_path, target.display());
                report.exported.push(target);
            }
            Err(failure) => {
                log::debug!("export failed: {}", failure);
                report.failures.push(failure);
            }
        }
    }

    Ok(report)
}

fn export_preview(page: &Page, dest: &Path, overwrite: bool) -> std::result::Result<PathBuf, ExportFailure> {
    let source = Path::new(&page.file_path);
    let name = match source.file_name() {
        Some(name) if source.is_file() => name,
        _ => return Err(ExportFailure::Missing { path: source.into() }),
    };

    let target = dest.join(name);
    if !overwrite && target.exists() {
        return Err(ExportFailure::Exists { target });
    }

    fs::copy(source, &target).map_err(|err| ExportFailure::Copy {
        source_path: source.into(),
        source: err,
    })?;

    Ok(target)
}
