// std imports
use std::collections::{BTreeMap, HashMap, hash_map::Entry};
use std::fs;
use std::io;
use std::path::Path;

// third-party imports
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// local imports
use crate::error::{Error, Result};
use crate::model::Page;

// ---

pub const CACHE_FILE_NAME: &str = "appData.json";

/// Cached scan results, keyed by the scanned folder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub folders: BTreeMap<String, FolderScan>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolderScan {
    pub folder_path: String,
    pub last_scanned: Option<DateTime<Utc>>,
    pub card_count: usize,
    pub cards: Vec<Page>,
}

impl Catalog {
    /// Loads the catalog stored at `path`.
    ///
    /// A missing file is an empty catalog. So is an unreadable or malformed
    /// one, after a warning: the cache is rebuilt by the next scan anyway.
    pub fn load(path: &Path) -> Self {
        let data = match fs::read(path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("no catalog at {}", path.display());
                return Self::default();
            }
            Err(err) => {
                log::warn!("ignoring unreadable catalog {}: {}", path.display(), err);
                return Self::default();
            }
        };

        match json::from_slice::<Self>(&data) {
            Ok(catalog) => {
                log::debug!("loaded {} folder(s) from {}", catalog.folders.len(), path.display());
                catalog
            }
            Err(err) => {
                log::warn!("ignoring malformed catalog {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let write = || -> io::Result<()> {
            if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
                fs::create_dir_all(dir)?;
            }
            let data = json::to_vec_pretty(self)?;
            fs::write(path, data)
        };

        write().map_err(|source| Error::FileWrite {
            path: path.into(),
            source,
        })?;
        log::debug!("saved {} folder(s) to {}", self.folders.len(), path.display());
        Ok(())
    }

    /// Removes the catalog file, falling back to overwriting it with an empty catalog.
    pub fn clear(path: &Path) -> Result<()> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => {
                log::warn!("failed to remove {}: {}, overwriting it instead", path.display(), err);
                Self::default().save(path)
            }
        }
    }

    /// Records a scan of `folder`, replacing any previous scan of it.
    pub fn insert_folder(&mut self, folder: impl Into<String>, pages: Vec<Page>) {
        let folder = folder.into();
        let scan = FolderScan {
            folder_path: folder.clone(),
            last_scanned: Some(Utc::now()),
            card_count: pages.len(),
            cards: pages,
        };
        self.folders.insert(folder, scan);
    }

    /// Returns the pages of all folders, one per preview path.
    ///
    /// The `preferred` folder is visited last, so its pages replace pages with
    /// the same preview path from other folders. A replaced page keeps the
    /// position of the first occurrence. Pages without a preview path are skipped.
    pub fn pages(&self, preferred: Option<&str>) -> Vec<&Page> {
        let preferred = preferred.and_then(|folder| self.folders.get_key_value(folder));
        let scans = self
            .folders
            .iter()
            .filter(|(folder, _)| preferred.is_none_or(|(p, _)| p != *folder))
            .chain(preferred);

        let mut positions = HashMap::new();
        let mut pages = Vec::new();
        for (_, scan) in scans {
            for page in scan.cards.iter().filter(|page| !page.file_path.is_empty()) {
                match positions.entry(page.file_path.as_str()) {
                    Entry::Occupied(entry) => pages[*entry.get()] = page,
                    Entry::Vacant(entry) => {
                        entry.insert(pages.len());
                        pages.push(page);
                    }
                }
            }
        }

        pages
    }

    pub fn page_count(&self) -> usize {
        self.folders.values().map(|scan| scan.cards.len()).sum()
    }
}

/// Reads a JSON array of pages produced by a scanner.
pub fn read_pages(path: &Path) -> Result<Vec<Page>> {
    let data = fs::read(path).map_err(|source| Error::FileRead {
        path: path.into(),
        source,
    })?;
    json::from_slice(&data).map_err(|source| Error::InvalidPages {
        path: path.into(),
        source,
    })
}
