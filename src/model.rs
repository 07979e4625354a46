// std imports
use std::path::Path;

// third-party imports
use serde::{Deserialize, Serialize};
use wildcard::{Pattern, fold_case};

// ---

/// A unit being filtered: one page's extracted text and the names of the files it came from.
pub trait PageRecord {
    fn text(&self) -> &str;
    fn filename(&self) -> &str;

    /// File name of the rendered preview, if the record has one.
    fn preview_name(&self) -> &str {
        ""
    }
}

impl<T: PageRecord + ?Sized> PageRecord for &T {
    fn text(&self) -> &str {
        (**self).text()
    }

    fn filename(&self) -> &str {
        (**self).filename()
    }

    fn preview_name(&self) -> &str {
        (**self).preview_name()
    }
}

// ---

pub trait RecordFilter {
    fn apply(&self, record: &Haystack) -> bool;
}

// ---

/// Case-folded copy of the searchable fields of a [`PageRecord`].
///
/// Built once per record so that every literal of every query searches the same folded text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Haystack {
    text: String,
    filename: String,
    preview: String,
}

impl Haystack {
    pub fn new<R: PageRecord + ?Sized>(record: &R) -> Self {
        Self {
            text: fold_case(record.text()),
            filename: fold_case(record.filename()),
            preview: fold_case(record.preview_name()),
        }
    }

    #[inline]
    pub fn contains(&self, pattern: &Pattern) -> bool {
        pattern.is_found_in(&self.text) || pattern.is_found_in(&self.filename) || pattern.is_found_in(&self.preview)
    }
}

// ---

/// A scanned PDF page as stored in the page catalog.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Page {
    /// Path of the rendered preview image.
    pub file_path: String,
    pub pdf_path: String,
    /// Zero-based page index within the PDF.
    pub page_index: usize,
    pub size_bytes: u64,
    /// Modification time of the PDF in seconds since the Unix epoch.
    pub modified_ts: f64,
    pub scanned_text: String,
}

impl Page {
    /// File name component of the PDF path, or an empty string if there is none.
    pub fn pdf_name(&self) -> &str {
        file_name(&self.pdf_path)
    }

    /// File name component of the preview image path.
    pub fn preview_name(&self) -> &str {
        file_name(&self.file_path)
    }

    pub fn page_number(&self) -> usize {
        self.page_index + 1
    }
}

impl PageRecord for Page {
    fn text(&self) -> &str {
        &self.scanned_text
    }

    fn filename(&self) -> &str {
        self.pdf_name()
    }

    fn preview_name(&self) -> &str {
        Page::preview_name(self)
    }
}

fn file_name(path: &str) -> &str {
    Path::new(path).file_name().and_then(|name| name.to_str()).unwrap_or("")
}
