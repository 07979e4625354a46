// std imports
use std::io::{self, Write};

// third-party imports
use clap::ValueEnum;
use serde::Deserialize;

// local imports
use crate::model::Page;

// ---

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, strum::Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum OutputFormat {
    /// One tab-separated line per page: PDF name, page number, preview path.
    #[default]
    List,
    /// JSON array of pages.
    Json,
}

impl OutputFormat {
    pub fn write<W: Write + ?Sized>(self, out: &mut W, pages: &[&Page]) -> io::Result<()> {
        match self {
            Self::List => write_list(out, pages),
            Self::Json => write_json(out, pages),
        }
    }

    /// Writes `pages` like [`write`](Self::write), treating a closed reader as success.
    ///
    /// Returns `false` if the reader went away before everything was written.
    pub fn write_until_closed<W: Write + ?Sized>(self, out: &mut W, pages: &[&Page]) -> io::Result<bool> {
        match self.write(out, pages) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(false),
            Err(err) => Err(err),
        }
    }
}

pub fn write_list<W: Write + ?Sized>(out: &mut W, pages: &[&Page]) -> io::Result<()> {
    for page in pages {
        writeln!(out, "{}\t{}\t{}", page.pdf_name(), page.page_number(), page.file_path)?;
    }
    out.flush()
}

pub fn write_json<W: Write + ?Sized>(out: &mut W, pages: &[&Page]) -> io::Result<()> {
    json::to_writer_pretty(&mut *out, pages)?;
    writeln!(out)?;
    out.flush()
}

#[cfg(test)]
mod tests;
