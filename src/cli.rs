// std imports
use std::path::PathBuf;

// third-party imports
use clap::Parser;

// local imports
use crate::{output::OutputFormat, query::Precedence};

// ---

/// Filter scanned PDF pages with boolean and phrase queries, and export their previews.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Opt {
    /// Configuration file applied over the defaults. An empty value or '-' discards the user configuration and all files given before it.
    #[arg(long, value_name = "FILE", num_args = 1)]
    pub config: Vec<String>,

    /// Query a page must match to be kept, e.g. 'hero AND (unit OR "cost * 0")'.
    #[arg(short, long, default_value = "", env = "PAGESIFT_INCLUDE", overrides_with = "include")]
    pub include: String,

    /// Query a page must not match to be kept.
    #[arg(short, long, default_value = "", env = "PAGESIFT_EXCLUDE", overrides_with = "exclude")]
    pub exclude: String,

    /// Grouping of AND and OR when they are mixed without parentheses [default: from settings, else left-to-right].
    #[arg(long, value_enum, env = "PAGESIFT_PRECEDENCE", overrides_with = "precedence")]
    pub precedence: Option<Precedence>,

    /// Page catalog file [default: appData.json in the pagesift data directory].
    #[arg(long, value_name = "FILE", env = "PAGESIFT_CACHE_FILE", overrides_with = "cache_file")]
    pub cache_file: Option<PathBuf>,

    /// Folder whose pages take priority over pages with the same preview in other folders.
    #[arg(long, value_name = "DIR", overrides_with = "folder")]
    pub folder: Option<String>,

    /// Store pages from a scanner's JSON output as the scan of --folder before filtering.
    #[arg(long, value_name = "FILE")]
    pub import: Option<PathBuf>,

    /// Remove the page catalog and exit.
    #[arg(long, conflicts_with_all = ["import", "export"])]
    pub clear_cache: bool,

    /// Copy previews of the matched pages into this directory.
    #[arg(long, value_name = "DIR")]
    pub export: Option<PathBuf>,

    /// Replace previews that already exist in the export directory.
    #[arg(long, overrides_with = "overwrite")]
    pub overwrite: bool,

    /// Output format [default: from settings, else list].
    #[arg(short, long, value_enum, env = "PAGESIFT_OUTPUT", overrides_with = "output")]
    pub output: Option<OutputFormat>,
}
