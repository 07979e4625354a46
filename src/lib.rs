// public modules
pub mod appdirs;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod filtering;
pub mod model;
pub mod output;
pub mod query;
pub mod settings;

// private modules
mod xerr;

// public uses
pub use catalog::Catalog;
pub use export::{ExportReport, export_previews};
pub use filtering::{FilterError, PageFilter, filter_records};
pub use model::{Page, PageRecord};
pub use query::{Precedence, Query, SyntaxError};
pub use settings::Settings;
