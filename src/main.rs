// std imports
use std::{io::stdout, process};

// third-party imports
use clap::Parser;
use env_logger::{self as logger};
use owo_colors::OwoColorize;

// local imports
use pagesift::{
    Catalog, PageFilter,
    catalog::read_pages,
    cli, config,
    error::*,
    export::export_previews,
    settings::Settings,
};

const PAGESIFT_DEBUG_LOG: &str = "PAGESIFT_DEBUG_LOG";
const PAGESIFT_DEBUG_LOG_STYLE: &str = "PAGESIFT_DEBUG_LOG_STYLE";

// ---

fn bootstrap(opt: &cli::Opt) -> Result<Settings> {
    if std::env::var(PAGESIFT_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(logger::Env::new().filter(PAGESIFT_DEBUG_LOG).write_style(PAGESIFT_DEBUG_LOG_STYLE))
            .format_timestamp_micros()
            .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }

    let (offset, no_default_configs) = opt
        .config
        .iter()
        .rposition(|x| x.is_empty() || x == "-")
        .map(|x| (x + 1, true))
        .unwrap_or_default();
    let configs = &opt.config[offset..];

    config::at(configs).no_default(no_default_configs).load()
}

fn run() -> Result<()> {
    let opt = cli::Opt::parse();
    let settings = bootstrap(&opt)?;

    let cache_file = match opt.cache_file.clone().or_else(|| settings.cache_file.clone()) {
        Some(path) => path,
        None => config::default_cache_file().ok_or(Error::AppDirs)?,
    };
    log::debug!("using catalog {}", cache_file.display());

    if opt.clear_cache {
        return Catalog::clear(&cache_file);
    }

    // Validate queries before touching the catalog.
    let precedence = opt.precedence.unwrap_or(settings.query.precedence);
    let filter = PageFilter::with_precedence(&opt.include, &opt.exclude, precedence)?;

    let mut catalog = Catalog::load(&cache_file);

    if let Some(path) = &opt.import {
        let folder = opt.folder.as_ref().ok_or(Error::MissingOption {
            option: "--import",
            required: "--folder",
        })?;
        let pages = read_pages(path)?;
        log::debug!("importing {} page(s) into {}", pages.len(), folder);
        catalog.insert_folder(folder.as_str(), pages);
        catalog.save(&cache_file)?;
    }

    let pages = catalog.pages(opt.folder.as_deref());
    let matched = filter.filter(pages.iter().copied());
    eprintln!("matched {} of {} page(s)", matched.len(), pages.len());

    let output = opt.output.unwrap_or(settings.output);
    if !output.write_until_closed(&mut stdout().lock(), &matched)? {
        log::debug!("output closed before all pages were written");
    }

    if let Some(dest) = &opt.export {
        let overwrite = opt.overwrite || settings.export.overwrite;
        let report = export_previews(matched.iter().copied(), dest, overwrite)?;
        for failure in &report.failures {
            eprintln!("{} {}", "warning:".bright_yellow().bold(), failure);
        }
        eprintln!("exported {} of {} preview(s)", report.exported.len(), report.total());
        if !report.is_complete() {
            return Err(Error::Export {
                failed: report.failures.len(),
                total: report.total(),
            });
        }
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        err.log();
        process::exit(1);
    }
}
