// src/error.rs
//! Typed errors for the library. `thiserror` enums here; the binary
//! wraps whatever bubbles up in a `color_eyre` report.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while scraping the upstream chronology pages.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Network/HTTP failure fetching a page.
    #[error("fetch failed for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The page came back, but the expected structure is missing.
    #[error("unexpected page structure: {0}")]
    Parse(String),
}

/// Errors raised while loading data or producing the infographic.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Malformed or empty data file.
    #[error("data error: {0}")]
    Data(String),

    /// Filesystem access failure (template, data file, output path).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A chart document failed to rasterize.
    #[error("svg rasterization failed: {0}")]
    Raster(#[from] resvg::usvg::Error),

    /// Template decode or canvas encode failure.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Top-level error for one run of the pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// Command line didn't parse.
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Scrape(#[from] ScrapeError),

    #[error(transparent)]
    Render(#[from] RenderError),

    /// Data file write failure after a scrape.
    #[error("could not write {path}: {source}")]
    DataWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
