// src/runner.rs
//! Top-level pipeline: obtain records (scrape or load), aggregate,
//! render one infographic per requested language.

use std::path::PathBuf;

use crate::config::consts::YEAR_MINIMUM;
use crate::error::{Error, Result};
use crate::params::Params;
use crate::progress::Progress;
use crate::render::{self, RenderOptions};
use crate::{scrape, stats, store};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub records: usize,
    pub images_written: Vec<PathBuf>,
}

/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(params: &Params, mut progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    let launches = if params.refresh || !params.data_path.exists() {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Scraping the launch database into {}", params.data_path.display()));
        }
        let launches = scrape::collect_launches(progress.as_deref_mut())?;
        store::save(&params.data_path, &launches).map_err(|source| Error::DataWrite {
            path: params.data_path.clone(),
            source,
        })?;
        logf!("Run: wrote {} records to {}", launches.len(), params.data_path.display());
        launches
    } else {
        let launches = store::load(&params.data_path)?;
        logf!("Run: loaded {} records from {}", launches.len(), params.data_path.display());
        launches
    };

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("{} launch records", launches.len()));
    }

    let years = YEAR_MINIMUM..=scrape::last_complete_year();
    let aggregates = stats::aggregate(&launches, years).map_err(Error::Render)?;

    let options = RenderOptions {
        dpi: params.dpi,
        out_dir: &params.out_dir,
        template: params.template.as_deref(),
    };

    let mut images_written = Vec::with_capacity(params.languages.len());
    for language in &params.languages {
        let path = render::render_infographic(&aggregates, *language, &options)
            .map_err(Error::Render)?;
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Wrote {}", path.display()));
        }
        images_written.push(path);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(RunSummary { records: launches.len(), images_written })
}
