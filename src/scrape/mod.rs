// src/scrape/mod.rs
//! Scraping of the upstream launch database. `chronology` knows how to
//! read one year page; this module owns the year loop, pacing, and
//! progress reporting. Callers decide when to scrape and where the
//! records end up (`store`).

mod chronology;

pub use chronology::parse_doc;

use std::thread;
use std::time::Duration;

use chrono::Datelike;

use crate::config::consts::{REQUEST_PAUSE_MS, YEAR_MINIMUM};
use crate::error::ScrapeError;
use crate::launch::Launch;
use crate::progress::Progress;

/// Last year with a complete chronology. The current year would render
/// as a sudden drop at the end of every panel.
pub fn last_complete_year() -> i32 {
    chrono::Utc::now().year() - 1
}

/// Fetch and parse every year page, oldest first.
pub fn collect_launches(
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<Vec<Launch>, ScrapeError> {
    let years: Vec<i32> = (YEAR_MINIMUM..=last_complete_year()).collect();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(years.len());
    }

    let mut out = Vec::new();
    for (i, year) in years.iter().copied().enumerate() {
        let launches = chronology::fetch(year)?;
        logf!("Scrape: {} launches for {}", launches.len(), year);
        out.extend(launches);

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(year);
        }
        if i + 1 < years.len() {
            thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS));
        }
    }
    Ok(out)
}
