// src/scrape/chronology.rs
use crate::config::consts::chronology_path;
use crate::core::html::{inner_after_open_tag, next_tag_block_ci, opener_lc, strip_tags};
use crate::core::net;
use crate::core::sanitize::normalize_entities;
use crate::error::ScrapeError;
use crate::launch::Launch;

/// Scrape one year's launch chronology page.
/// - Table id `chronlist`, one `<tr>` per launch.
/// - Cells: 1 = date, 3 = vehicle, 4 = site, 5 = remarks.
pub fn fetch(year: i32) -> Result<Vec<Launch>, ScrapeError> {
    let html_doc = net::http_get(&chronology_path(year))?;
    let t = std::time::Instant::now();
    let out = parse_doc(&html_doc, year);
    logd!("Chronology: parsed {} page in {:?}", year, t.elapsed());
    out
}

/// Split out for unit tests.
pub fn parse_doc(html_doc: &str, year: i32) -> Result<Vec<Launch>, ScrapeError> {
    // Walk <table …>…</table> blocks until the chronlist one turns up.
    let mut table: Option<&str> = None;
    let mut pos = 0usize;
    while let Some((tb_s, tb_e)) = next_tag_block_ci(html_doc, "<table", "</table>", pos) {
        let block = &html_doc[tb_s..tb_e];
        pos = tb_e;
        if opener_lc(block).contains("chronlist") {
            table = Some(block);
            break;
        }
    }
    let table = table.ok_or_else(|| {
        ScrapeError::Parse(format!("no chronlist table on the {} chronology page", year))
    })?;

    let mut out = Vec::new();
    let mut tr_pos = 0usize;
    while let Some((tr_s, tr_e)) = next_tag_block_ci(table, "<tr", "</tr>", tr_pos) {
        let tr_block = &table[tr_s..tr_e];
        tr_pos = tr_e;

        // Gather TD blocks
        let mut tds: Vec<&str> = Vec::with_capacity(6);
        let mut td_pos = 0usize;
        while let Some((td_s, td_e)) = next_tag_block_ci(tr_block, "<td", "</td>", td_pos) {
            tds.push(&tr_block[td_s..td_e]);
            td_pos = td_e;
        }
        if tds.len() < 6 {
            continue; // header row or filler
        }

        let cell = |i: usize| strip_tags(normalize_entities(&inner_after_open_tag(tds[i])));

        // Dates with an "x" are placeholders for launches that never flew.
        let date = cell(1);
        if date.contains('x') {
            continue;
        }

        match Launch::from_page_cells(&date, &cell(3), &cell(4), &cell(5)) {
            Some(launch) => out.push(launch),
            None => logd!("Chronology: undecodable date {:?} on the {} page", date, year),
        }
    }

    Ok(out)
}
