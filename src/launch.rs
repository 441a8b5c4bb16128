// src/launch.rs
//! One historical orbital launch, plus the classification rules that
//! turn raw page cells into a record: year decoding, vehicle family,
//! launch site → country, success from the remarks text.

use chrono::{Datelike, NaiveDate};

/// Selected rocket families. The order is visible in the panels.
pub const ROCKET_FAMILIES: [&str; 7] =
    ["R-7", "Kosmos", "Proton", "Long March", "Atlas", "Falcon", "Ariane"];

// Matched as substrings of the vehicle name and folded into "R-7".
const R7_SUBFAMILIES: [&str; 5] = ["Molniya", "Soyuz", "Sputnik", "Voskhod", "Vostok"];

/// Country → launch-site prefixes. A launch belongs to a country when the
/// first whitespace-separated token of its (fixed-up) site matches one of
/// the prefixes exactly.
pub const COUNTRY_SITES: [(&str, &[&str]); 11] = [
    ("Brazil", &["Al"]),
    ("China", &["ECS", "Jq", "Xi", "TY", "We", "YS"]),
    ("Europe", &["Ha", "Ko", "Wo"]),
    ("India", &["Sr"]),
    ("Iran", &["Sem", "Shr"]),
    ("Israel", &["Pa"]),
    ("Japan", &["KA", "Ka", "Ta"]),
    ("North Korea", &["So", "To"]),
    ("South Korea", &["Na"]),
    (
        "USA",
        &[
            "BC", "CC", "CCK", "Ed", "Ga", "In", "Kau", "Kd", "Kw", "Mo", "Nq", "Om", "OnS",
            "SLC", "SM", "Va", "WI",
        ],
    ),
    ("USSR/Russia", &["Ba", "BaS", "Do", "KY", "Pl", "SL", "Sv", "Vo"]),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Launch {
    pub year: i32,
    pub site: String,
    pub country: String,
    pub vehicle: String,
    pub family: String,
    pub remarks: String,
    pub success: bool,
}

impl Launch {
    /// Build a record from the four raw chronology cells.
    /// Returns `None` when the date cell yields no usable year.
    pub fn from_page_cells(date: &str, vehicle: &str, site: &str, remarks: &str) -> Option<Launch> {
        let year = decode_year(date.trim())?;

        // Commas out of the site makes deducing the country more convenient.
        let site = site.trim().replace(',', " ");
        // Sometimes the whitespace in vehicle names is weird.
        let vehicle = vehicle.split_whitespace().collect::<Vec<_>>().join(" ");
        let remarks = remarks.trim().to_lowercase();

        let family = deduce_family(&vehicle);
        let success = deduce_success(&vehicle, &remarks);
        let site = fix_site(&site);
        let country = deduce_country(&site);

        Some(Launch { year, site, country, vehicle, family, remarks, success })
    }
}

/// Decode a free-form date cell down to a year.
/// Tries the page's usual `dd.mm.yyyy` first, then falls back to the
/// first plausible four-digit run anywhere in the string.
pub fn decode_year(date: &str) -> Option<i32> {
    let clean = crate::core::sanitize::normalize_ws(date);

    if let Ok(d) = NaiveDate::parse_from_str(&clean, "%d.%m.%Y") {
        return Some(d.year());
    }

    let bytes = clean.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            if i - start == 4 {
                if let Ok(y) = clean[start..i].parse::<i32>() {
                    if (1900..=2100).contains(&y) {
                        return Some(y);
                    }
                }
            }
        } else {
            i += 1;
        }
    }
    None
}

fn deduce_family(vehicle: &str) -> String {
    let mut names: Vec<&str> = Vec::with_capacity(ROCKET_FAMILIES.len() + R7_SUBFAMILIES.len() + 1);
    names.extend(ROCKET_FAMILIES);
    names.extend(R7_SUBFAMILIES);
    names.push("CZ"); // "CZ" for the Long March

    let hit = names.into_iter().find(|n| vehicle.contains(n));
    match hit {
        Some("CZ") => s!("Long March"),
        Some(n) if R7_SUBFAMILIES.contains(&n) => s!("R-7"),
        Some(n) => s!(n),
        None => s!(),
    }
}

fn deduce_success(vehicle: &str, remarks_lc: &str) -> bool {
    // The initial launches of Falcon 1 aren't described as failed in the
    // remarks, for whatever reason.
    if vehicle.contains("Falcon-1 (dev)") {
        return false;
    }
    !remarks_lc.contains("failure") && !remarks_lc.contains("failed")
}

/// Corrections to the launch site description (in some very specific cases).
fn fix_site(site: &str) -> String {
    let site = site.strip_prefix('@').unwrap_or(site);
    site.replace("LC-1/5", "Ba LC-1/5")
        .replace("SLC-", "SLC ")
        .replace("YS(", "YS (")
}

fn deduce_country(site: &str) -> String {
    let Some(token) = site.split_whitespace().next() else {
        return s!();
    };
    COUNTRY_SITES
        .iter()
        .find(|(_, prefixes)| prefixes.contains(&token))
        .map(|(country, _)| s!(*country))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_dotted_dates_and_loose_years() {
        assert_eq!(decode_year("12.04.1961"), Some(1961));
        assert_eq!(decode_year("  04.10.1957 "), Some(1957));
        assert_eq!(decode_year("early 2003"), Some(2003));
        assert_eq!(decode_year("no date here"), None);
        assert_eq!(decode_year("item 123456"), None); // six digits isn't a year
    }

    #[test]
    fn r7_subfamilies_fold_into_r7() {
        let l = Launch::from_page_cells("04.10.1957", "Sputnik (8K71PS)", "Ba LC-1/5", "").unwrap();
        assert_eq!(l.family, "R-7");
        assert_eq!(l.country, "USSR/Russia");
        assert!(l.success);
    }

    #[test]
    fn cz_designation_is_long_march() {
        let l = Launch::from_page_cells("24.04.1970", "CZ-1", "Jq LA-2", "").unwrap();
        assert_eq!(l.family, "Long March");
        assert_eq!(l.country, "China");
    }

    #[test]
    fn failure_words_in_remarks_mark_failures() {
        let ok = Launch::from_page_cells("01.01.2020", "Atlas-5", "CC SLC-41", "fine").unwrap();
        assert!(ok.success);

        let bad =
            Launch::from_page_cells("01.01.2020", "Proton-M", "Ba LC-200/39", "Launch failure")
                .unwrap();
        assert!(!bad.success);

        let partial =
            Launch::from_page_cells("01.01.2020", "Ariane-5G", "Ko ELA-3", "stage failed early")
                .unwrap();
        assert!(!partial.success);
    }

    #[test]
    fn falcon_1_dev_flights_are_failures() {
        let l = Launch::from_page_cells("24.03.2006", "Falcon-1 (dev)", "Om", "success").unwrap();
        assert!(!l.success);
        assert_eq!(l.family, "Falcon");
    }

    #[test]
    fn site_fixes_feed_country_lookup() {
        // "LC-1/5" is Baikonur even when the page omits the "Ba" prefix.
        let l = Launch::from_page_cells("04.10.1957", "Sputnik", "LC-1/5", "").unwrap();
        assert_eq!(l.country, "USSR/Russia");

        // "@" marks sea launches; the marker is not part of the prefix.
        let l = Launch::from_page_cells("28.03.1999", "Zenit-3SL", "@SL Odyssey", "").unwrap();
        assert_eq!(l.country, "USSR/Russia");

        // Fused "SLC-…" splits into a recognizable token.
        let l = Launch::from_page_cells("01.01.2020", "Falcon-9", "SLC-40", "").unwrap();
        assert_eq!(l.country, "USA");
    }

    #[test]
    fn unknown_sites_and_vehicles_stay_unclassified() {
        let l = Launch::from_page_cells("01.01.2020", "Electron", "OnZ LC-1", "").unwrap();
        assert_eq!(l.country, "");
        assert_eq!(l.family, "");
    }
}
