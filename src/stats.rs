// src/stats.rs
//! Aggregate statistics derived from the launch records. Everything here
//! is recomputed per run and never persisted.

use std::collections::{BTreeMap, HashMap};
use std::ops::RangeInclusive;

use crate::error::RenderError;
use crate::launch::{COUNTRY_SITES, Launch, ROCKET_FAMILIES};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct YearTally {
    pub successes: u32,
    pub failures: u32,
}

impl YearTally {
    pub fn total(&self) -> u32 {
        self.successes + self.failures
    }
}

#[derive(Debug)]
pub struct Aggregates {
    /// Contiguous, ascending years covered by the panels.
    pub years: Vec<i32>,
    /// Per-year tallies over all records in range.
    pub by_year: BTreeMap<i32, YearTally>,
    /// Countries ordered by total successful launches, descending.
    pub countries: Vec<String>,
    pub by_country: HashMap<String, BTreeMap<i32, YearTally>>,
    pub by_family: HashMap<String, BTreeMap<i32, YearTally>>,
    /// The highest number of launches observed in any single year.
    pub peak_year_total: u32,
}

/// Compute the aggregates over `years`. Records outside the range are
/// ignored. An empty record set is a `Data` error, never a blank image.
pub fn aggregate(
    launches: &[Launch],
    years: RangeInclusive<i32>,
) -> Result<Aggregates, RenderError> {
    if launches.is_empty() {
        return Err(RenderError::Data(s!("no launch records to aggregate")));
    }

    let years: Vec<i32> = years.collect();
    let mut by_year: BTreeMap<i32, YearTally> = years.iter().map(|y| (*y, YearTally::default())).collect();
    let mut by_country: HashMap<String, BTreeMap<i32, YearTally>> = COUNTRY_SITES
        .iter()
        .map(|(c, _)| (s!(*c), BTreeMap::new()))
        .collect();
    let mut by_family: HashMap<String, BTreeMap<i32, YearTally>> = ROCKET_FAMILIES
        .iter()
        .map(|f| (s!(*f), BTreeMap::new()))
        .collect();

    for l in launches {
        let Some(tally) = by_year.get_mut(&l.year) else {
            continue; // outside the panel range
        };
        bump(tally, l.success);

        if let Some(per_year) = by_country.get_mut(&l.country) {
            bump(per_year.entry(l.year).or_default(), l.success);
        }
        if let Some(per_year) = by_family.get_mut(&l.family) {
            bump(per_year.entry(l.year).or_default(), l.success);
        }
    }

    let peak_year_total = by_year.values().map(YearTally::total).max().unwrap_or(0);

    // Countries sorted by their total number of successful launches.
    let mut ranked: Vec<(String, u32)> = COUNTRY_SITES
        .iter()
        .map(|(c, _)| (s!(*c), successes_of(&by_country, c)))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    let countries = ranked.into_iter().map(|(c, _)| c).collect();

    Ok(Aggregates { years, by_year, countries, by_country, by_family, peak_year_total })
}

fn bump(tally: &mut YearTally, success: bool) {
    if success {
        tally.successes += 1;
    } else {
        tally.failures += 1;
    }
}

fn successes_of(map: &HashMap<String, BTreeMap<i32, YearTally>>, key: &str) -> u32 {
    map.get(key)
        .map(|per_year| per_year.values().map(|t| t.successes).sum())
        .unwrap_or(0)
}

impl Aggregates {
    /// Successful launches per year for one country, aligned with `years`.
    pub fn country_successes(&self, country: &str) -> Vec<u32> {
        self.series(&self.by_country, country, |t| t.successes)
    }

    pub fn country_failures(&self, country: &str) -> Vec<u32> {
        self.series(&self.by_country, country, |t| t.failures)
    }

    pub fn family_successes(&self, family: &str) -> Vec<u32> {
        self.series(&self.by_family, family, |t| t.successes)
    }

    pub fn family_failures(&self, family: &str) -> Vec<u32> {
        self.series(&self.by_family, family, |t| t.failures)
    }

    pub fn year_successes(&self) -> Vec<u32> {
        self.years.iter().map(|y| self.by_year[y].successes).collect()
    }

    pub fn year_failures(&self) -> Vec<u32> {
        self.years.iter().map(|y| self.by_year[y].failures).collect()
    }

    fn series(
        &self,
        map: &HashMap<String, BTreeMap<i32, YearTally>>,
        key: &str,
        pick: fn(&YearTally) -> u32,
    ) -> Vec<u32> {
        let per_year = map.get(key);
        self.years
            .iter()
            .map(|y| per_year.and_then(|m| m.get(y)).map(pick).unwrap_or(0))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn launch(year: i32, country: &str, family: &str, success: bool) -> Launch {
        // Site prefixes picked so classification would agree with `country`.
        Launch {
            year,
            site: s!("-"),
            country: s!(country),
            vehicle: s!("-"),
            family: s!(family),
            remarks: s!(),
            success,
        }
    }

    #[test]
    fn per_year_counts_match_known_input() {
        // 3 launches in 2020, 5 in 2021.
        let mut launches = Vec::new();
        for _ in 0..3 {
            launches.push(launch(2020, "USA", "Falcon", true));
        }
        for _ in 0..5 {
            launches.push(launch(2021, "USA", "Falcon", true));
        }

        let agg = aggregate(&launches, 2020..=2021).unwrap();
        assert_eq!(agg.by_year[&2020].total(), 3);
        assert_eq!(agg.by_year[&2021].total(), 5);
        assert_eq!(agg.peak_year_total, 5);
    }

    #[test]
    fn empty_input_is_a_data_error() {
        let err = aggregate(&[], 2020..=2021).unwrap_err();
        assert!(matches!(err, RenderError::Data(_)));
    }

    #[test]
    fn out_of_range_years_are_ignored() {
        let launches = vec![
            launch(1999, "USA", "Atlas", true),
            launch(2050, "USA", "Atlas", true),
            launch(2020, "USA", "Atlas", true),
        ];
        let agg = aggregate(&launches, 2020..=2021).unwrap();
        assert_eq!(agg.by_year[&2020].total(), 1);
        assert_eq!(agg.country_successes("USA"), vec![1, 0]);
    }

    #[test]
    fn failures_split_from_successes() {
        let launches = vec![
            launch(2020, "China", "Long March", true),
            launch(2020, "China", "Long March", false),
            launch(2020, "China", "Long March", false),
        ];
        let agg = aggregate(&launches, 2020..=2020).unwrap();
        assert_eq!(agg.country_successes("China"), vec![1]);
        assert_eq!(agg.country_failures("China"), vec![2]);
        assert_eq!(agg.family_successes("Long March"), vec![1]);
        assert_eq!(agg.family_failures("Long March"), vec![2]);
    }

    #[test]
    fn countries_rank_by_total_successes() {
        let launches = vec![
            launch(2020, "China", "Long March", true),
            launch(2020, "USA", "Falcon", true),
            launch(2021, "USA", "Falcon", true),
        ];
        let agg = aggregate(&launches, 2020..=2021).unwrap();
        assert_eq!(agg.countries[0], "USA");
        assert_eq!(agg.countries[1], "China");
        // Unranked countries still present, in stable (alphabetical) order.
        assert_eq!(agg.countries.len(), COUNTRY_SITES.len());
    }

    #[test]
    fn unattributed_launches_count_in_year_totals_only() {
        let launches = vec![launch(2020, "", "", true)];
        let agg = aggregate(&launches, 2020..=2020).unwrap();
        assert_eq!(agg.by_year[&2020].total(), 1);
        assert!(agg.countries.iter().all(|c| agg.country_successes(c) == vec![0]));
    }
}
