use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use crate::config::*;
use crate::continents::continent_of;
use crate::{decade_label, parse_name_list};

const RANK_THRESHOLDS: [u32; 3] = [100, 250, 500];

// Running totals for one country.
#[derive(Debug, Default)]
struct CountryAccumulator {
    total_films: u64,
    by_poll: [CountryPollStats; NUM_POLLS],
    by_decade: BTreeMap<String, u64>,
}

impl CountryAccumulator {
    fn add(&mut self, row: &FilmRow, decade: Option<&String>) {
        self.total_films += 1;
        for (stats, entry) in self.by_poll.iter_mut().zip(row.polls.iter()) {
            if !entry.has_votes() {
                continue;
            }
            stats.total += 1;
            if let Some(rank) = entry.rank {
                let [t100, t250, t500] = RANK_THRESHOLDS;
                if rank <= t100 {
                    stats.top100 += 1;
                }
                if rank <= t250 {
                    stats.top250 += 1;
                }
                if rank <= t500 {
                    stats.top500 += 1;
                }
            }
        }
        if let Some(d) = decade {
            *self.by_decade.entry(d.clone()).or_insert(0) += 1;
        }
    }

    fn finish(self, country: &str) -> CountryRecord {
        let by_poll = POLL_YEARS
            .iter()
            .zip(self.by_poll.iter())
            .map(|(year, stats)| (year.to_string(), *stats))
            .collect();
        CountryRecord {
            continent: continent_of(country).to_string(),
            total_films: self.total_films,
            by_poll,
            by_decade: self.by_decade,
        }
    }
}

/// Groups the films by production country.
///
/// A film counts once for each distinct country in its list. In each poll, only the films that
/// received votes are counted, and the rank buckets overlap (a film ranked 50 counts in
/// `top100`, `top250` and `top500`). Films without a usable release year do not appear in the
/// decade breakdown.
///
/// The countries are returned in alphabetical order.
pub fn build_countries(rows: &[FilmRow]) -> BTreeMap<String, CountryRecord> {
    let mut accumulators: BTreeMap<String, CountryAccumulator> = BTreeMap::new();
    for row in rows.iter() {
        // Membership: a country listed twice for the same film is counted once.
        let countries: BTreeSet<String> = parse_name_list(row.country_list.as_deref())
            .into_iter()
            .collect();
        if countries.is_empty() {
            continue;
        }
        let decade = row.year.as_deref().and_then(decade_label);
        if decade.is_none() {
            debug!(
                "build_countries: key {:?}: no decade for year {:?}",
                row.key, row.year
            );
        }
        for country in countries {
            accumulators
                .entry(country)
                .or_default()
                .add(row, decade.as_ref());
        }
    }

    accumulators
        .into_iter()
        .map(|(country, acc)| {
            let record = acc.finish(&country);
            (country, record)
        })
        .collect()
}
