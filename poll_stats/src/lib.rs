/*!
Aggregations over the Sight & Sound critics' poll.

The poll has been held every ten years since 1952. The source spreadsheet contains one row per film
that received at least one vote in one of the polls. This crate turns these rows into four
documents, each of them tailored to one view of the web application:

* the films, with their full poll history ([build_films])
* the production countries, with counts per poll and per decade ([build_countries])
* the directors, with their best ranked films ([build_directors])
* the polls themselves ([build_polls])

All the transforms are pure functions over a slice of [FilmRow]. They do not fail: missing or
malformed optional values in a row are treated as absent.

```
use poll_stats::*;

let row = FilmRow {
    key: 1,
    title: "Jeanne Dielman, 23 quai du Commerce, 1080 Bruxelles".to_string(),
    normalized_title: "jeanne dielman".to_string(),
    year: Some("1975".to_string()),
    director_list: Some("Chantal Akerman".to_string()),
    country_list: Some("Belgium; France".to_string()),
    polls: Default::default(),
};
let dataset = build_dataset(&[row]);
assert_eq!(dataset.films.len(), 1);
assert_eq!(dataset.countries["Belgium"].by_decade["1970s"], 1);
assert_eq!(dataset.directors.get("Chantal Akerman").unwrap().total_films, 1);
```
*/

mod config;
mod continents;
mod countries;
mod directors;
mod films;
pub mod manual;
mod polls;

use log::{debug, info};

pub use crate::config::*;
pub use crate::continents::continent_of;
pub use crate::countries::build_countries;
pub use crate::directors::build_directors;
pub use crate::films::build_films;
pub use crate::polls::build_polls;

/// Splits a delimited list of names, as found in the director and country columns.
///
/// Names are trimmed. Empty names and the `N/A` placeholder are dropped. Duplicates are kept.
///
/// ```
/// let names = poll_stats::parse_name_list(Some(" France; Italy;;N/A;France"));
/// assert_eq!(names, vec!["France", "Italy", "France"]);
/// ```
pub fn parse_name_list(raw: Option<&str>) -> Vec<String> {
    match raw {
        Some(s) => s
            .split(LIST_DELIMITER)
            .map(|name| name.trim())
            .filter(|name| !name.is_empty() && *name != MISSING_NAME_SENTINEL)
            .map(|name| name.to_string())
            .collect(),
        None => Vec::new(),
    }
}

/// The first year of a release year, which may be a range (`1927-1928`).
///
/// Returns None when the year cannot be understood.
pub fn start_year(year: &str) -> Option<i64> {
    let first = year.split('-').next().unwrap_or(year).trim();
    first.parse::<i64>().ok()
}

/// The decade of a release year, for example `1920s` for `1927-1928`.
pub fn decade_label(year: &str) -> Option<String> {
    let y = start_year(year)?;
    Some(format!("{}s", y.div_euclid(10) * 10))
}

/// Runs all the transforms over the same rows.
pub fn build_dataset(rows: &[FilmRow]) -> PollDataset {
    info!("Processing {:?} films", rows.len());
    let films = build_films(rows);
    debug!("build_dataset: {:?} film records", films.len());
    let countries = build_countries(rows);
    debug!("build_dataset: {:?} countries", countries.len());
    let directors = build_directors(rows);
    debug!("build_dataset: {:?} directors", directors.len());
    let polls = build_polls(rows);
    PollDataset {
        films,
        countries,
        directors,
        polls,
    }
}

#[cfg(test)]
pub(crate) mod test_rows {
    use crate::config::*;

    /// A row with no poll data, to be completed by the tests.
    pub fn film(key: i64, title: &str, year: Option<&str>) -> FilmRow {
        FilmRow {
            key,
            title: title.to_string(),
            normalized_title: title.to_lowercase(),
            year: year.map(|s| s.to_string()),
            director_list: None,
            country_list: None,
            polls: [PollEntry::default(); NUM_POLLS],
        }
    }

    pub fn with_directors(mut row: FilmRow, directors: &str) -> FilmRow {
        row.director_list = Some(directors.to_string());
        row
    }

    pub fn with_countries(mut row: FilmRow, countries: &str) -> FilmRow {
        row.country_list = Some(countries.to_string());
        row
    }

    pub fn with_poll(mut row: FilmRow, year: u32, rank: Option<u32>, votes: Option<u64>) -> FilmRow {
        let idx = POLL_YEARS.iter().position(|y| *y == year).unwrap();
        row.polls[idx] = PollEntry { rank, votes };
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_list_drops_blanks_and_placeholder() {
        assert_eq!(
            parse_name_list(Some("Jean-Luc Godard; ;N/A; Anne-Marie Miéville ")),
            vec!["Jean-Luc Godard", "Anne-Marie Miéville"]
        );
        assert!(parse_name_list(Some("")).is_empty());
        assert!(parse_name_list(Some(" ; N/A")).is_empty());
        assert!(parse_name_list(None).is_empty());
    }

    #[test]
    fn name_list_keeps_duplicates() {
        assert_eq!(
            parse_name_list(Some("France; Italy;France")),
            vec!["France", "Italy", "France"]
        );
    }

    #[test]
    fn decades() {
        assert_eq!(decade_label("1959"), Some("1950s".to_string()));
        assert_eq!(decade_label("1960"), Some("1960s".to_string()));
        assert_eq!(decade_label("1927-1928"), Some("1920s".to_string()));
        assert_eq!(decade_label(" 2001 "), Some("2000s".to_string()));
        assert_eq!(decade_label("c. 1920"), None);
        assert_eq!(decade_label(""), None);
        assert_eq!(decade_label("1975.5"), None);
    }

    #[test]
    fn start_years() {
        assert_eq!(start_year("1927-1928"), Some(1927));
        assert_eq!(start_year("1927"), Some(1927));
        assert_eq!(start_year("-1927"), None);
    }

    #[test]
    fn dataset_is_deterministic() {
        use crate::test_rows::*;
        let _ = env_logger::builder().is_test(true).try_init();
        let vertigo = with_directors(film(1, "Vertigo", Some("1958")), "Alfred Hitchcock");
        let tokyo_story = with_directors(film(2, "Tokyo Story", Some("1953")), "Yasujirō Ozu");
        let rows = vec![
            with_poll(with_countries(vertigo, "United States"), 2012, Some(1), Some(191)),
            with_poll(with_countries(tokyo_story, "Japan"), 2022, Some(4), Some(107)),
        ];
        let first = build_dataset(&rows);
        let second = build_dataset(&rows);
        assert_eq!(first, second);
        let js1 = serde_json::to_string_pretty(&first.directors).unwrap();
        let js2 = serde_json::to_string_pretty(&second.directors).unwrap();
        assert_eq!(js1, js2);
        // Non-ASCII names are written as-is.
        assert!(js1.contains("Yasujirō Ozu"));
    }
}
