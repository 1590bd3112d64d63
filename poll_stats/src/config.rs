use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

// ********* Constants ***********

pub const NUM_POLLS: usize = 8;

/// The years in which the poll was held, in chronological order.
///
/// Every per-film history and every per-country breakdown follows this order.
pub const POLL_YEARS: [u32; NUM_POLLS] = [1952, 1962, 1972, 1982, 1992, 2002, 2012, 2022];

/// The most recent poll. The director filmographies are ranked by the votes of this poll.
pub const LATEST_POLL_YEAR: u32 = 2022;

/// Separator used in the director and country columns.
pub const LIST_DELIMITER: char = ';';

/// Placeholder written in the spreadsheet when a director or a country is unknown.
pub const MISSING_NAME_SENTINEL: &str = "N/A";

/// Continent reported for a country that is not in the lookup table.
pub const UNKNOWN_CONTINENT: &str = "Unknown";

/// Maximum number of films kept in the filmography of a director.
pub const MAX_FILMS_PER_DIRECTOR: usize = 10;

// ********* Input data structures ***********

/// The outcome of a film in one poll.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub struct PollEntry {
    /// Position in the ranking, if the film was ranked.
    pub rank: Option<u32>,
    /// Number of critics that voted for the film, if recorded.
    pub votes: Option<u64>,
}

impl PollEntry {
    pub fn votes_or_zero(&self) -> u64 {
        self.votes.unwrap_or(0)
    }

    /// A film is considered part of a poll when at least one critic voted for it.
    pub fn has_votes(&self) -> bool {
        self.votes_or_zero() > 0
    }
}

/// One row of the source spreadsheet.
///
/// The director and country lists are kept in their raw, delimited form. They are parsed
/// by the transforms with [crate::parse_name_list].
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct FilmRow {
    pub key: i64,
    pub title: String,
    pub normalized_title: String,
    /// Release year. It may be a range such as `1927-1928`.
    pub year: Option<String>,
    pub director_list: Option<String>,
    pub country_list: Option<String>,
    /// One entry per poll, in the order of [POLL_YEARS].
    pub polls: [PollEntry; NUM_POLLS],
}

impl FilmRow {
    /// The poll entry of the given year. Unknown years have no votes and no rank.
    pub fn poll(&self, year: u32) -> PollEntry {
        POLL_YEARS
            .iter()
            .position(|y| *y == year)
            .map(|idx| self.polls[idx])
            .unwrap_or_default()
    }

    pub fn latest_poll(&self) -> PollEntry {
        self.poll(LATEST_POLL_YEAR)
    }

    /// Iterates over (year, entry) pairs in chronological order.
    pub fn poll_history(&self) -> impl Iterator<Item = (u32, PollEntry)> + '_ {
        POLL_YEARS.iter().cloned().zip(self.polls.iter().cloned())
    }
}

// ******** Output data structures *********

#[derive(Eq, PartialEq, Debug, Clone, Serialize)]
pub struct PollHistoryEntry {
    pub year: u32,
    pub rank: Option<u32>,
    pub votes: u64,
}

/// A film, as published in `films.json`.
#[derive(Eq, PartialEq, Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmRecord {
    pub key: i64,
    pub title: String,
    pub normalized_title: String,
    pub year: Option<String>,
    pub directors: Vec<String>,
    pub countries: Vec<String>,
    pub poll_history: Vec<PollHistoryEntry>,
}

/// How many films of a country took part in one poll, and how well they ranked.
///
/// The thresholds overlap: a film ranked 50 counts in all three buckets.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryPollStats {
    pub total: u64,
    pub top100: u64,
    pub top250: u64,
    pub top500: u64,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRecord {
    pub continent: String,
    pub total_films: u64,
    /// Keyed by poll year.
    pub by_poll: BTreeMap<String, CountryPollStats>,
    /// Keyed by decade label, for example `1950s`.
    pub by_decade: BTreeMap<String, u64>,
}

/// A film in the filmography of a director. Only the most recent poll is reported.
#[derive(Eq, PartialEq, Debug, Clone, Serialize)]
pub struct DirectorFilm {
    pub key: i64,
    pub title: String,
    pub year: Option<String>,
    #[serde(rename = "rank2022")]
    pub latest_rank: Option<u32>,
    #[serde(rename = "votes2022")]
    pub latest_votes: u64,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectorRecord {
    /// Number of films before the filmography got truncated.
    pub total_films: u64,
    pub films: Vec<DirectorFilm>,
    pub polls_appeared: u64,
    pub best_rank: Option<u32>,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize)]
pub struct TopFilm {
    pub title: String,
    pub rank: u32,
    pub votes: u64,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PollRecord {
    pub year: u32,
    pub films_with_votes: u64,
    pub top_film: Option<TopFilm>,
}

/// A list of named entries that serializes to a JSON object, keeping the order of the list.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct OrderedIndex<T> {
    pub entries: Vec<(String, T)>,
}

impl<T> OrderedIndex<T> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, T)> {
        self.entries.iter()
    }
}

impl<T: Serialize> Serialize for OrderedIndex<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(k, v)| (k, v)))
    }
}

/// Directors, in order of first appearance in the spreadsheet.
pub type DirectorIndex = OrderedIndex<DirectorRecord>;

/// Polls, in chronological order.
pub type PollIndex = OrderedIndex<PollRecord>;

/// All the documents produced from one spreadsheet.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct PollDataset {
    pub films: Vec<FilmRecord>,
    pub countries: BTreeMap<String, CountryRecord>,
    pub directors: DirectorIndex,
    pub polls: PollIndex,
}
