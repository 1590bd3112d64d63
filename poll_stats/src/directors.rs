use std::collections::{BTreeSet, HashMap};

use log::debug;

use crate::config::*;
use crate::parse_name_list;

#[derive(Debug, Default)]
struct DirectorAccumulator {
    films: Vec<DirectorFilm>,
    // Years in which at least one film got votes.
    polls_appeared: BTreeSet<u32>,
    best_rank: Option<u32>,
}

impl DirectorAccumulator {
    fn add(&mut self, film: &DirectorFilm, row: &FilmRow) {
        self.films.push(film.clone());
        for (year, entry) in row.poll_history() {
            if entry.has_votes() {
                self.polls_appeared.insert(year);
            }
            if let Some(rank) = entry.rank {
                self.best_rank = Some(self.best_rank.map_or(rank, |r| r.min(rank)));
            }
        }
    }

    fn finish(mut self) -> DirectorRecord {
        let total_films = self.films.len() as u64;
        // Stable: films with the same number of votes keep the order of the spreadsheet.
        self.films.sort_by(|f1, f2| f2.latest_votes.cmp(&f1.latest_votes));
        self.films.truncate(MAX_FILMS_PER_DIRECTOR);
        DirectorRecord {
            total_films,
            films: self.films,
            polls_appeared: self.polls_appeared.len() as u64,
            best_rank: self.best_rank,
        }
    }
}

fn director_film(row: &FilmRow) -> DirectorFilm {
    let latest = row.latest_poll();
    DirectorFilm {
        key: row.key,
        title: row.title.clone(),
        year: row.year.clone(),
        latest_rank: latest.rank,
        latest_votes: latest.votes_or_zero(),
    }
}

/// Groups the films by director.
///
/// Each director keeps the films with the most votes in the latest poll (at most
/// [MAX_FILMS_PER_DIRECTOR]), while `total_films` reports the full count. The best rank is the
/// lowest rank of any of their films in any poll.
///
/// A director listed twice for the same film gets the film twice.
///
/// The directors are returned in order of first appearance.
pub fn build_directors(rows: &[FilmRow]) -> DirectorIndex {
    let mut order: Vec<String> = Vec::new();
    let mut accumulators: HashMap<String, DirectorAccumulator> = HashMap::new();

    for row in rows.iter() {
        let directors = parse_name_list(row.director_list.as_deref());
        if directors.is_empty() {
            continue;
        }
        let film = director_film(row);
        for director in directors {
            let acc = accumulators.entry(director.clone()).or_insert_with(|| {
                order.push(director.clone());
                DirectorAccumulator::default()
            });
            acc.add(&film, row);
        }
    }

    debug!("build_directors: {:?} directors", order.len());

    let mut entries: Vec<(String, DirectorRecord)> = Vec::with_capacity(order.len());
    for name in order {
        if let Some(acc) = accumulators.remove(&name) {
            entries.push((name, acc.finish()));
        }
    }
    OrderedIndex { entries }
}
