use crate::config::*;
use crate::parse_name_list;

use log::debug;

/// Projects each row into a film record, in the order of the rows.
///
/// The poll history always contains one entry per poll year. Polls in which the film was not
/// ranked have a null rank, and polls without votes count zero votes.
pub fn build_films(rows: &[FilmRow]) -> Vec<FilmRecord> {
    let res: Vec<FilmRecord> = rows.iter().map(film_record).collect();
    debug!("build_films: {:?} films", res.len());
    res
}

fn film_record(row: &FilmRow) -> FilmRecord {
    let poll_history = row
        .poll_history()
        .map(|(year, entry)| PollHistoryEntry {
            year,
            rank: entry.rank,
            votes: entry.votes_or_zero(),
        })
        .collect();
    FilmRecord {
        key: row.key,
        title: row.title.clone(),
        normalized_title: row.normalized_title.clone(),
        year: row.year.clone(),
        directors: parse_name_list(row.director_list.as_deref()),
        countries: parse_name_list(row.country_list.as_deref()),
        poll_history,
    }
}
