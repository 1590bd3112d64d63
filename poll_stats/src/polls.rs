use log::{debug, warn};

use crate::config::*;

/// Summarizes each poll: how many films received votes, and which film came first.
///
/// When several films share the first rank, the first one in the spreadsheet is reported.
pub fn build_polls(rows: &[FilmRow]) -> PollIndex {
    let entries = POLL_YEARS
        .iter()
        .enumerate()
        .map(|(idx, year)| (year.to_string(), poll_record(rows, idx, *year)))
        .collect();
    OrderedIndex { entries }
}

fn poll_record(rows: &[FilmRow], idx: usize, year: u32) -> PollRecord {
    let films_with_votes = rows.iter().filter(|r| r.polls[idx].has_votes()).count() as u64;
    let mut winners = rows.iter().filter(|r| r.polls[idx].rank == Some(1));
    let top_film = winners.next().map(|row| TopFilm {
        title: row.title.clone(),
        rank: 1,
        votes: row.polls[idx].votes_or_zero(),
    });
    let num_ties = winners.count();
    if num_ties > 0 {
        warn!(
            "build_polls: {}: {} other films share the first rank, keeping {:?}",
            year,
            num_ties,
            top_film.as_ref().map(|f| &f.title)
        );
    }
    debug!(
        "build_polls: {}: {} films with votes, top film: {:?}",
        year, films_with_votes, top_film
    );
    PollRecord {
        year,
        films_with_votes,
        top_film,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_rows::*;

    #[test]
    fn one_record_per_poll() {
        let polls = build_polls(&[]);
        let years: Vec<&str> = polls.iter().map(|(y, _)| y.as_str()).collect();
        assert_eq!(
            years,
            vec!["1952", "1962", "1972", "1982", "1992", "2002", "2012", "2022"]
        );
        for (_, p) in polls.iter() {
            assert_eq!(p.films_with_votes, 0);
            assert_eq!(p.top_film, None);
        }
    }

    #[test]
    fn counts_and_winner() {
        let rows = vec![
            with_poll(film(1, "Bicycle Thieves", Some("1948")), 1952, Some(1), Some(25)),
            with_poll(film(2, "City Lights", Some("1931")), 1952, Some(2), Some(19)),
            with_poll(film(3, "Ranked, no votes", None), 1952, Some(1), None),
            with_poll(film(4, "Zero votes", None), 1952, None, Some(0)),
        ];
        let polls = build_polls(&rows);
        let p1952 = polls.get("1952").unwrap();
        assert_eq!(p1952.year, 1952);
        assert_eq!(p1952.films_with_votes, 2);
        assert_eq!(
            p1952.top_film,
            Some(TopFilm {
                title: "Bicycle Thieves".to_string(),
                rank: 1,
                votes: 25
            })
        );
        assert_eq!(polls.get("1962").unwrap().top_film, None);
    }

    #[test]
    fn serialized_layout() {
        let rows = vec![with_poll(film(1, "Vertigo", Some("1958")), 2012, Some(1), Some(191))];
        let js = serde_json::to_value(build_polls(&rows)).unwrap();
        assert_eq!(js["2012"]["year"], 2012);
        assert_eq!(js["2012"]["filmsWithVotes"], 1);
        assert_eq!(js["2012"]["topFilm"]["title"], "Vertigo");
        assert_eq!(js["2012"]["topFilm"]["rank"], 1);
        assert_eq!(js["2012"]["topFilm"]["votes"], 191);
        assert_eq!(js["2022"]["topFilm"], serde_json::Value::Null);
    }
}
