/*!

This is the long-form manual for `poll_stats` and `ssdata`.

## Input format

The input is the `main data` worksheet of the Sight & Sound Excel workbook. The first row contains
the names of the columns. The following columns are read (the other ones are ignored):

* `key` the numeric identifier of the film
* `FilmTitle` the title of the film
* `databaseFilmTitle` the normalized title
* `Year` the year of release. It may be a range such as `1927-1928`.
* `ARR_DirectorArray` the directors, separated by `;`
* `ARR_CountryArray` the production countries, separated by `;`
* `1952rank`, `1952votes`, ..., `2022rank`, `2022votes` the rank and the number of votes in each
  poll

Blank entries and `N/A` in the director and country lists are ignored.

## Output formats

All the documents are indented JSON, encoded in UTF-8.

### `films.json`

A list with one entry per row, in the order of the spreadsheet:

```text
{
  "key": 1,
  "title": "...",
  "normalizedTitle": "...",
  "year": "1958",
  "directors": ["..."],
  "countries": ["..."],
  "pollHistory": [{"year": 1952, "rank": null, "votes": 0}, ...]
}
```

The poll history always has 8 entries. The rank is `null` when the film was not ranked.

### `countries.json`

An object keyed by country name, in alphabetical order:

```text
"France": {
  "continent": "Europe",
  "totalFilms": 412,
  "byPoll": {"1952": {"total": 12, "top100": 4, "top250": 8, "top500": 12}, ...},
  "byDecade": {"1920s": 14, ...}
}
```

Only the films that received votes in a poll are counted in `byPoll`. The rank buckets overlap.
The continent is `Unknown` for the countries that are not in the built-in table.

### `directors.json`

An object keyed by director name, in order of first appearance in the spreadsheet:

```text
"Orson Welles": {
  "totalFilms": 11,
  "films": [{"key": 3, "title": "...", "year": "1941", "rank2022": 3, "votes2022": 288}, ...],
  "pollsAppeared": 8,
  "bestRank": 1
}
```

`films` contains at most 10 films, sorted by number of votes in the 2022 poll.

### `polls.json`

An object keyed by poll year:

```text
"2022": {"year": 2022, "filmsWithVotes": 4486, "topFilm": {"title": "...", "rank": 1, "votes": 215}}
```

## Command line

`ssdata` runs without arguments, reading `data/sight and sound.xlsx` and writing to `public/data`.
See `ssdata --help` for the options. The `--reference` option compares the generated documents with
a previously published set and fails if they differ.

*/
