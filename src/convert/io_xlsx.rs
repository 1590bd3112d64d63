// Primitives for reading the poll workbook.

use calamine::{open_workbook, DataType, Range, Reader, Xlsx};
use log::{debug, info};
use poll_stats::{FilmRow, PollEntry, NUM_POLLS, POLL_YEARS};
use snafu::{OptionExt, ResultExt};

use std::collections::HashMap;
use std::path::Path;

use crate::convert::*;

pub const KEY_COLUMN: &str = "key";
pub const TITLE_COLUMN: &str = "FilmTitle";
pub const NORMALIZED_TITLE_COLUMN: &str = "databaseFilmTitle";
pub const YEAR_COLUMN: &str = "Year";
pub const DIRECTORS_COLUMN: &str = "ARR_DirectorArray";
pub const COUNTRIES_COLUMN: &str = "ARR_CountryArray";

static EMPTY_CELL: DataType = DataType::Empty;

pub fn rank_column(year: u32) -> String {
    format!("{}rank", year)
}

pub fn votes_column(year: u32) -> String {
    format!("{}votes", year)
}

/// Reads the films of the given worksheet.
pub fn read_film_rows(path: &Path, worksheet_name: &str) -> ConvertResult<Vec<FilmRow>> {
    let wrange = get_range(path, worksheet_name)?;
    info!(
        "read_film_rows: {:?} worksheet {:?}: {:?} rows x {:?} columns",
        path.display(),
        worksheet_name,
        wrange.height(),
        wrange.width()
    );
    parse_rows(wrange.rows())
}

fn get_range(path: &Path, worksheet_name: &str) -> ConvertResult<Range<DataType>> {
    let path_s = path.display().to_string();
    let mut workbook: Xlsx<_> = open_workbook(path).context(OpeningExcelSnafu {
        path: path_s.clone(),
    })?;
    let wrange = workbook
        .worksheet_range(worksheet_name)
        .context(MissingWorksheetSnafu {
            path: path_s.clone(),
            worksheet: worksheet_name,
        })?
        .context(OpeningExcelSnafu { path: path_s })?;
    Ok(wrange)
}

/// The position of each column that is read, found from the header row.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ColumnIndexes {
    key: usize,
    title: usize,
    normalized_title: usize,
    year: usize,
    directors: usize,
    countries: usize,
    // Indexed like POLL_YEARS
    ranks: Vec<usize>,
    votes: Vec<usize>,
}

impl ColumnIndexes {
    /// Finds all the required columns. The other columns are ignored.
    pub fn from_header(header: &[DataType]) -> ConvertResult<ColumnIndexes> {
        let mut col_names: HashMap<String, usize> = HashMap::new();
        for (idx, cell) in header.iter().enumerate() {
            if let Some(name) = cell_text(cell) {
                // A repeated name refers to its first column.
                col_names.entry(name.trim().to_string()).or_insert(idx);
            }
        }
        debug!("from_header: col_names: {:?}", col_names);

        let find = |name: &str| -> ConvertResult<usize> {
            col_names
                .get(name)
                .cloned()
                .context(MissingColumnSnafu { column: name })
        };

        let mut ranks: Vec<usize> = Vec::new();
        let mut votes: Vec<usize> = Vec::new();
        for year in POLL_YEARS.iter() {
            ranks.push(find(&rank_column(*year))?);
            votes.push(find(&votes_column(*year))?);
        }

        Ok(ColumnIndexes {
            key: find(KEY_COLUMN)?,
            title: find(TITLE_COLUMN)?,
            normalized_title: find(NORMALIZED_TITLE_COLUMN)?,
            year: find(YEAR_COLUMN)?,
            directors: find(DIRECTORS_COLUMN)?,
            countries: find(COUNTRIES_COLUMN)?,
            ranks,
            votes,
        })
    }
}

/// Converts the rows of a worksheet. The first row must be the header.
///
/// Rows that are completely empty are skipped.
pub fn parse_rows<'a, I>(mut rows: I) -> ConvertResult<Vec<FilmRow>>
where
    I: Iterator<Item = &'a [DataType]>,
{
    let header = rows.next().context(EmptyExcelSnafu {})?;
    let cols = ColumnIndexes::from_header(header)?;
    debug!("parse_rows: columns: {:?}", cols);

    let mut res: Vec<FilmRow> = Vec::new();
    for (idx, row) in rows.enumerate() {
        // The header is the first line, and lines start at 1 in the spreadsheet.
        let lineno = (idx + 2) as u64;
        if row.iter().all(|c| matches!(c, DataType::Empty)) {
            debug!("parse_rows: line {:?}: empty, skipping", lineno);
            continue;
        }
        res.push(parse_row(row, &cols, lineno)?);
    }
    Ok(res)
}

fn parse_row(row: &[DataType], cols: &ColumnIndexes, lineno: u64) -> ConvertResult<FilmRow> {
    let cell = |idx: usize| row.get(idx).unwrap_or(&EMPTY_CELL);

    let key_cell = cell(cols.key);
    let key = cell_number(key_cell)
        .filter(|x| x.is_finite())
        .map(|x| x as i64)
        .context(InvalidKeySnafu {
            lineno,
            content: format!("{:?}", key_cell),
        })?;

    let mut polls = [PollEntry::default(); NUM_POLLS];
    for (i, entry) in polls.iter_mut().enumerate() {
        *entry = PollEntry {
            rank: cell_rank(cell(cols.ranks[i])),
            votes: cell_count(cell(cols.votes[i])),
        };
    }

    let fr = FilmRow {
        key,
        title: cell_text(cell(cols.title)).unwrap_or_default(),
        normalized_title: cell_text(cell(cols.normalized_title)).unwrap_or_default(),
        year: cell_text(cell(cols.year)).filter(|s| !s.trim().is_empty()),
        director_list: cell_text(cell(cols.directors)),
        country_list: cell_text(cell(cols.countries)),
        polls,
    };
    debug!("parse_row: line {:?}: {:?}", lineno, fr);
    Ok(fr)
}

/// The text content of a cell. Whole numbers are written without decimals (`1927.0` -> `1927`).
fn cell_text(cell: &DataType) -> Option<String> {
    match cell {
        DataType::String(s) => Some(s.clone()),
        DataType::Float(f) if f.is_finite() && f.fract() == 0.0 => Some(format!("{}", *f as i64)),
        DataType::Float(f) => Some(f.to_string()),
        DataType::Int(i) => Some(i.to_string()),
        DataType::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn cell_number(cell: &DataType) -> Option<f64> {
    match cell {
        DataType::Float(f) => Some(*f),
        DataType::Int(i) => Some(*i as f64),
        DataType::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

// Vote counts. Values that are not whole non-negative numbers are treated as missing.
fn cell_count(cell: &DataType) -> Option<u64> {
    cell_number(cell)
        .filter(|x| x.is_finite() && *x >= 0.0 && x.fract() == 0.0 && *x < u64::MAX as f64)
        .map(|x| x as u64)
}

fn cell_rank(cell: &DataType) -> Option<u32> {
    cell_count(cell).and_then(|x| u32::try_from(x).ok())
}
