pub mod config_reader;
pub mod io_json;
pub mod io_xlsx;
pub mod report;

use humansize::FixedAt;
use log::info;
use snafu::Snafu;

use std::collections::BTreeMap;
use std::path::Path;

use poll_stats::*;
use serde::Serialize;

use crate::convert::config_reader::ConvertSettings;

pub const FILMS_FILE: &str = "films.json";
pub const COUNTRIES_FILE: &str = "countries.json";
pub const DIRECTORS_FILE: &str = "directors.json";
pub const POLLS_FILE: &str = "polls.json";

#[derive(Debug, Snafu)]
pub enum ConvertError {
    #[snafu(display("Error opening file {path}"))]
    OpeningExcel {
        source: calamine::XlsxError,
        path: String,
    },
    #[snafu(display("Worksheet {worksheet:?} not found in {path}"))]
    MissingWorksheet { path: String, worksheet: String },
    #[snafu(display("The worksheet is empty: no header row"))]
    EmptyExcel {},
    #[snafu(display("Column {column:?} not found in the header row"))]
    MissingColumn { column: String },
    #[snafu(display("Line {lineno}: the key must be a number, found {content}"))]
    InvalidKey { lineno: u64, content: String },
    #[snafu(display("Error reading settings file {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing settings file {path}"))]
    ParsingJson {
        source: serde_json::Error,
        path: String,
    },
    #[snafu(display("Could not create the output directory {path}"))]
    CreatingOutputDir {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Could not write {path}"))]
    WritingOutput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Could not serialize {name}"))]
    SerializingJson {
        source: serde_json::Error,
        name: String,
    },
    #[snafu(display("Could not read the reference file {path}"))]
    ReadingReference {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("The generated documents differ from the reference: {files}"))]
    ReferenceMismatch { files: String },
}

pub type ConvertResult<T> = Result<T, ConvertError>;

/// The content of the documents, as written to the output directory.
pub type GeneratedDocuments = Vec<(&'static str, String)>;

fn publish<T: Serialize>(
    output_dir: &Path,
    file_name: &'static str,
    value: &T,
    label: &str,
    count: usize,
    size_unit: FixedAt,
    generated: &mut GeneratedDocuments,
) -> ConvertResult<()> {
    let text = io_json::render_document(file_name, value)?;
    let written = io_json::write_document(output_dir, file_name, &text)?;
    report::print_written(&written, label, count, size_unit);
    generated.push((file_name, text));
    Ok(())
}

/// Runs all the transforms and writes one document per transform.
///
/// Each document is written as soon as its transform is done. If a later step fails, the documents
/// written so far are left in place.
pub fn publish_dataset(rows: &[FilmRow], output_dir: &Path) -> ConvertResult<GeneratedDocuments> {
    io_json::ensure_output_dir(output_dir)?;
    let mut generated: GeneratedDocuments = Vec::new();

    report::print_step(FILMS_FILE);
    let films: Vec<FilmRecord> = build_films(rows);
    publish(
        output_dir,
        FILMS_FILE,
        &films,
        "films",
        films.len(),
        FixedAt::Mega,
        &mut generated,
    )?;

    report::print_step(COUNTRIES_FILE);
    let countries: BTreeMap<String, CountryRecord> = build_countries(rows);
    publish(
        output_dir,
        COUNTRIES_FILE,
        &countries,
        "countries",
        countries.len(),
        FixedAt::Kilo,
        &mut generated,
    )?;
    report::print_top_countries(&countries, report::TOP_N);

    report::print_step(DIRECTORS_FILE);
    let directors: DirectorIndex = build_directors(rows);
    publish(
        output_dir,
        DIRECTORS_FILE,
        &directors,
        "directors",
        directors.len(),
        FixedAt::Kilo,
        &mut generated,
    )?;
    report::print_top_directors(&directors, report::TOP_N);

    report::print_step(POLLS_FILE);
    let polls: PollIndex = build_polls(rows);
    publish(
        output_dir,
        POLLS_FILE,
        &polls,
        "polls",
        polls.len(),
        FixedAt::Kilo,
        &mut generated,
    )?;

    Ok(generated)
}

pub fn run_conversion(settings: &ConvertSettings) -> ConvertResult<()> {
    info!("settings: {:?}", settings);
    report::print_banner("Sight & Sound Data Conversion");

    println!("\nReading {}...", settings.input_path.display());
    let rows = io_xlsx::read_film_rows(&settings.input_path, &settings.worksheet_name)?;
    println!("Loaded {} films from Excel", report::thousands(rows.len() as u64));

    let generated = publish_dataset(&rows, &settings.output_directory)?;

    println!();
    report::print_banner("✓ All JSON files generated successfully!");

    // The reference documents, if provided for comparison
    if let Some(reference_dir) = &settings.reference_directory {
        io_json::compare_with_reference(reference_dir, &generated)?;
        println!(
            "✓ The generated files match the reference in {}",
            reference_dir.display()
        );
    }
    Ok(())
}
