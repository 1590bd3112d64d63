// Progress and summaries printed on the console. This is not part of the documents.

use humansize::{format_size, FixedAt, FormatSizeOptions, BINARY};
use poll_stats::{CountryRecord, DirectorIndex, DirectorRecord};

use std::collections::BTreeMap;

use crate::convert::io_json::WrittenDocument;

pub const TOP_N: usize = 10;

const BANNER_WIDTH: usize = 60;

pub fn print_banner(title: &str) {
    let rule = "=".repeat(BANNER_WIDTH);
    println!("{}", rule);
    println!("{}", title);
    println!("{}", rule);
}

pub fn print_step(file_name: &str) {
    println!("\nGenerating {}...", file_name);
}

pub fn print_written(doc: &WrittenDocument, label: &str, count: usize, size_unit: FixedAt) {
    println!("✓ Generated {}", doc.path.display());
    println!("  Total {}: {}", label, thousands(count as u64));
    println!(
        "  File size: {} bytes ({})",
        thousands(doc.size),
        human_size(doc.size, size_unit)
    );
}

/// 1234567 -> `1,234,567`
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut res = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, c) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            res.push(',');
        }
        res.push(c);
    }
    res
}

/// The size in binary units, always expressed in the given unit (`1.5 MiB`, `812.3 KiB`).
pub fn human_size(bytes: u64, unit: FixedAt) -> String {
    let options = FormatSizeOptions::from(BINARY)
        .fixed_at(Some(unit))
        .decimal_places(1);
    format_size(bytes, options)
}

/// The countries with the most films. Ties keep the alphabetical order.
pub fn top_countries(
    countries: &BTreeMap<String, CountryRecord>,
    n: usize,
) -> Vec<(&String, &CountryRecord)> {
    let mut sorted: Vec<(&String, &CountryRecord)> = countries.iter().collect();
    sorted.sort_by(|(_, c1), (_, c2)| c2.total_films.cmp(&c1.total_films));
    sorted.truncate(n);
    sorted
}

/// The directors with the most films. Ties keep the order of first appearance.
pub fn top_directors(directors: &DirectorIndex, n: usize) -> Vec<(&String, &DirectorRecord)> {
    let mut sorted: Vec<(&String, &DirectorRecord)> =
        directors.iter().map(|(name, d)| (name, d)).collect();
    sorted.sort_by(|(_, d1), (_, d2)| d2.total_films.cmp(&d1.total_films));
    sorted.truncate(n);
    sorted
}

pub fn country_line(position: usize, name: &str, country: &CountryRecord) -> String {
    format!(
        "    {:2}. {:25} - {:4} films ({})",
        position, name, country.total_films, country.continent
    )
}

pub fn director_line(position: usize, name: &str, director: &DirectorRecord) -> String {
    let best_rank = director
        .best_rank
        .map(|r| r.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    format!(
        "    {:2}. {:35} - {:3} films (best rank: {})",
        position, name, director.total_films, best_rank
    )
}

pub fn print_top_countries(countries: &BTreeMap<String, CountryRecord>, n: usize) {
    println!("\n  Top {} countries by total films:", n);
    for (idx, (name, c)) in top_countries(countries, n).iter().enumerate() {
        println!("{}", country_line(idx + 1, name, c));
    }
}

pub fn print_top_directors(directors: &DirectorIndex, n: usize) {
    println!("\n  Top {} directors by film count:", n);
    for (idx, (name, d)) in top_directors(directors, n).iter().enumerate() {
        println!("{}", director_line(idx + 1, name, d));
    }
}
