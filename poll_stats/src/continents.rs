use crate::config::UNKNOWN_CONTINENT;

// Latin America is reported separately from North America.
// Countries that no longer exist are attached to their historical continent.
const CONTINENTS: &[(&str, &[&str])] = &[
    (
        "North America",
        &[
            "United States",
            "Canada",
            "Mexico",
            "Cuba",
            "Dominican Republic",
            "Greenland",
            "Haiti",
            "Jamaica",
            "Martinique",
        ],
    ),
    (
        "Latin America",
        &[
            "Argentina",
            "Brazil",
            "Chile",
            "Colombia",
            "Peru",
            "Bolivia",
            "Uruguay",
            "Venezuela",
            "Ecuador",
            "Paraguay",
            "Guatemala",
            "Nicaragua",
            "Costa Rica",
            "Panama",
            "El Salvador",
            "Guyana",
        ],
    ),
    (
        "Europe",
        &[
            "United Kingdom",
            "France",
            "Germany",
            "Italy",
            "Spain",
            "Poland",
            "Russia",
            "Sweden",
            "Denmark",
            "Norway",
            "Finland",
            "Netherlands",
            "Belgium",
            "Austria",
            "Switzerland",
            "Greece",
            "Portugal",
            "Czech Republic",
            "Hungary",
            "Romania",
            "Serbia",
            "Croatia",
            "Ireland",
            "Slovakia",
            "Bulgaria",
            "Slovenia",
            "Lithuania",
            "Latvia",
            "Estonia",
            "Iceland",
            "Bosnia and Herzegovina",
            "Albania",
            "Macedonia",
            "Montenegro",
            "Kosovo",
            "Belarus",
            "Ukraine",
            "Moldova",
            "Armenia",
            "Georgia",
            "Luxembourg",
            "Malta",
            "Cyprus",
            "Faroe Islands",
            "West Germany",
            "East Germany",
            "Soviet Union",
            "Yugoslavia",
            "Czechoslovakia",
        ],
    ),
    (
        "Asia",
        &[
            "Japan",
            "China",
            "South Korea",
            "India",
            "Iran",
            "Taiwan",
            "Hong Kong",
            "Thailand",
            "Vietnam",
            "Indonesia",
            "Philippines",
            "Malaysia",
            "Singapore",
            "Pakistan",
            "Bangladesh",
            "Afghanistan",
            "Lebanon",
            "Israel",
            "Palestine",
            "Syria",
            "Iraq",
            "Jordan",
            "Saudi Arabia",
            "Turkey",
            "Kazakhstan",
            "Uzbekistan",
            "Cambodia",
            "Laos",
            "Myanmar",
            "Sri Lanka",
            "Nepal",
            "Mongolia",
            "North Korea",
            "Kyrgyzstan",
            "Tajikistan",
        ],
    ),
    (
        "Africa",
        &[
            "South Africa",
            "Egypt",
            "Nigeria",
            "Kenya",
            "Morocco",
            "Algeria",
            "Tunisia",
            "Senegal",
            "Mali",
            "Burkina Faso",
            "Cameroon",
            "Chad",
            "Angola",
            "Zimbabwe",
            "Ghana",
            "Ethiopia",
            "Democratic Republic of the Congo",
            "Mauritania",
            "Ivory Coast",
            "Sudan",
            "Niger",
            "Guinea-Bissau",
            "Lesotho",
            "Mozambique",
            "Rwanda",
            "Somalia",
        ],
    ),
    ("Oceania", &["Australia", "New Zealand", "Fiji"]),
];

/// The continent of a country, as reported in `countries.json`.
///
/// The match is exact (case and spelling). Countries that are not in the table are
/// attached to the `Unknown` continent.
///
/// ```
/// assert_eq!(poll_stats::continent_of("Senegal"), "Africa");
/// assert_eq!(poll_stats::continent_of("Atlantis"), "Unknown");
/// ```
pub fn continent_of(country: &str) -> &'static str {
    CONTINENTS
        .iter()
        .find(|(_, countries)| countries.iter().any(|c| *c == country))
        .map(|(continent, _)| *continent)
        .unwrap_or(UNKNOWN_CONTINENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn known_countries() {
        assert_eq!(continent_of("United States"), "North America");
        assert_eq!(continent_of("Brazil"), "Latin America");
        assert_eq!(continent_of("Soviet Union"), "Europe");
        assert_eq!(continent_of("Iran"), "Asia");
        assert_eq!(continent_of("Fiji"), "Oceania");
    }

    #[test]
    fn unknown_countries() {
        assert_eq!(continent_of("france"), UNKNOWN_CONTINENT);
        assert_eq!(continent_of(""), UNKNOWN_CONTINENT);
    }

    #[test]
    fn each_country_has_one_continent() {
        let mut seen: HashSet<&str> = HashSet::new();
        for (_, countries) in CONTINENTS.iter() {
            for c in countries.iter() {
                assert!(seen.insert(*c), "{} listed twice", c);
            }
        }
    }
}
