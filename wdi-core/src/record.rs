//! Yearly indicator records and dataset CSV parsing.

use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

/// One (country, year) row of the indicators dataset.
///
/// The continent is a fixed attribute of the country; it is carried on every
/// row so aggregation functions can work on plain record slices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Country identifier (e.g. ISO code "DEU").
    pub country_id: String,
    /// Display name (e.g. "Germany").
    pub country_name: String,
    /// Continent code (e.g. "EU").
    pub continent: String,
    /// Calendar year of the observation.
    pub year: i32,
    /// GDP per capita in constant dollars.
    pub gdp_per_capita: f64,
    /// Total population.
    pub population: u64,
    /// Life expectancy at birth, in years.
    pub life_expectancy: f64,
}

/// Parse dataset CSV data into records.
///
/// Expected format (with headers):
/// `code,country,continent,year,gdp_per_capita,population,life_expectancy`
///
/// Rows with an empty code/continent or non-numeric year/values are skipped
/// and counted rather than aborting the load.
///
/// # Example CSV
/// ```text
/// code,country,continent,year,gdp_per_capita,population,life_expectancy
/// DEU,Germany,EU,2007,32170.0,82400996,79.406
/// ```
pub fn records_from_csv(csv_data: &str) -> Vec<Record> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let mut records = Vec::new();
    let mut skipped = 0u32;
    for result in rdr.records() {
        let row = match result {
            Ok(row) => row,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };
        let country_id = row.get(0).unwrap_or("").trim();
        let country_name = row.get(1).unwrap_or("").trim();
        let continent = row.get(2).unwrap_or("").trim();
        if country_id.is_empty() || continent.is_empty() {
            skipped += 1;
            continue;
        }

        let parsed = (
            row.get(3).unwrap_or("").trim().parse::<i32>(),
            row.get(4).unwrap_or("").trim().parse::<f64>(),
            row.get(5).unwrap_or("").trim().parse::<u64>(),
            row.get(6).unwrap_or("").trim().parse::<f64>(),
        );
        let (Ok(year), Ok(gdp_per_capita), Ok(population), Ok(life_expectancy)) = parsed else {
            skipped += 1;
            continue;
        };

        records.push(Record {
            country_id: country_id.to_string(),
            country_name: country_name.to_string(),
            continent: continent.to_string(),
            year,
            gdp_per_capita,
            population,
            life_expectancy,
        });
    }
    log::info!(
        "[WDI Debug] parse: {} records, skipped {} malformed rows",
        records.len(),
        skipped
    );
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
code,country,continent,year,gdp_per_capita,population,life_expectancy
DEU,Germany,EU,2002,30035.8,82350671,78.67
DEU,Germany,EU,2007,32170.0,82400996,79.406
JPN,Japan,AS,2007,31656.07,127467972,82.603
";

    #[test]
    fn parses_well_formed_rows() {
        let records = records_from_csv(SAMPLE_CSV);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].country_id, "DEU");
        assert_eq!(records[0].continent, "EU");
        assert_eq!(records[0].year, 2002);
        assert_eq!(records[2].population, 127467972);
        assert!((records[2].life_expectancy - 82.603).abs() < 1e-9);
    }

    #[test]
    fn skips_malformed_rows() {
        let csv_data = "\
code,country,continent,year,gdp_per_capita,population,life_expectancy
DEU,Germany,EU,2007,32170.0,82400996,79.406
,Nowhere,EU,2007,1.0,1,1.0
FRA,France,,2007,1.0,1,1.0
ITA,Italy,EU,not-a-year,1.0,1,1.0
ESP,Spain,EU,2007,---,1,1.0
";
        let records = records_from_csv(csv_data);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].country_id, "DEU");
    }

    #[test]
    fn empty_input_yields_no_records() {
        assert!(records_from_csv("").is_empty());
        assert!(records_from_csv("code,country,continent,year,gdp_per_capita,population,life_expectancy\n").is_empty());
    }
}
