//! One-shot query commands: load the dataset, run a query or aggregation,
//! print the result as pretty JSON.

use log::info;
use wdi_core::indicator::IndicatorKind;
use wdi_core::selector::ContinentSelector;
use wdi_dashboard::models::{BarChartSpec, CountryValue, SummaryCard};
use wdi_data::{ranking, series, summary};
use wdi_db::Database;

/// Load the dataset CSV at `path` into a fresh store.
pub(crate) fn load_database(path: &str) -> anyhow::Result<Database> {
    let csv_data = std::fs::read_to_string(path)?;
    let db = Database::new()?;
    let loaded = db.load_dataset(&csv_data)?;
    info!("Loaded {} indicator rows from {}", loaded, path);
    Ok(db)
}

pub fn run_continents(data: &str) -> anyhow::Result<()> {
    let db = load_database(data)?;
    let continents = db.continents()?;
    println!("{}", serde_json::to_string_pretty(&continents)?);
    Ok(())
}

pub fn run_countries(data: &str, continent: &str) -> anyhow::Result<()> {
    let db = load_database(data)?;
    let countries = db.countries_in_continent(&ContinentSelector::parse(continent))?;
    println!("{}", serde_json::to_string_pretty(&countries)?);
    Ok(())
}

pub fn run_top(data: &str, continent: &str, indicator: &str, count: usize) -> anyhow::Result<()> {
    let db = load_database(data)?;
    let indicator: IndicatorKind = indicator.parse()?;
    let records = db.filter_records(&ContinentSelector::parse(continent), &[], None)?;
    let bars = ranking::top_n(&records, indicator, count)
        .into_iter()
        .map(|(country_id, value)| CountryValue { country_id, value })
        .collect();
    let spec = BarChartSpec { indicator, bars };
    println!("{}", serde_json::to_string_pretty(&spec)?);
    Ok(())
}

pub fn run_summary(data: &str, continent: &str, indicator: &str) -> anyhow::Result<()> {
    let db = load_database(data)?;
    let indicator: IndicatorKind = indicator.parse()?;
    let selector = ContinentSelector::parse(continent);
    let records = db.filter_records(&selector, &[], None)?;
    let card = match summary::continent_summary(&records, indicator) {
        Ok(mean) => SummaryCard {
            indicator,
            continent: selector.to_string(),
            mean: Some(mean),
            no_data: false,
            window: series::window(&records),
        },
        Err(_) => SummaryCard {
            indicator,
            continent: selector.to_string(),
            mean: None,
            no_data: true,
            window: None,
        },
    };
    println!("{}", serde_json::to_string_pretty(&card)?);
    Ok(())
}

pub fn run_series(data: &str, countries: &str, indicator: &str) -> anyhow::Result<()> {
    let db = load_database(data)?;
    let indicator: IndicatorKind = indicator.parse()?;
    let country_ids = parse_country_list(countries);
    let records = db.filter_records(&ContinentSelector::All, &country_ids, None)?;
    let lines = series::time_series(&records, &country_ids, indicator);
    println!("{}", serde_json::to_string_pretty(&lines)?);
    Ok(())
}

/// Split a comma-separated country list, dropping empty segments.
pub(crate) fn parse_country_list(countries: &str) -> Vec<String> {
    countries
        .split(',')
        .map(|segment| segment.trim().to_string())
        .filter(|segment| !segment.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_list_splits_and_trims() {
        assert_eq!(
            parse_country_list("DEU, FRA ,,ESP"),
            vec!["DEU", "FRA", "ESP"]
        );
        assert!(parse_country_list("").is_empty());
    }
}
