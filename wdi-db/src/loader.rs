//! Dataset loading: CSV rows into the country and indicator tables.
//!
//! Parsing is delegated to [`wdi_core::record::records_from_csv`]; this
//! module only inserts the parsed rows. Loading the same (country, year)
//! twice replaces the earlier row, and the country row always reflects the
//! last record seen for that country.

use crate::Database;
use rusqlite::params;
use wdi_core::record::records_from_csv;

impl Database {
    /// Load dataset CSV data into the store.
    ///
    /// Expected format (with headers):
    /// `code,country,continent,year,gdp_per_capita,population,life_expectancy`
    ///
    /// Malformed rows are skipped by the parser, not fatal. Returns the
    /// number of indicator rows inserted.
    pub fn load_dataset(&self, csv_data: &str) -> anyhow::Result<usize> {
        let records = records_from_csv(csv_data);
        let conn = self.conn.borrow();

        let mut count = 0usize;
        for record in &records {
            conn.execute(
                "INSERT OR REPLACE INTO countries (country_id, name, continent)
                 VALUES (?1, ?2, ?3)",
                params![record.country_id, record.country_name, record.continent],
            )?;
            conn.execute(
                "INSERT OR REPLACE INTO indicators
                 (country_id, year, gdp_per_capita, population, life_expectancy)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    record.country_id,
                    record.year,
                    record.gdp_per_capita,
                    record.population as i64,
                    record.life_expectancy
                ],
            )?;
            count += 1;
        }
        log::info!("[WDI Debug] loader: Loaded {} indicator rows", count);
        Ok(count)
    }
}
