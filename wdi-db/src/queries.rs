//! Typed query methods for retrieving indicator data from the store.
//!
//! All queries are side-effect-free and deterministic: result ordering is
//! fixed by explicit `ORDER BY` clauses so repeated calls with the same
//! selection produce identical output.
//!
//! Empty results are valid values. The only inputs rejected are selector
//! codes the dataset does not know, surfaced as
//! [`SelectorError`](wdi_core::selector::SelectorError) inside the
//! `anyhow::Error` so callers can recover them by downcast.

use crate::models::{ContinentOption, CountryOption};
use crate::Database;
use rusqlite::{params, ToSql};
use wdi_core::continent::continent_label;
use wdi_core::record::Record;
use wdi_core::selector::{ContinentSelector, SelectorError};

impl Database {
    // ───────────────────── Selection Options ─────────────────────

    /// Get the continents present in the dataset, ordered by code.
    ///
    /// Display labels come from the shipped code/label table, falling back
    /// to the raw code for continents outside it.
    pub fn continents(&self) -> anyhow::Result<Vec<ContinentOption>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT DISTINCT continent FROM countries
             ORDER BY continent",
        )?;
        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        let options = rows
            .into_iter()
            .map(|code| ContinentOption {
                label: continent_label(&code).to_string(),
                code,
            })
            .collect::<Vec<_>>();
        log::info!(
            "[WDI Debug] query: continents returned {} options",
            options.len()
        );
        Ok(options)
    }

    /// Get every country belonging to the selected continent, ordered by
    /// display name.
    ///
    /// The `ALL` sentinel returns every country across all continents.
    /// Fails with [`SelectorError::UnknownContinent`] if the code matches no
    /// continent in the dataset.
    pub fn countries_in_continent(
        &self,
        selector: &ContinentSelector,
    ) -> anyhow::Result<Vec<CountryOption>> {
        if let Some(code) = selector.code() {
            self.check_continent(code)?;
        }
        let conn = self.conn.borrow();
        let mut stmt = match selector.code() {
            Some(_) => conn.prepare(
                "SELECT country_id, name FROM countries
                 WHERE continent = ?1
                 ORDER BY name",
            )?,
            None => conn.prepare(
                "SELECT country_id, name FROM countries
                 ORDER BY name",
            )?,
        };
        let map_row = |row: &rusqlite::Row<'_>| {
            Ok(CountryOption {
                country_id: row.get(0)?,
                name: row.get(1)?,
            })
        };
        let rows = match selector.code() {
            Some(code) => stmt.query_map(params![code], map_row)?,
            None => stmt.query_map([], map_row)?,
        }
        .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[WDI Debug] query: countries_in_continent({}) returned {} options",
            selector,
            rows.len()
        );
        Ok(rows)
    }

    // ───────────────────── Record Filtering ─────────────────────

    /// Get the records matching a continent/country/year selection, ordered
    /// by (country_id, year).
    ///
    /// - `selector`: continent to match; the `ALL` sentinel matches every
    ///   continent.
    /// - `country_ids`: countries to keep; empty keeps every country of the
    ///   selected continent. A known country under the wrong continent is
    ///   simply excluded (empty result, not an error).
    /// - `year_range`: inclusive (first, last) years; `None` keeps the full
    ///   available range.
    ///
    /// Fails with the matching [`SelectorError`] variant for continent or
    /// country codes not present in the dataset.
    pub fn filter_records(
        &self,
        selector: &ContinentSelector,
        country_ids: &[String],
        year_range: Option<(i32, i32)>,
    ) -> anyhow::Result<Vec<Record>> {
        if let Some(code) = selector.code() {
            self.check_continent(code)?;
        }
        for country_id in country_ids {
            self.check_country(country_id)?;
        }

        let mut sql = String::from(
            "SELECT i.country_id, c.name, c.continent, i.year,
                    i.gdp_per_capita, i.population, i.life_expectancy
             FROM indicators i
             INNER JOIN countries c ON i.country_id = c.country_id",
        );
        let mut clauses: Vec<String> = Vec::new();
        let mut owned: Vec<Box<dyn ToSql>> = Vec::new();
        if let Some(code) = selector.code() {
            clauses.push("c.continent = ?".to_string());
            owned.push(Box::new(code.to_string()));
        }
        if !country_ids.is_empty() {
            let placeholders = vec!["?"; country_ids.len()].join(", ");
            clauses.push(format!("i.country_id IN ({})", placeholders));
            for country_id in country_ids {
                owned.push(Box::new(country_id.clone()));
            }
        }
        if let Some((first, last)) = year_range {
            clauses.push("i.year >= ? AND i.year <= ?".to_string());
            owned.push(Box::new(first));
            owned.push(Box::new(last));
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY i.country_id, i.year");

        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&sql)?;
        let param_refs: Vec<&dyn ToSql> = owned.iter().map(|p| p.as_ref()).collect();
        let rows = stmt
            .query_map(param_refs.as_slice(), |row| {
                Ok(Record {
                    country_id: row.get(0)?,
                    country_name: row.get(1)?,
                    continent: row.get(2)?,
                    year: row.get(3)?,
                    gdp_per_capita: row.get(4)?,
                    population: row.get::<_, i64>(5)? as u64,
                    life_expectancy: row.get(6)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[WDI Debug] query: filter_records({}, {} countries, {:?}) returned {} records",
            selector,
            country_ids.len(),
            year_range,
            rows.len()
        );
        Ok(rows)
    }

    /// Get the (min, max) year across all indicator rows.
    ///
    /// Returns `None` on an empty store.
    pub fn year_range(&self) -> anyhow::Result<Option<(i32, i32)>> {
        let conn = self.conn.borrow();
        let range = conn.query_row("SELECT MIN(year), MAX(year) FROM indicators", [], |row| {
            Ok((row.get::<_, Option<i32>>(0)?, row.get::<_, Option<i32>>(1)?))
        })?;
        Ok(match range {
            (Some(first), Some(last)) => Some((first, last)),
            _ => None,
        })
    }

    // ───────────────────── Selector Validation ─────────────────────

    fn check_continent(&self, code: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM countries WHERE continent = ?1",
            params![code],
            |row| row.get(0),
        )?;
        if count == 0 {
            return Err(SelectorError::UnknownContinent(code.to_string()).into());
        }
        Ok(())
    }

    fn check_country(&self, country_id: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM countries WHERE country_id = ?1",
            params![country_id],
            |row| row.get(0),
        )?;
        if count == 0 {
            return Err(SelectorError::UnknownCountry(country_id.to_string()).into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to create a store with two continents and five countries.
    fn sample_db() -> Database {
        let db = Database::new().unwrap();
        db.load_dataset(
            "code,country,continent,year,gdp_per_capita,population,life_expectancy\n\
             DEU,Germany,EU,2002,30035.8,82350671,78.67\n\
             DEU,Germany,EU,2007,32170.0,82400996,79.406\n\
             FRA,France,EU,2002,28926.03,59925035,79.59\n\
             FRA,France,EU,2007,30470.02,61083916,80.657\n\
             ESP,Spain,EU,2007,28821.06,40448191,80.941\n\
             JPN,Japan,AS,2002,28604.59,127065841,82.0\n\
             JPN,Japan,AS,2007,31656.07,127467972,82.603\n\
             CHN,China,AS,2007,4959.11,1318683096,72.961\n",
        )
        .unwrap();
        db
    }

    // ───────────────────── Option Queries ─────────────────────

    #[test]
    fn continents_ordered_by_code_with_labels() {
        let db = sample_db();
        let continents = db.continents().unwrap();
        assert_eq!(continents.len(), 2);
        assert_eq!(continents[0].code, "AS");
        assert_eq!(continents[0].label, "Asia");
        assert_eq!(continents[1].code, "EU");
        assert_eq!(continents[1].label, "Europe");
    }

    #[test]
    fn countries_in_continent_returns_only_that_continent() {
        let db = sample_db();
        let countries = db
            .countries_in_continent(&ContinentSelector::parse("EU"))
            .unwrap();
        let ids: Vec<&str> = countries.iter().map(|c| c.country_id.as_str()).collect();
        // Ordered by display name: France, Germany, Spain
        assert_eq!(ids, vec!["FRA", "DEU", "ESP"]);
    }

    #[test]
    fn countries_in_continent_all_sentinel_returns_everything() {
        let db = sample_db();
        let countries = db.countries_in_continent(&ContinentSelector::All).unwrap();
        assert_eq!(countries.len(), 5);
        // Ordered by display name: China, France, Germany, Japan, Spain
        assert_eq!(countries[0].country_id, "CHN");
        assert_eq!(countries[4].country_id, "ESP");
    }

    #[test]
    fn countries_in_continent_unknown_code_fails() {
        let db = sample_db();
        let err = db
            .countries_in_continent(&ContinentSelector::parse("XX"))
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<SelectorError>(),
            Some(&SelectorError::UnknownContinent("XX".to_string()))
        );
    }

    // ───────────────────── Record Filtering ─────────────────────

    #[test]
    fn filter_records_by_continent_is_ordered() {
        let db = sample_db();
        let records = db
            .filter_records(&ContinentSelector::parse("EU"), &[], None)
            .unwrap();
        assert_eq!(records.len(), 5);
        let keys: Vec<(&str, i32)> = records
            .iter()
            .map(|r| (r.country_id.as_str(), r.year))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("DEU", 2002),
                ("DEU", 2007),
                ("ESP", 2007),
                ("FRA", 2002),
                ("FRA", 2007),
            ]
        );
    }

    #[test]
    fn filter_records_all_sentinel_spans_continents() {
        let db = sample_db();
        let records = db.filter_records(&ContinentSelector::All, &[], None).unwrap();
        assert_eq!(records.len(), 8);
    }

    #[test]
    fn filter_records_restricts_to_selected_countries() {
        let db = sample_db();
        let records = db
            .filter_records(
                &ContinentSelector::parse("EU"),
                &["FRA".to_string()],
                None,
            )
            .unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.country_id == "FRA"));
    }

    #[test]
    fn filter_records_continent_country_mismatch_is_empty() {
        let db = sample_db();
        // DEU exists but belongs to EU, so under AS nothing matches.
        let records = db
            .filter_records(&ContinentSelector::parse("AS"), &["DEU".to_string()], None)
            .unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn filter_records_year_range_is_inclusive() {
        let db = sample_db();
        let records = db
            .filter_records(&ContinentSelector::parse("EU"), &[], Some((2002, 2002)))
            .unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.year == 2002));
    }

    #[test]
    fn filter_records_unknown_continent_fails() {
        let db = sample_db();
        let err = db
            .filter_records(&ContinentSelector::parse("XX"), &[], None)
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<SelectorError>(),
            Some(&SelectorError::UnknownContinent("XX".to_string()))
        );
    }

    #[test]
    fn filter_records_unknown_country_fails() {
        let db = sample_db();
        let err = db
            .filter_records(&ContinentSelector::All, &["ATL".to_string()], None)
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<SelectorError>(),
            Some(&SelectorError::UnknownCountry("ATL".to_string()))
        );
    }

    #[test]
    fn filter_records_carries_country_metadata() {
        let db = sample_db();
        let records = db
            .filter_records(&ContinentSelector::All, &["JPN".to_string()], None)
            .unwrap();
        assert_eq!(records[0].country_name, "Japan");
        assert_eq!(records[0].continent, "AS");
        assert_eq!(records[1].population, 127467972);
    }

    // ───────────────────── Year Range ─────────────────────

    #[test]
    fn year_range_spans_the_dataset() {
        let db = sample_db();
        assert_eq!(db.year_range().unwrap(), Some((2002, 2007)));
    }

    #[test]
    fn year_range_empty_store_is_none() {
        let db = Database::new().unwrap();
        assert_eq!(db.year_range().unwrap(), None);
    }
}
