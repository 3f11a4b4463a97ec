//! SQL schema definitions for the in-memory dataset store.
//!
//! Contains CREATE TABLE statements for the country and indicator tables.
//! The schema is applied as a single batch when the database is initialized.

/// Returns the full SQL schema as a single batch string.
///
/// This creates the following tables:
///
/// - `countries` - Country metadata (id, display name, continent code).
///   Continent is stored here, not per-year, so it is a fixed attribute of
///   the country across all years present.
/// - `indicators` - Yearly observations (country_id, year, GDP per capita,
///   population, life expectancy); (country_id, year) is the primary key.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS countries (
        country_id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        continent TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_countries_continent ON countries(continent);

    CREATE TABLE IF NOT EXISTS indicators (
        country_id TEXT NOT NULL,
        year INTEGER NOT NULL,
        gdp_per_capita REAL NOT NULL,
        population INTEGER NOT NULL,
        life_expectancy REAL NOT NULL,
        PRIMARY KEY (country_id, year)
    );
    CREATE INDEX IF NOT EXISTS idx_indicators_year ON indicators(year);

    "#
}
