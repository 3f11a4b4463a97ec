//! In-memory SQLite dataset store for world development indicator data.
//!
//! This crate provides the read-only Dataset Store and the Query Service on
//! top of it: CSV data is loaded once into an in-memory SQLite database and
//! typed query methods expose filtered rows and selection options to the
//! dashboard bindings.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in a
//!   single-threaded session
//! - In-memory SQLite via `rusqlite`
//! - Typed query methods returning structs from [`models`] and records from
//!   `wdi_core`
//!
//! The handle is cheaply cloneable; every binding of a session shares one
//! store instance, and the store is never mutated after load.
//!
//! # Usage
//!
//! ```rust
//! use wdi_core::selector::ContinentSelector;
//! use wdi_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_dataset(
//!     "code,country,continent,year,gdp_per_capita,population,life_expectancy\n\
//!      DEU,Germany,EU,2007,32170.0,82400996,79.406\n",
//! )
//! .unwrap();
//!
//! let countries = db
//!     .countries_in_continent(&ContinentSelector::parse("EU"))
//!     .unwrap();
//! assert_eq!(countries.len(), 1);
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the full SQL schema.
//!
//! - `countries` - One row per country (id, name, continent); the continent
//!   lives here so it stays a fixed attribute of the country
//! - `indicators` - One row per (country, year) with the indicator values
//!
//! Aggregations (latest-year KPIs, means, rankings, series) are not done in
//! SQL; `filter_records` hands plain record slices to the `wdi-data` crate.

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding the indicators dataset.
///
/// Cheaply cloneable (via `Rc`) so bindings and sessions in one thread can
/// share a single read-only instance.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    ///
    /// The database is empty after creation; use
    /// [`load_dataset`](Self::load_dataset) to populate it with CSV data.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}
