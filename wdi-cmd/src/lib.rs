//! Command implementations for the WDI CLI.
//!
//! Provides one-shot query subcommands over a dataset CSV plus a scripted
//! session runner that replays input events through the standard dashboard
//! binding graph.

use clap::Subcommand;

pub mod query;
pub mod session;

#[derive(Subcommand)]
pub enum Command {
    /// List continent options present in the dataset
    Continents {
        /// Path to the dataset CSV
        #[arg(short, long)]
        data: String,
    },

    /// List country options for a continent
    Countries {
        /// Path to the dataset CSV
        #[arg(short, long)]
        data: String,

        /// Continent code, or ALL for every continent
        #[arg(short, long, default_value = "ALL")]
        continent: String,
    },

    /// Rank countries by latest-year indicator value
    Top {
        /// Path to the dataset CSV
        #[arg(short, long)]
        data: String,

        /// Continent code, or ALL for every continent
        #[arg(short, long, default_value = "ALL")]
        continent: String,

        /// Indicator: gdp-per-capita, population, life-expectancy
        #[arg(short, long, default_value = "gdp-per-capita")]
        indicator: String,

        /// Number of countries to return
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,
    },

    /// Mean latest-year indicator value across a continent
    Summary {
        /// Path to the dataset CSV
        #[arg(short, long)]
        data: String,

        /// Continent code, or ALL for every continent
        #[arg(short, long, default_value = "ALL")]
        continent: String,

        /// Indicator: gdp-per-capita, population, life-expectancy
        #[arg(short, long, default_value = "gdp-per-capita")]
        indicator: String,
    },

    /// Per-country time series for selected countries
    Series {
        /// Path to the dataset CSV
        #[arg(short, long)]
        data: String,

        /// Comma-separated country ids (e.g. DEU,FRA)
        #[arg(long)]
        countries: String,

        /// Indicator: gdp-per-capita, population, life-expectancy
        #[arg(short, long, default_value = "gdp-per-capita")]
        indicator: String,
    },

    /// Replay a scripted session of input events
    Session {
        /// Path to the dataset CSV
        #[arg(short, long)]
        data: String,

        /// Events file: one `input=value` line per event
        #[arg(short, long)]
        events: String,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Continents { data } => query::run_continents(&data),
        Command::Countries { data, continent } => query::run_countries(&data, &continent),
        Command::Top {
            data,
            continent,
            indicator,
            count,
        } => query::run_top(&data, &continent, &indicator, count),
        Command::Summary {
            data,
            continent,
            indicator,
        } => query::run_summary(&data, &continent, &indicator),
        Command::Series {
            data,
            countries,
            indicator,
        } => query::run_series(&data, &countries, &indicator),
        Command::Session { data, events } => session::run_session(&data, &events),
    }
}
