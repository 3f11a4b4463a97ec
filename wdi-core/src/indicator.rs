//! Indicator kinds selectable in the dashboard.

use crate::record::Record;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The indicators carried on each yearly record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IndicatorKind {
    GdpPerCapita,
    Population,
    LifeExpectancy,
}

impl IndicatorKind {
    /// Every indicator kind, in display order.
    pub const ALL: [IndicatorKind; 3] = [
        IndicatorKind::GdpPerCapita,
        IndicatorKind::Population,
        IndicatorKind::LifeExpectancy,
    ];

    /// Stable text code used by the CLI, input events, and JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            IndicatorKind::GdpPerCapita => "gdp-per-capita",
            IndicatorKind::Population => "population",
            IndicatorKind::LifeExpectancy => "life-expectancy",
        }
    }

    /// Human-readable label for card and chart titles.
    pub fn label(&self) -> &'static str {
        match self {
            IndicatorKind::GdpPerCapita => "GDP per capita",
            IndicatorKind::Population => "Population",
            IndicatorKind::LifeExpectancy => "Life expectancy",
        }
    }

    /// Read this indicator's value from a record, widened to f64.
    pub fn value_of(&self, record: &Record) -> f64 {
        match self {
            IndicatorKind::GdpPerCapita => record.gdp_per_capita,
            IndicatorKind::Population => record.population as f64,
            IndicatorKind::LifeExpectancy => record.life_expectancy,
        }
    }
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// An indicator code that matches no known kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIndicatorError(pub String);

impl fmt::Display for ParseIndicatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown indicator: {}", self.0)
    }
}

impl std::error::Error for ParseIndicatorError {}

impl FromStr for IndicatorKind {
    type Err = ParseIndicatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Underscore spellings are accepted for dataset-header compatibility.
        match s.trim() {
            "gdp-per-capita" | "gdp_per_capita" => Ok(IndicatorKind::GdpPerCapita),
            "population" => Ok(IndicatorKind::Population),
            "life-expectancy" | "life_expectancy" => Ok(IndicatorKind::LifeExpectancy),
            other => Err(ParseIndicatorError(other.to_string())),
        }
    }
}
