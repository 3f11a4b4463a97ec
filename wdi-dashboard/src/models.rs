//! Serializable chart and card specifications.
//!
//! All structs derive `Serialize`; the session publishes them as JSON
//! output values, and the rendering layer consumes that JSON. `no_data` and
//! empty point lists are renderable states, never crashes.

use serde::Serialize;
use wdi_core::indicator::IndicatorKind;

/// A (country, value) pair for map and bar chart specs.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CountryValue {
    pub country_id: String,
    pub value: f64,
}

/// Choropleth-style KPI map: the latest-year indicator value per country in
/// the current selection.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct KpiMapSpec {
    pub indicator: IndicatorKind,
    /// (first, last) year of the records behind the values; `None` when the
    /// selection matched nothing.
    pub window: Option<(i32, i32)>,
    pub points: Vec<CountryValue>,
}

/// Top-N bar chart, highest latest-year value first.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BarChartSpec {
    pub indicator: IndicatorKind,
    pub bars: Vec<CountryValue>,
}

/// One point of a trend line.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct YearValue {
    pub year: i32,
    pub value: f64,
}

/// One country's trend line. An empty `points` list means the country was
/// requested but has no matching rows.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SeriesLine {
    pub country_id: String,
    pub points: Vec<YearValue>,
}

/// Multi-line time-series chart, one line per selected country.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LineChartSpec {
    pub indicator: IndicatorKind,
    pub lines: Vec<SeriesLine>,
}

/// Aggregate KPI card for the selected continent.
///
/// `no_data` is an explicit render state, distinct from a zero mean.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SummaryCard {
    pub indicator: IndicatorKind,
    /// Text form of the continent selector the card was computed for.
    pub continent: String,
    pub mean: Option<f64>,
    pub no_data: bool,
    pub window: Option<(i32, i32)>,
}
