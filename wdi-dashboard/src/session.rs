//! Session wiring: selector inputs bound to the standard outputs.

use crate::models::{
    BarChartSpec, CountryValue, KpiMapSpec, LineChartSpec, SeriesLine, SummaryCard, YearValue,
};
use serde_json::{json, Value};
use wdi_core::indicator::IndicatorKind;
use wdi_core::selector::{ContinentSelector, SelectorError};
use wdi_data::{kpi, ranking, series, summary};
use wdi_db::Database;
use wdi_reactive::binding::{InputSnapshot, OutputValues};
use wdi_reactive::error::GraphError;
use wdi_reactive::graph::{BindingGraph, DispatchReport};

/// Input names accepted by the session.
pub const CONTINENT_INPUT: &str = "continent-selector";
pub const COUNTRY_INPUT: &str = "country-selector";
pub const INDICATOR_INPUT: &str = "indicator-selector";

/// Output names published by the standard bindings.
pub const COUNTRY_OPTIONS_OUTPUT: &str = "country-selector.options";
pub const KPI_MAP_OUTPUT: &str = "kpi-map.figure";
pub const TOP_COUNTRIES_OUTPUT: &str = "top-countries.figure";
pub const TREND_CHART_OUTPUT: &str = "trend-chart.figure";
pub const SUMMARY_CARD_OUTPUT: &str = "summary-card.text";

/// Bar count of the top-countries chart.
const TOP_N: usize = 10;

/// One user session: the binding graph over a shared read-only store
/// handle.
///
/// The store handle is cloned into each binding closure (an `Rc` clone, so
/// all bindings query the same instance). Input state lives in the graph
/// and is mutated only through the `set_*` methods.
pub struct DashboardSession {
    graph: BindingGraph,
}

impl DashboardSession {
    /// Build the standard graph. Outputs are empty until
    /// [`refresh_all`](Self::refresh_all) runs.
    ///
    /// Defaults: all continents, no country selection, GDP per capita.
    pub fn new(db: Database) -> Result<Self, GraphError> {
        let mut graph = BindingGraph::new();
        graph.register_input(
            CONTINENT_INPUT,
            Value::String(ContinentSelector::All.to_string()),
        );
        graph.register_input(COUNTRY_INPUT, json!([]));
        graph.register_input(
            INDICATOR_INPUT,
            Value::String(IndicatorKind::GdpPerCapita.code().to_string()),
        );

        let options_db = db.clone();
        graph.register(
            "country-options",
            &[CONTINENT_INPUT],
            &[COUNTRY_OPTIONS_OUTPUT],
            Box::new(move |snapshot| country_options(&options_db, snapshot)),
        )?;

        let map_db = db.clone();
        graph.register(
            "kpi-map",
            &[CONTINENT_INPUT, COUNTRY_INPUT, INDICATOR_INPUT],
            &[KPI_MAP_OUTPUT],
            Box::new(move |snapshot| kpi_map(&map_db, snapshot)),
        )?;

        let top_db = db.clone();
        graph.register(
            "top-countries",
            &[CONTINENT_INPUT, INDICATOR_INPUT],
            &[TOP_COUNTRIES_OUTPUT],
            Box::new(move |snapshot| top_countries(&top_db, snapshot)),
        )?;

        let trend_db = db.clone();
        graph.register(
            "trend-chart",
            &[CONTINENT_INPUT, COUNTRY_INPUT, INDICATOR_INPUT],
            &[TREND_CHART_OUTPUT],
            Box::new(move |snapshot| trend_chart(&trend_db, snapshot)),
        )?;

        graph.register(
            "summary-card",
            &[CONTINENT_INPUT, INDICATOR_INPUT],
            &[SUMMARY_CARD_OUTPUT],
            Box::new(move |snapshot| summary_card(&db, snapshot)),
        )?;

        log::info!(
            "[WDI Debug] session: registered {} bindings",
            graph.bindings().len()
        );
        Ok(Self { graph })
    }

    /// Run every binding once, publishing the initial outputs.
    pub fn refresh_all(&mut self) -> DispatchReport {
        self.graph.refresh_all()
    }

    /// Change the continent selector.
    pub fn set_continent(
        &mut self,
        selector: &ContinentSelector,
    ) -> Result<DispatchReport, GraphError> {
        self.graph
            .set_input(CONTINENT_INPUT, Value::String(selector.to_string()))
    }

    /// Replace the country multi-selection.
    pub fn set_countries(&mut self, country_ids: &[String]) -> Result<DispatchReport, GraphError> {
        self.graph.set_input(COUNTRY_INPUT, json!(country_ids))
    }

    /// Change the indicator selector.
    pub fn set_indicator(&mut self, indicator: IndicatorKind) -> Result<DispatchReport, GraphError> {
        self.graph
            .set_input(INDICATOR_INPUT, Value::String(indicator.code().to_string()))
    }

    /// Last published value of a named output.
    pub fn output(&self, name: &str) -> Option<&Value> {
        self.graph.output(name)
    }

    /// The underlying graph, for inspection.
    pub fn graph(&self) -> &BindingGraph {
        &self.graph
    }
}

// ───────────────────── Input Decoding ─────────────────────

fn selector_from(snapshot: &InputSnapshot<'_>) -> anyhow::Result<ContinentSelector> {
    let text = snapshot
        .text(CONTINENT_INPUT)
        .ok_or_else(|| anyhow::anyhow!("continent input missing or not a string"))?;
    Ok(ContinentSelector::parse(text))
}

fn indicator_from(snapshot: &InputSnapshot<'_>) -> anyhow::Result<IndicatorKind> {
    let text = snapshot
        .text(INDICATOR_INPUT)
        .ok_or_else(|| anyhow::anyhow!("indicator input missing or not a string"))?;
    Ok(text.parse()?)
}

fn single_output(name: &str, value: Value) -> OutputValues {
    let mut out = OutputValues::new();
    out.insert(name.to_string(), value);
    out
}

// ───────────────────── Binding Computations ─────────────────────

/// Country dropdown options for the selected continent.
///
/// An unknown continent code renders as an empty options list rather than a
/// binding failure; every other error is reported.
fn country_options(db: &Database, snapshot: &InputSnapshot<'_>) -> anyhow::Result<OutputValues> {
    let selector = selector_from(snapshot)?;
    let options = match db.countries_in_continent(&selector) {
        Ok(options) => options,
        Err(err) if err.downcast_ref::<SelectorError>().is_some() => Vec::new(),
        Err(err) => return Err(err),
    };
    Ok(single_output(
        COUNTRY_OPTIONS_OUTPUT,
        serde_json::to_value(&options)?,
    ))
}

/// Latest-year KPI per country in the current selection.
fn kpi_map(db: &Database, snapshot: &InputSnapshot<'_>) -> anyhow::Result<OutputValues> {
    let selector = selector_from(snapshot)?;
    let countries = snapshot.text_list(COUNTRY_INPUT);
    let indicator = indicator_from(snapshot)?;

    let records = db.filter_records(&selector, &countries, None)?;
    let points = kpi::per_country_kpi(&records, indicator)
        .into_iter()
        .map(|(country_id, value)| CountryValue { country_id, value })
        .collect();
    let spec = KpiMapSpec {
        indicator,
        window: series::window(&records),
        points,
    };
    Ok(single_output(KPI_MAP_OUTPUT, serde_json::to_value(&spec)?))
}

/// Top-N ranking across the whole selected continent.
fn top_countries(db: &Database, snapshot: &InputSnapshot<'_>) -> anyhow::Result<OutputValues> {
    let selector = selector_from(snapshot)?;
    let indicator = indicator_from(snapshot)?;

    let records = db.filter_records(&selector, &[], None)?;
    let bars = ranking::top_n(&records, indicator, TOP_N)
        .into_iter()
        .map(|(country_id, value)| CountryValue { country_id, value })
        .collect();
    let spec = BarChartSpec { indicator, bars };
    Ok(single_output(
        TOP_COUNTRIES_OUTPUT,
        serde_json::to_value(&spec)?,
    ))
}

/// Per-country trend lines for the selection, falling back to every country
/// of the continent when nothing is selected.
fn trend_chart(db: &Database, snapshot: &InputSnapshot<'_>) -> anyhow::Result<OutputValues> {
    let selector = selector_from(snapshot)?;
    let mut countries = snapshot.text_list(COUNTRY_INPUT);
    let indicator = indicator_from(snapshot)?;

    if countries.is_empty() {
        countries = db
            .countries_in_continent(&selector)?
            .into_iter()
            .map(|option| option.country_id)
            .collect();
    }
    let records = db.filter_records(&selector, &countries, None)?;
    let lines = series::time_series(&records, &countries, indicator)
        .into_iter()
        .map(|(country_id, points)| SeriesLine {
            country_id,
            points: points
                .into_iter()
                .map(|(year, value)| YearValue { year, value })
                .collect(),
        })
        .collect();
    let spec = LineChartSpec { indicator, lines };
    Ok(single_output(
        TREND_CHART_OUTPUT,
        serde_json::to_value(&spec)?,
    ))
}

/// Continent-wide mean of the indicator, with an explicit no-data state.
fn summary_card(db: &Database, snapshot: &InputSnapshot<'_>) -> anyhow::Result<OutputValues> {
    let selector = selector_from(snapshot)?;
    let indicator = indicator_from(snapshot)?;

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
    Ok(single_output(
        SUMMARY_CARD_OUTPUT,
        serde_json::to_value(&card)?,
    ))
}
