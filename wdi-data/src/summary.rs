//! Continent-level summary statistics.

use crate::kpi::latest_by_country;
use std::fmt;
use wdi_core::indicator::IndicatorKind;
use wdi_core::record::Record;

/// An aggregation was requested over a record set with zero qualifying rows.
///
/// Distinct from a zero value: callers render an explicit "no data" state
/// instead of a misleading number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoData;

impl fmt::Display for NoData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("no records qualify for aggregation")
    }
}

impl std::error::Error for NoData {}

/// Arithmetic mean of the latest-year `indicator` value across the distinct
/// countries present in `records`.
///
/// Fails with [`NoData`] on an empty set rather than returning zero or NaN.
pub fn continent_summary(records: &[Record], indicator: IndicatorKind) -> Result<f64, NoData> {
    let latest = latest_by_country(records);
    if latest.is_empty() {
        return Err(NoData);
    }
    let sum: f64 = latest.values().map(|record| indicator.value_of(record)).sum();
    Ok(sum / latest.len() as f64)
}
