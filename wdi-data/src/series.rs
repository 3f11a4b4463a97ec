//! Per-country time series and year windows.

use std::collections::BTreeMap;
use wdi_core::indicator::IndicatorKind;
use wdi_core::record::Record;

/// One ascending-by-year `(year, value)` series per requested country.
///
/// Every id in `country_ids` gets a key, so a country with zero matching
/// rows maps to an empty series rather than an absent entry; the chart layer
/// renders it as an empty line instead of dropping the legend entry.
pub fn time_series(
    records: &[Record],
    country_ids: &[String],
    indicator: IndicatorKind,
) -> BTreeMap<String, Vec<(i32, f64)>> {
    let mut series: BTreeMap<String, Vec<(i32, f64)>> = country_ids
        .iter()
        .map(|country_id| (country_id.clone(), Vec::new()))
        .collect();
    for record in records {
        if let Some(points) = series.get_mut(&record.country_id) {
            points.push((record.year, indicator.value_of(record)));
        }
    }
    for points in series.values_mut() {
        points.sort_by_key(|(year, _)| *year);
    }
    series
}

/// The (min, max) year across `records`, used to stamp aggregation outputs
/// with the window they came from.
///
/// Returns `None` for an empty slice.
pub fn window(records: &[Record]) -> Option<(i32, i32)> {
    let mut years = records.iter().map(|record| record.year);
    let first = years.next()?;
    Some(years.fold((first, first), |(lo, hi), year| (lo.min(year), hi.max(year))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wdi_core::record::records_from_csv;

    fn sample_records() -> Vec<Record> {
        records_from_csv(
            "code,country,continent,year,gdp_per_capita,population,life_expectancy\n\
             DEU,Germany,EU,2007,32170.0,82400996,79.406\n\
             DEU,Germany,EU,2002,30035.8,82350671,78.67\n\
             FRA,France,EU,2002,28926.03,59925035,79.59\n",
        )
    }

    #[test]
    fn one_series_per_requested_country() {
        let records = sample_records();
        let ids = vec!["DEU".to_string(), "ESP".to_string()];
        let series = time_series(&records, &ids, IndicatorKind::GdpPerCapita);

        assert_eq!(series.len(), 2);
        // ESP has no rows here but keeps its key with an empty series.
        assert!(series["ESP"].is_empty());
        assert_eq!(series["DEU"].len(), 2);
    }

    #[test]
    fn series_is_ascending_by_year() {
        let records = sample_records();
        let ids = vec!["DEU".to_string()];
        let series = time_series(&records, &ids, IndicatorKind::LifeExpectancy);
        let years: Vec<i32> = series["DEU"].iter().map(|(year, _)| *year).collect();
        assert_eq!(years, vec![2002, 2007]);
        assert!((series["DEU"][0].1 - 78.67).abs() < 1e-9);
    }

    #[test]
    fn unrequested_countries_are_excluded() {
        let records = sample_records();
        let ids = vec!["FRA".to_string()];
        let series = time_series(&records, &ids, IndicatorKind::Population);
        assert_eq!(series.len(), 1);
        assert!(series.contains_key("FRA"));
    }

    #[test]
    fn window_spans_min_and_max_year() {
        let records = sample_records();
        assert_eq!(window(&records), Some((2002, 2007)));
        assert_eq!(window(&[]), None);
    }
}
