//! Top-N country rankings by latest-year indicator value.

use crate::kpi::latest_by_country;
use std::cmp::Ordering;
use wdi_core::indicator::IndicatorKind;
use wdi_core::record::Record;

/// The `n` countries with the highest latest-year `indicator` value,
/// descending.
///
/// Ties are broken by ascending country id so equal inputs always rank
/// identically. When fewer than `n` countries are present, all of them are
/// returned.
pub fn top_n(records: &[Record], indicator: IndicatorKind, n: usize) -> Vec<(String, f64)> {
    let mut ranked: Vec<(String, f64)> = latest_by_country(records)
        .into_iter()
        .map(|(country_id, record)| (country_id.to_string(), indicator.value_of(record)))
        .collect();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use wdi_core::record::records_from_csv;

    fn sample_records() -> Vec<Record> {
        records_from_csv(
            "code,country,continent,year,gdp_per_capita,population,life_expectancy\n\
             AAA,Alpha,EU,2000,100.0,10,70.0\n\
             AAA,Alpha,EU,2020,300.0,10,70.0\n\
             BBB,Beta,EU,2020,500.0,10,70.0\n\
             CCC,Gamma,EU,2020,300.0,10,70.0\n",
        )
    }

    #[test]
    fn sorted_descending_by_latest_value() {
        let top = top_n(&sample_records(), IndicatorKind::GdpPerCapita, 3);
        let ids: Vec<&str> = top.iter().map(|(id, _)| id.as_str()).collect();
        // BBB leads; AAA and CCC tie at 300 and resolve by ascending id.
        assert_eq!(ids, vec!["BBB", "AAA", "CCC"]);
        assert!((top[0].1 - 500.0).abs() < 1e-9);
    }

    #[test]
    fn truncates_to_n() {
        let top = top_n(&sample_records(), IndicatorKind::GdpPerCapita, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].0, "BBB");
        assert_eq!(top[1].0, "AAA");
    }

    #[test]
    fn returns_everything_when_n_exceeds_countries() {
        let top = top_n(&sample_records(), IndicatorKind::GdpPerCapita, 10);
        assert_eq!(top.len(), 3);
    }

    #[test]
    fn empty_records_rank_empty() {
        assert!(top_n(&[], IndicatorKind::Population, 5).is_empty());
    }
}
