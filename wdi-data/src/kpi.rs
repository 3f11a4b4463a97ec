//! Latest-year KPI extraction per country.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use wdi_core::indicator::IndicatorKind;
use wdi_core::record::Record;

/// Index the latest-year record per country id present in `records`.
///
/// (country_id, year) is unique in the store, so there is exactly one
/// latest record per country.
pub fn latest_by_country(records: &[Record]) -> BTreeMap<&str, &Record> {
    let mut latest: BTreeMap<&str, &Record> = BTreeMap::new();
    for record in records {
        match latest.entry(record.country_id.as_str()) {
            Entry::Vacant(entry) => {
                entry.insert(record);
            }
            Entry::Occupied(mut entry) => {
                if record.year > entry.get().year {
                    entry.insert(record);
                }
            }
        }
    }
    latest
}

/// Latest-year value of `indicator` per country present in `records`.
///
/// Countries with no records are absent from the result, not zero.
pub fn per_country_kpi(records: &[Record], indicator: IndicatorKind) -> BTreeMap<String, f64> {
    latest_by_country(records)
        .into_iter()
        .map(|(country_id, record)| (country_id.to_string(), indicator.value_of(record)))
        .collect()
}
