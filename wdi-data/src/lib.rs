//! Aggregation functions for indicator data.
//!
//! Every function here is pure: a record slice in, a value out. The query
//! layer produces the slices; the dashboard bindings turn these results into
//! chart specifications. Determinism comes from `BTreeMap` accumulation and
//! explicit sort keys, so equal inputs always produce identical output.
//!
//! KPI semantics are "latest available year per country": the value of a
//! country is the value of its maximum-year record in the given slice. Year
//! windows are narrowed upstream via the query layer's year-range filter,
//! never inferred here.

pub mod kpi;
pub mod ranking;
pub mod series;
pub mod summary;
