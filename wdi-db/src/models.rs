//! Query result model structs for selection options.
//!
//! All structs derive `Serialize` so the dashboard bindings can publish them
//! as JSON output values for the rendering layer.

use serde::Serialize;

/// A continent entry for the continent dropdown.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ContinentOption {
    /// Continent code (e.g. "EU").
    pub code: String,
    /// Display label (e.g. "Europe").
    pub label: String,
}

/// A country entry for the country multi-select.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CountryOption {
    /// Country identifier (e.g. "DEU").
    pub country_id: String,
    /// Display name (e.g. "Germany").
    pub name: String,
}
