//! Continent codes and display labels.

/// Continent codes shipped with the standard dataset, with display labels.
///
/// Which codes actually exist is dataset-driven; this table only supplies
/// labels for the codes the standard dataset uses.
pub const CONTINENT_LABELS: &[(&str, &str)] = &[
    ("AF", "Africa"),
    ("AM", "Americas"),
    ("AS", "Asia"),
    ("EU", "Europe"),
    ("OC", "Oceania"),
];

/// Display label for a continent code.
///
/// Codes outside the shipped table fall back to the code itself, so
/// dataset-supplied continents still render without a schema change.
pub fn continent_label(code: &str) -> &str {
    CONTINENT_LABELS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
        .unwrap_or(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_have_labels() {
        assert_eq!(continent_label("EU"), "Europe");
        assert_eq!(continent_label("OC"), "Oceania");
    }

    #[test]
    fn unknown_code_falls_back_to_code() {
        assert_eq!(continent_label("AN"), "AN");
    }
}
