//! Continent selection and the errors for codes the dataset does not know.

use std::fmt;

/// Text form of the all-continents sentinel.
pub const ALL_SENTINEL: &str = "ALL";

/// A continent selection: one continent code, or every continent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContinentSelector {
    /// Every continent (the `ALL` sentinel).
    All,
    /// A single continent code, e.g. `EU`.
    Code(String),
}

impl ContinentSelector {
    /// Parse a selector from its text form.
    ///
    /// `ALL` (case-insensitive) is the sentinel; anything else is kept as a
    /// continent code and validated against the dataset by the query layer.
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(ALL_SENTINEL) {
            ContinentSelector::All
        } else {
            ContinentSelector::Code(trimmed.to_string())
        }
    }

    /// The continent code, if this selector names one.
    pub fn code(&self) -> Option<&str> {
        match self {
            ContinentSelector::All => None,
            ContinentSelector::Code(code) => Some(code),
        }
    }
}

impl fmt::Display for ContinentSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContinentSelector::All => f.write_str(ALL_SENTINEL),
            ContinentSelector::Code(code) => f.write_str(code),
        }
    }
}

/// A continent or country code not present in the dataset.
///
/// Empty query results are valid values, never errors; these variants cover
/// the one malformed-input case the query layer rejects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    UnknownContinent(String),
    UnknownCountry(String),
}

impl fmt::Display for SelectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectorError::UnknownContinent(code) => {
                write!(f, "unknown continent code: {}", code)
            }
            SelectorError::UnknownCountry(code) => {
                write!(f, "unknown country code: {}", code)
            }
        }
    }
}

impl std::error::Error for SelectorError {}
