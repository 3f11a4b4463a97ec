//! A single binding: declared inputs, owned outputs, and its computation.

use serde_json::Value;
use std::collections::BTreeMap;

/// New values for (a subset of) a binding's declared outputs.
///
/// Declared outputs missing from the map keep their previous value; a key
/// outside the declared set fails the whole computation.
pub type OutputValues = BTreeMap<String, Value>;

/// A binding's computation: pure in the inputs it reads through the
/// snapshot.
pub type ComputeFn = Box<dyn Fn(&InputSnapshot<'_>) -> anyhow::Result<OutputValues>>;

/// Read-only view of the current input values.
///
/// Every binding recomputed for one event reads through a snapshot of the
/// same underlying state, taken after the event's value was stored, so no
/// binding observes a mix of old and new values.
pub struct InputSnapshot<'a> {
    values: &'a BTreeMap<String, Value>,
}

impl<'a> InputSnapshot<'a> {
    pub(crate) fn new(values: &'a BTreeMap<String, Value>) -> Self {
        Self { values }
    }

    /// Current value of a named input.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Current value of a named input, as a string slice if it is one.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Current value of a named input, as a list of strings.
    ///
    /// Missing inputs and non-string elements collapse to an empty/shorter
    /// list rather than an error; bindings treat them as "nothing selected".
    pub fn text_list(&self, name: &str) -> Vec<String> {
        self.get(name)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Lifecycle state of a binding.
///
/// Dispatch is synchronous: a binding enters `Computing` when its
/// computation starts and is back to `Idle` before the dispatcher returns,
/// whether the computation succeeded or failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingState {
    Idle,
    Computing,
}

/// Registered binding, owned by the graph.
pub(crate) struct Binding {
    pub name: String,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
    pub compute: ComputeFn,
    pub state: BindingState,
    pub last_error: Option<String>,
}

/// Inspection view of a registered binding.
#[derive(Debug, Clone, PartialEq)]
pub struct BindingInfo {
    pub name: String,
    /// Input names this binding declared; a change to any of them makes it
    /// stale.
    pub inputs: Vec<String>,
    /// Output names this binding owns.
    pub outputs: Vec<String>,
    pub state: BindingState,
    /// Message of the most recent failed computation, cleared on the next
    /// successful one.
    pub last_error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn snapshot_reads_typed_values() {
        let mut values = BTreeMap::new();
        values.insert("continent".to_string(), json!("EU"));
        values.insert("countries".to_string(), json!(["DEU", "FRA"]));
        let snapshot = InputSnapshot::new(&values);

        assert_eq!(snapshot.text("continent"), Some("EU"));
        assert_eq!(snapshot.text_list("countries"), vec!["DEU", "FRA"]);
        assert_eq!(snapshot.get("missing"), None);
        assert!(snapshot.text_list("missing").is_empty());
    }

    #[test]
    fn text_list_skips_non_strings() {
        let mut values = BTreeMap::new();
        values.insert("countries".to_string(), json!(["DEU", 7, "FRA"]));
        let snapshot = InputSnapshot::new(&values);
        assert_eq!(snapshot.text_list("countries"), vec!["DEU", "FRA"]);
    }
}
