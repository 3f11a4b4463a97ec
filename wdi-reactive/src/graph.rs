//! Binding registry and synchronous event dispatcher.

use crate::binding::{Binding, BindingInfo, BindingState, ComputeFn, InputSnapshot};
use crate::error::{BindingFailure, GraphError};
use serde_json::Value;
use std::collections::BTreeMap;

/// Outcome of one input-change event or a full refresh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DispatchReport {
    /// Outputs whose published value actually changed, in binding
    /// registration order. Re-publishing an equal value is not a change.
    pub changed: Vec<(String, Value)>,
    /// Bindings whose computation failed; their outputs kept the last good
    /// value.
    pub failures: Vec<BindingFailure>,
}

impl DispatchReport {
    /// The new value published for `output` by this event, if any.
    pub fn changed_value(&self, output: &str) -> Option<&Value> {
        self.changed
            .iter()
            .find(|(name, _)| name == output)
            .map(|(_, value)| value)
    }
}

/// Declarative dependency graph mapping named inputs to named outputs.
///
/// The graph owns the current input values (the session's `InputState`),
/// the registered bindings, and the last published output values. It is
/// built once at session start and driven by [`set_input`](Self::set_input)
/// events; registration and dispatch misuse return [`GraphError`] instead
/// of panicking.
#[derive(Default)]
pub struct BindingGraph {
    inputs: BTreeMap<String, Value>,
    outputs: BTreeMap<String, Value>,
    bindings: Vec<Binding>,
}

impl BindingGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // ───────────────────── Registration ─────────────────────

    /// Declare a named input with its initial value.
    ///
    /// Re-declaring replaces the stored value without notifying bindings;
    /// use [`set_input`](Self::set_input) for change events.
    pub fn register_input(&mut self, name: impl Into<String>, initial: Value) {
        self.inputs.insert(name.into(), initial);
    }

    /// Register a binding with its declared input and output names.
    ///
    /// Fails if the binding name is taken, an input was never declared, or
    /// an output is already owned by another binding.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        inputs: &[&str],
        outputs: &[&str],
        compute: ComputeFn,
    ) -> Result<(), GraphError> {
        let name = name.into();
        if self.bindings.iter().any(|b| b.name == name) {
            return Err(GraphError::DuplicateBinding(name));
        }
        for input in inputs {
            if !self.inputs.contains_key(*input) {
                return Err(GraphError::UnknownInput {
                    binding: name,
                    input: (*input).to_string(),
                });
            }
        }
        for output in outputs {
            if let Some(owner) = self
                .bindings
                .iter()
                .find(|b| b.outputs.iter().any(|o| o == output))
            {
                return Err(GraphError::DuplicateOutput {
                    owner: owner.name.clone(),
                    output: (*output).to_string(),
                });
            }
        }
        self.bindings.push(Binding {
            name,
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            outputs: outputs.iter().map(|s| s.to_string()).collect(),
            compute,
            state: BindingState::Idle,
            last_error: None,
        });
        Ok(())
    }

    // ───────────────────── Dispatch ─────────────────────

    /// Apply an input-change event.
    ///
    /// The stored value is replaced first, then every binding declaring the
    /// input is recomputed against the then-current input state; bindings
    /// not declaring it are untouched. An event carrying a value equal to
    /// the current one is a no-op.
    pub fn set_input(&mut self, name: &str, value: Value) -> Result<DispatchReport, GraphError> {
        let Some(current) = self.inputs.get_mut(name) else {
            return Err(GraphError::UnknownInputEvent(name.to_string()));
        };
        if *current == value {
            return Ok(DispatchReport::default());
        }
        *current = value;
        let stale: Vec<usize> = self
            .bindings
            .iter()
            .enumerate()
            .filter(|(_, b)| b.inputs.iter().any(|input| input == name))
            .map(|(index, _)| index)
            .collect();
        Ok(self.run_bindings(&stale))
    }

    /// Run every binding once, publishing the initial outputs.
    pub fn refresh_all(&mut self) -> DispatchReport {
        let all: Vec<usize> = (0..self.bindings.len()).collect();
        self.run_bindings(&all)
    }

    fn run_bindings(&mut self, indices: &[usize]) -> DispatchReport {
        let mut report = DispatchReport::default();
        for &index in indices {
            self.bindings[index].state = BindingState::Computing;
            let result = {
                let snapshot = InputSnapshot::new(&self.inputs);
                (self.bindings[index].compute)(&snapshot)
            };
            self.bindings[index].state = BindingState::Idle;

            let values = match result {
                Ok(values) => values,
                Err(err) => {
                    self.record_failure(index, format!("{err:#}"), &mut report);
                    continue;
                }
            };
            if let Some(output) = values
                .keys()
                .find(|key| !self.bindings[index].outputs.contains(*key))
                .cloned()
            {
                let message = format!("computation produced undeclared output `{}`", output);
                self.record_failure(index, message, &mut report);
                continue;
            }
            self.bindings[index].last_error = None;
            for (output, value) in values {
                if self.outputs.get(&output) != Some(&value) {
                    report.changed.push((output.clone(), value.clone()));
                }
                self.outputs.insert(output, value);
            }
        }
        report
    }

    fn record_failure(&mut self, index: usize, message: String, report: &mut DispatchReport) {
        let binding = &mut self.bindings[index];
        log::warn!("binding `{}` failed: {}", binding.name, message);
        binding.last_error = Some(message.clone());
        report.failures.push(BindingFailure {
            binding: binding.name.clone(),
            message,
        });
    }

    // ───────────────────── Inspection ─────────────────────

    /// Current value of a named input.
    pub fn input(&self, name: &str) -> Option<&Value> {
        self.inputs.get(name)
    }

    /// Last published value of a named output.
    pub fn output(&self, name: &str) -> Option<&Value> {
        self.outputs.get(name)
    }

    /// Registered bindings with their declared dependencies, in
    /// registration order.
    pub fn bindings(&self) -> Vec<BindingInfo> {
        self.bindings
            .iter()
            .map(|b| BindingInfo {
                name: b.name.clone(),
                inputs: b.inputs.clone(),
                outputs: b.outputs.clone(),
                state: b.state,
                last_error: b.last_error.clone(),
            })
            .collect()
    }
}
