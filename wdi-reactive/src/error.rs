//! Error taxonomy for the binding graph.

use std::fmt;

/// Graph construction or dispatch misuse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A binding declared an input name that was never registered.
    UnknownInput { binding: String, input: String },
    /// An input-change event named an input that was never registered.
    UnknownInputEvent(String),
    /// Another binding already owns one of the declared outputs. Outputs
    /// have exactly one producer; this is what keeps independent bindings
    /// order-free.
    DuplicateOutput { owner: String, output: String },
    /// A binding name was registered twice.
    DuplicateBinding(String),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::UnknownInput { binding, input } => {
                write!(f, "binding `{}` declares unknown input `{}`", binding, input)
            }
            GraphError::UnknownInputEvent(input) => {
                write!(f, "input-change event for unknown input `{}`", input)
            }
            GraphError::DuplicateOutput { owner, output } => {
                write!(f, "output `{}` is already owned by binding `{}`", output, owner)
            }
            GraphError::DuplicateBinding(name) => {
                write!(f, "binding `{}` is already registered", name)
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// A binding computation failed during dispatch.
///
/// The binding's outputs keep their last published values; unrelated
/// bindings are unaffected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingFailure {
    pub binding: String,
    pub message: String,
}

impl fmt::Display for BindingFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "binding `{}` failed: {}", self.binding, self.message)
    }
}

impl std::error::Error for BindingFailure {}
