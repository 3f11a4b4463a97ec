//! Declarative input-to-output binding graph.
//!
//! Dashboard wiring is usually hidden inside a UI framework: a callback is
//! decorated with the names of the inputs it reads and the outputs it
//! writes, and the framework decides when to re-run it. This crate makes
//! that wiring an explicit data structure: a [`graph::BindingGraph`] holds
//! the named input values, the registered bindings with their declared
//! dependencies, and the last published output values, and a synchronous
//! dispatcher recomputes exactly the bindings made stale by an input change.
//!
//! Values are `serde_json::Value`: primitives and small arrays compared by
//! value for change detection, and already in the shape the rendering layer
//! consumes.
//!
//! Failure of one binding never disturbs another: the failed binding's
//! outputs keep their last published values and the failure is reported in
//! the [`graph::DispatchReport`].

pub mod binding;
pub mod error;
pub mod graph;

pub use graph::BindingGraph;
