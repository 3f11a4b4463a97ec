//! The standard indicators dashboard session.
//!
//! This crate wires the query service and aggregation functions into the
//! binding graph: three selector inputs (continent, country multi-select,
//! indicator) drive five named outputs (country options, KPI map, top-N bar
//! chart, trend lines, summary card). The outputs are serializable spec
//! structs from [`models`], published as JSON values — that JSON is the
//! whole interface toward the rendering layer.

pub mod models;
pub mod session;

pub use session::DashboardSession;
