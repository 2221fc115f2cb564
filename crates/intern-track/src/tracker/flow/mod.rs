//! Status flow aggregation behind the Sankey pipeline view.

mod aggregate;
pub mod views;

pub use aggregate::{FlowEdge, FlowGraph, FlowNode, StatusTally};
