use serde::Serialize;

/// One rendered edge with the positional indices renderers map onto nodes.
#[derive(Debug, Clone, Serialize)]
pub struct FlowEdgeEntry {
    pub source: usize,
    pub source_label: &'static str,
    pub target: usize,
    pub target_label: &'static str,
    pub value: usize,
}

/// Serializable snapshot of a computed flow graph.
#[derive(Debug, Clone, Serialize)]
pub struct FlowGraphSummary {
    pub nodes: Vec<&'static str>,
    pub edges: Vec<FlowEdgeEntry>,
    pub uncategorized: usize,
}

/// Parallel-array layout matching what Sankey chart libraries consume.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SankeyView {
    pub labels: Vec<&'static str>,
    pub sources: Vec<usize>,
    pub targets: Vec<usize>,
    pub values: Vec<usize>,
}
