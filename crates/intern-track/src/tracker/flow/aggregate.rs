use serde::Serialize;

use super::views::{FlowEdgeEntry, FlowGraphSummary, SankeyView};
use crate::tracker::domain::{ApplicationStatus, InternshipRecord};

/// Nodes of the status flow graph. The variant order fixes the positional
/// indices edge views refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowNode {
    TotalApplications,
    Applied,
    Ghosted,
    Interview,
    Offer,
    Rejected,
    Withdrawn,
}

impl FlowNode {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::TotalApplications,
            Self::Applied,
            Self::Ghosted,
            Self::Interview,
            Self::Offer,
            Self::Rejected,
            Self::Withdrawn,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::TotalApplications => "Total Applications",
            Self::Applied => "Applied",
            Self::Ghosted => "Ghosted",
            Self::Interview => "Interview",
            Self::Offer => "Offer",
            Self::Rejected => "Rejected",
            Self::Withdrawn => "Withdrawn",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::TotalApplications => 0,
            Self::Applied => 1,
            Self::Ghosted => 2,
            Self::Interview => 3,
            Self::Offer => 4,
            Self::Rejected => 5,
            Self::Withdrawn => 6,
        }
    }
}

/// Per-status bucket counts feeding the edge derivation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StatusTally {
    pub total: usize,
    pub applied: usize,
    pub interview: usize,
    pub offer: usize,
    pub rejected: usize,
    pub withdrawn: usize,
    pub uncategorized: usize,
}

impl StatusTally {
    pub fn of<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a InternshipRecord>,
    {
        let mut tally = Self::default();
        for record in records {
            tally.total += 1;
            match record.status.known() {
                Some(ApplicationStatus::Applied) => tally.applied += 1,
                Some(ApplicationStatus::Interview) => tally.interview += 1,
                Some(ApplicationStatus::Offer) => tally.offer += 1,
                Some(ApplicationStatus::Rejected) => tally.rejected += 1,
                Some(ApplicationStatus::Withdrawn) => tally.withdrawn += 1,
                None => tally.uncategorized += 1,
            }
        }
        tally
    }

    pub fn bucket(self, status: ApplicationStatus) -> usize {
        match status {
            ApplicationStatus::Applied => self.applied,
            ApplicationStatus::Interview => self.interview,
            ApplicationStatus::Offer => self.offer,
            ApplicationStatus::Rejected => self.rejected,
            ApplicationStatus::Withdrawn => self.withdrawn,
        }
    }
}

/// A weighted link between two flow nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlowEdge {
    pub source: FlowNode,
    pub target: FlowNode,
    pub weight: usize,
}

/// Weighted directed flow of applications across pipeline stages.
///
/// Rebuilt from scratch on every call; holds no state between computations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowGraph {
    edges: Vec<FlowEdge>,
    tally: StatusTally,
}

impl FlowGraph {
    /// Derive the flow graph from a record set.
    ///
    /// Offers are attributed to interviews first and the excess is treated
    /// as direct offers; interviewees without an offer are treated as
    /// rejections. The records carry no transition history, so this split is
    /// a modeling approximation, not a derived fact.
    pub fn compute<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a InternshipRecord>,
    {
        Self::from_tally(StatusTally::of(records))
    }

    pub(crate) fn from_tally(tally: StatusTally) -> Self {
        let mut edges = Vec::new();

        push_edge(&mut edges, FlowNode::TotalApplications, FlowNode::Applied, tally.total);
        push_edge(&mut edges, FlowNode::Applied, FlowNode::Ghosted, tally.applied);
        push_edge(&mut edges, FlowNode::Applied, FlowNode::Interview, tally.interview);

        let offers_from_interview = tally.offer.min(tally.interview);
        let offers_from_applied = tally.offer - offers_from_interview;
        push_edge(&mut edges, FlowNode::Applied, FlowNode::Offer, offers_from_applied);
        push_edge(&mut edges, FlowNode::Interview, FlowNode::Offer, offers_from_interview);

        let rejected_from_interview = tally.interview - offers_from_interview;
        let rejected_from_applied = tally.rejected.saturating_sub(rejected_from_interview);
        push_edge(&mut edges, FlowNode::Interview, FlowNode::Rejected, rejected_from_interview);
        push_edge(&mut edges, FlowNode::Applied, FlowNode::Rejected, rejected_from_applied);

        push_edge(&mut edges, FlowNode::Applied, FlowNode::Withdrawn, tally.withdrawn);

        Self { edges, tally }
    }

    /// Node labels in index order.
    pub fn nodes() -> [&'static str; 7] {
        FlowNode::ordered().map(FlowNode::label)
    }

    pub fn edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    pub fn tally(&self) -> StatusTally {
        self.tally
    }

    /// Records whose status matched no known bucket. They count toward the
    /// total edge only.
    pub fn uncategorized(&self) -> usize {
        self.tally.uncategorized
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Presentation view carrying positional indices for each edge.
    pub fn summary(&self) -> FlowGraphSummary {
        let edges = self
            .edges
            .iter()
            .map(|edge| FlowEdgeEntry {
                source: edge.source.index(),
                source_label: edge.source.label(),
                target: edge.target.index(),
                target_label: edge.target.label(),
                value: edge.weight,
            })
            .collect();

        FlowGraphSummary {
            nodes: Self::nodes().to_vec(),
            edges,
            uncategorized: self.tally.uncategorized,
        }
    }

    /// Parallel-array layout consumed by Sankey chart renderers.
    pub fn sankey(&self) -> SankeyView {
        let mut view = SankeyView {
            labels: Self::nodes().to_vec(),
            ..SankeyView::default()
        };

        for edge in &self.edges {
            view.sources.push(edge.source.index());
            view.targets.push(edge.target.index());
            view.values.push(edge.weight);
        }

        view
    }
}

fn push_edge(edges: &mut Vec<FlowEdge>, source: FlowNode, target: FlowNode, weight: usize) {
    if weight > 0 {
        edges.push(FlowEdge {
            source,
            target,
            weight,
        });
    }
}
