use chrono::TimeDelta;
use petgraph::graph::EdgeIndex;

/// An edge paired with its time to arrival from a query's start instant.
///
/// Ephemeral ranking artifact produced by
/// [`KaoGraph::sorted_edges`](super::KaoGraph::sorted_edges); never stored
/// past the query. Ordering happens on the full-width [`TimeDelta`] so that
/// widely separated options can never be misordered by a narrowing cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeOption {
    edge: EdgeIndex,
    time_to_arrival: TimeDelta,
}

impl EdgeOption {
    pub(crate) fn new(edge: EdgeIndex, time_to_arrival: TimeDelta) -> Self {
        Self {
            edge,
            time_to_arrival,
        }
    }

    pub fn edge(&self) -> EdgeIndex {
        self.edge
    }

    pub fn time_to_arrival(&self) -> TimeDelta {
        self.time_to_arrival
    }
}
