use chrono::{NaiveDateTime, TimeDelta};
use petgraph::graph::{EdgeIndex, NodeIndex};

use super::edge_option::EdgeOption;
use crate::error::Error;
use crate::model::{EdgePayload, Graph, State, WalkOptions};

/// A [`Graph`] that additionally tracks every scheduled edge in a flat
/// list, independent of adjacency, so one query can rank all of them by
/// arrival time in a single sweep.
#[derive(Debug, Clone, Default)]
pub struct KaoGraph {
    graph: Graph,
    hops: Vec<EdgeIndex>,
}

impl KaoGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(&mut self, label: &str) -> NodeIndex {
        self.graph.add_vertex(label)
    }

    /// Add an edge to the underlying graph. Scheduled payloads are also
    /// appended to the flat hop list; street payloads only join the
    /// adjacency structure.
    pub fn add_edge(&mut self, from: &str, to: &str, payload: EdgePayload) -> EdgeIndex {
        let scheduled = matches!(payload, EdgePayload::Hop(_));
        let edge = self.graph.add_edge(from, to, payload);
        if scheduled {
            self.hops.push(edge);
        }
        edge
    }

    pub fn get_vertex(&self, label: &str) -> Option<NodeIndex> {
        self.graph.get_vertex(label)
    }

    pub fn vertex(&self, label: &str) -> Result<NodeIndex, Error> {
        self.graph.vertex(label)
    }

    /// The underlying adjacency graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Number of edges in the flat scheduled-edge list.
    pub fn hop_count(&self) -> usize {
        self.hops.len()
    }

    /// Evaluate every tracked edge once from `time` and return the
    /// catchable ones, ordered ascending by time to arrival.
    ///
    /// Edges arriving more than `window` past `time` are dropped. The sort
    /// is stable, so equal arrivals keep registration order. Each call costs
    /// a full scan plus a sort; nothing is cached between calls.
    pub fn sorted_edges(
        &self,
        time: NaiveDateTime,
        window: TimeDelta,
    ) -> Result<Vec<EdgeOption>, Error> {
        let start = State::new(time);
        let options = WalkOptions::default();
        let mut ret = Vec::new();

        for &edge in &self.hops {
            let Some(payload) = self.graph.payload(edge) else {
                continue;
            };
            let Some(result) = payload.walk_checked(&start, &options)? else {
                continue;
            };
            let time_to_arrival = result.time() - time;
            if time_to_arrival <= window {
                ret.push(EdgeOption::new(edge, time_to_arrival));
            }
        }

        ret.sort_by_key(EdgeOption::time_to_arrival);
        Ok(ret)
    }
}
