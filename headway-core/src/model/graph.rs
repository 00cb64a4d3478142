//! Directed multigraph keyed by unique string labels

use hashbrown::HashMap;
use petgraph::Direction;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::error::Error;
use crate::model::edge::EdgePayload;

/// A graph vertex: one distinct location, identified by its label.
#[derive(Debug, Clone)]
pub struct Vertex {
    label: String,
}

impl Vertex {
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Directed multigraph over string-labelled vertices.
///
/// Labels are unique; edges are not, so two vertices may be connected by any
/// number of parallel edges, each with its own payload. The graph owns all
/// vertices and edges and hands out indices instead of references. No
/// removal operations exist, so indices stay valid for the graph's lifetime.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    graph: DiGraph<Vertex, EdgePayload>,
    labels: HashMap<String, NodeIndex>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a vertex, or return the existing one with the same label.
    pub fn add_vertex(&mut self, label: &str) -> NodeIndex {
        if let Some(&index) = self.labels.get(label) {
            return index;
        }
        let index = self.graph.add_node(Vertex {
            label: label.to_string(),
        });
        self.labels.insert(label.to_string(), index);
        index
    }

    /// Add a directed edge carrying `payload`. Endpoint vertices are created
    /// on demand; the edge is registered in both adjacency lists.
    pub fn add_edge(&mut self, from: &str, to: &str, payload: EdgePayload) -> EdgeIndex {
        let from = self.add_vertex(from);
        let to = self.add_vertex(to);
        self.graph.add_edge(from, to, payload)
    }

    pub fn get_vertex(&self, label: &str) -> Option<NodeIndex> {
        self.labels.get(label).copied()
    }

    /// Look up a vertex by label, treating an unknown label as a caller
    /// error.
    pub fn vertex(&self, label: &str) -> Result<NodeIndex, Error> {
        self.get_vertex(label)
            .ok_or_else(|| Error::UnknownVertex(label.to_string()))
    }

    pub fn label(&self, vertex: NodeIndex) -> Option<&str> {
        self.graph.node_weight(vertex).map(Vertex::label)
    }

    pub fn payload(&self, edge: EdgeIndex) -> Option<&EdgePayload> {
        self.graph.edge_weight(edge)
    }

    pub fn endpoints(&self, edge: EdgeIndex) -> Option<(NodeIndex, NodeIndex)> {
        self.graph.edge_endpoints(edge)
    }

    /// Outgoing edges of `vertex` as (edge, target, payload) triples.
    pub fn outgoing(
        &self,
        vertex: NodeIndex,
    ) -> impl Iterator<Item = (EdgeIndex, NodeIndex, &EdgePayload)> {
        self.graph
            .edges(vertex)
            .map(|edge| (edge.id(), edge.target(), edge.weight()))
    }

    /// Incoming edges of `vertex` as (edge, source, payload) triples.
    pub fn incoming(
        &self,
        vertex: NodeIndex,
    ) -> impl Iterator<Item = (EdgeIndex, NodeIndex, &EdgePayload)> {
        self.graph
            .edges_directed(vertex, Direction::Incoming)
            .map(|edge| (edge.id(), edge.source(), edge.weight()))
    }

    pub fn out_degree(&self, vertex: NodeIndex) -> usize {
        self.graph.edges(vertex).count()
    }

    pub fn in_degree(&self, vertex: NodeIndex) -> usize {
        self.graph
            .edges_directed(vertex, Direction::Incoming)
            .count()
    }

    pub fn vertices(&self) -> impl Iterator<Item = NodeIndex> {
        self.graph.node_indices()
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
