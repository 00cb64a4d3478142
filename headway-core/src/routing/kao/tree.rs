use fixedbitset::FixedBitSet;
use hashbrown::HashMap;
use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::model::State;
use crate::routing::spt::GraphPath;

#[derive(Debug, Clone, Copy)]
struct TreeRecord {
    parent: Option<(NodeIndex, EdgeIndex)>,
    state: State,
}

/// Parent-pointer tree grown by the single-pass earliest-arrival search.
///
/// Each reached vertex records the edge it was connected through and the
/// state after riding that edge; the root records no parent. Membership is
/// kept in a bitset since the search probes it twice for every candidate
/// edge. A vertex is only ever linked while absent, so the structure is
/// acyclic by construction.
#[derive(Debug, Clone)]
pub struct Tree {
    root: NodeIndex,
    members: FixedBitSet,
    records: HashMap<NodeIndex, TreeRecord>,
}

impl Tree {
    pub(crate) fn new(root: NodeIndex, vertex_bound: usize, initial: State) -> Self {
        let mut members = FixedBitSet::with_capacity(vertex_bound);
        members.insert(root.index());

        let mut records = HashMap::new();
        records.insert(
            root,
            TreeRecord {
                parent: None,
                state: initial,
            },
        );

        Self {
            root,
            members,
            records,
        }
    }

    pub fn root(&self) -> NodeIndex {
        self.root
    }

    pub fn contains(&self, vertex: NodeIndex) -> bool {
        self.members.contains(vertex.index())
    }

    /// Parent edge of `vertex`; `None` for the root (and for vertices the
    /// tree never reached).
    pub fn parent(&self, vertex: NodeIndex) -> Option<EdgeIndex> {
        self.records
            .get(&vertex)
            .and_then(|record| record.parent)
            .map(|(_, edge)| edge)
    }

    /// Cumulative state recorded when `vertex` joined the tree.
    pub fn state(&self, vertex: NodeIndex) -> Option<&State> {
        self.records.get(&vertex).map(|record| &record.state)
    }

    pub fn vertices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.records.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn set_parent(
        &mut self,
        vertex: NodeIndex,
        parent: NodeIndex,
        edge: EdgeIndex,
        state: State,
    ) {
        self.members.grow(vertex.index() + 1);
        self.members.insert(vertex.index());
        self.records.insert(
            vertex,
            TreeRecord {
                parent: Some((parent, edge)),
                state,
            },
        );
    }

    /// Extract the root-to-`vertex` chain of edges. `None` means the vertex
    /// never joined the tree.
    pub fn path(&self, vertex: NodeIndex) -> Option<GraphPath> {
        if !self.contains(vertex) {
            return None;
        }

        let mut path = GraphPath::default();
        let mut current = vertex;
        path.vertices.push(current);

        while let Some((from, edge)) = self.records.get(&current).and_then(|record| record.parent)
        {
            path.edges.push(edge);
            path.vertices.push(from);
            current = from;
        }

        path.vertices.reverse();
        path.edges.reverse();
        Some(path)
    }
}
