//! General time-dependent shortest-path search

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use petgraph::graph::NodeIndex;

use crate::Weight;
use crate::error::Error;
use crate::model::{Graph, State, WalkOptions};
use crate::routing::spt::ShortestPathTree;

#[derive(Copy, Clone, Eq, PartialEq)]
struct QueueEntry {
    weight: Weight,
    vertex: NodeIndex,
}

// Min-heap by weight (reversed from standard Rust BinaryHeap)
impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.weight.cmp(&self.weight)
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Generalized Dijkstra over the [`Walkable`](crate::model::Walkable)
/// abstraction.
///
/// Grows a shortest-path tree from `origin`, ordered by accumulated weight
/// rather than raw clock time: edge costs depend on the state they are
/// entered with, so each relaxation re-walks the edge from the settled
/// state. An edge that cannot be used from the current state is pruned
/// silently; only a payload breaking the monotonicity contract is an error.
///
/// With a `target` the search stops as soon as the target is popped; without
/// one it runs until the frontier empties and the tree spans everything
/// reachable. A candidate must strictly improve the recorded weight to take
/// over a vertex, so the first-discovered path wins ties and the result is
/// reproducible.
pub fn shortest_path_tree(
    graph: &Graph,
    origin: &str,
    target: Option<&str>,
    initial: State,
    options: &WalkOptions,
) -> Result<ShortestPathTree, Error> {
    let origin = graph.vertex(origin)?;
    let target = target.map(|label| graph.vertex(label)).transpose()?;

    let mut tree = ShortestPathTree::new(origin, initial);
    let mut heap = BinaryHeap::new();
    heap.push(QueueEntry {
        weight: initial.weight(),
        vertex: origin,
    });

    while let Some(QueueEntry { weight, vertex }) = heap.pop() {
        if target == Some(vertex) {
            break;
        }

        // Skip stale entries: a better path was recorded after this push.
        let Some(record) = tree.vertex(vertex) else {
            continue;
        };
        if weight > record.weight() {
            continue;
        }
        let state = *record.state();

        for (edge, next, payload) in graph.outgoing(vertex) {
            let Some(next_state) = payload.walk_checked(&state, options)? else {
                continue;
            };

            let improves = match tree.vertex(next) {
                None => true,
                Some(existing) => next_state.weight() < existing.weight(),
            };
            if improves {
                tree.set_parent(next, vertex, edge, next_state);
                heap.push(QueueEntry {
                    weight: next_state.weight(),
                    vertex: next,
                });
            }
        }
    }

    Ok(tree)
}
