//! Single-pass greedy earliest-arrival tree search
//!
//! Instead of a priority queue, this search leans on a precomputed global
//! ordering: every scheduled edge in the network, ranked once by how soon it
//! would deliver a traveler starting at the query instant. One linear pass
//! over that ranking grows the tree.

mod edge_option;
mod graph;
mod tree;

pub use edge_option::EdgeOption;
pub use graph::KaoGraph;
pub use tree::Tree;

use chrono::{NaiveDateTime, TimeDelta};

use crate::error::Error;
use crate::model::State;

/// Build an earliest-arrival tree rooted at `origin`.
///
/// Makes exactly one pass over [`KaoGraph::sorted_edges`] for
/// (`start_time`, `window`), in ascending time-to-arrival order. A
/// destination is adopted the first time a connection from inside the tree
/// reaches it; ascending arrival order makes that first connection the
/// earliest one the ranking can offer. When the boarding vertex was itself
/// reached by a scheduled leg, the candidate must depart no earlier than
/// that leg arrives, otherwise it is skipped: you cannot board before you
/// are there, and the global ordering alone cannot see that.
///
/// The single pass is a greedy heuristic: a connection skipped as
/// infeasible is never revisited, and the global sort assumes composed
/// paths do not overtake each other in ways it cannot capture. Within those
/// assumptions each vertex keeps the earliest arrival the ranking offers.
pub fn earliest_arrival_tree(
    graph: &KaoGraph,
    start_time: NaiveDateTime,
    origin: &str,
    window: TimeDelta,
) -> Result<Tree, Error> {
    let root = graph.vertex(origin)?;
    let mut tree = Tree::new(root, graph.graph().vertex_count(), State::new(start_time));

    for option in graph.sorted_edges(start_time, window)? {
        let Some((from, to)) = graph.graph().endpoints(option.edge()) else {
            continue;
        };
        if !tree.contains(from) || tree.contains(to) {
            continue;
        }
        let Some(hop) = graph.graph().payload(option.edge()).and_then(|p| p.as_hop()) else {
            continue;
        };

        let feasible = match tree.parent(from) {
            // The root boards with no prior leg to wait for.
            None => true,
            // Transfer check: the leg that brought us to `from` must have
            // arrived by the time this one leaves.
            Some(_) => tree
                .state(from)
                .is_some_and(|reached| hop.departure() >= reached.time()),
        };

        if feasible {
            let state = State::new(start_time)
                .at(hop.arrival(), option.time_to_arrival().num_seconds());
            tree.set_parent(to, from, option.edge(), state);
        }
    }

    Ok(tree)
}
